//! Reckon Core - calculator engine and keypad
//!
//! This crate provides the domain and application layers for the Reckon
//! calculator. It performs no I/O; the `reckon` CLI is one presentation
//! layer built on top of it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           reckon-cli (CLI)              │
//! │   (eval, repl, rendering, config)       │
//! └──────────────────┬──────────────────────┘
//!                    │ feeds lines to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │     (lexer → Keypad → Screen)           │
//! └──────────────────┬──────────────────────┘
//!                    │ set_operand / perform_operation
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Engine, OperationTable, number fmt)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use reckon_core::domain::Engine;
//!
//! let mut engine = Engine::new();
//! engine.set_operand(3.0);
//! engine.perform_operation("+");
//! engine.set_operand(4.0);
//! engine.perform_operation("×");
//! engine.set_operand(2.0);
//! engine.perform_operation("=");
//!
//! assert_eq!(engine.result(), 14.0);
//! assert_eq!(engine.description(), "3.0+4.0×2.0=");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Key, Keypad, Screen, lex};
    pub use crate::domain::{
        Engine, LastOperation, Operation, OperationKind, OperationTable, Readout, format_operand,
    };
    pub use crate::error::{ReckonError, ReckonResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
