//! Application layer for Reckon.
//!
//! This layer contains:
//! - **Lexer**: typed text to key presses
//! - **Keypad**: digit buffering that feeds finished operands to the engine
//!
//! The application layer drives the domain engine but holds no arithmetic
//! of its own. All calculation rules live in `crate::domain`.

pub mod keypad;
pub mod lexer;

pub use keypad::{Keypad, RESET_LABEL, Screen};
pub use lexer::{CLEAR_SPELLINGS, Key, lex};
