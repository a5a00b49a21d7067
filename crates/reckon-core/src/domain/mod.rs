//! Core domain layer for Reckon.
//!
//! This module contains the calculator itself: pure logic, no I/O.
//!
//! - **Operation table**: the fixed set of keys and what they compute
//! - **Engine**: accumulator, pending operation and expression history
//! - **Number formatting**: the one canonical text form for operands
//!
//! Nothing here returns an error. Unknown symbols are ignored and invalid
//! arithmetic produces IEEE-754 `inf` / `nan`.

pub mod engine;
pub mod number;
pub mod operation;

pub use engine::{Engine, LastOperation, PENDING_SUFFIX, Readout};
pub use number::{format_operand, parse_operand};
pub use operation::{Operation, OperationEntry, OperationKind, OperationTable};
