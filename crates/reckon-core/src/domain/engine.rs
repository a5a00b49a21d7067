//! The evaluation engine.
//!
//! Turns a stream of operands and operation symbols into a running result
//! and a human-readable history. Binary operations chain strictly left to
//! right; there is no precedence.
//!
//! The engine never fails. Symbols it does not know are ignored, and
//! arithmetic that has no real answer (`1 ÷ 0`, `√-1`) leaves the
//! accumulator at `inf` or `nan`, which later operations carry forward.

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::number::format_operand;
use crate::domain::operation::{Operation, OperationTable};

/// Suffix appended to the description while a binary operation waits for
/// its second operand.
pub const PENDING_SUFFIX: &str = "...";

/// Category of the most recent action.
///
/// Consulted only to decide how the history is edited; any action may
/// follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LastOperation {
    Digit,
    Constant,
    Unary,
    Binary,
    Equals,
    #[default]
    Clear,
}

/// A binary operation waiting for its second operand.
#[derive(Clone, Copy)]
struct Pending {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

impl Pending {
    fn resolve(self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}

/// Snapshot of what a renderer needs after each key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub result: f64,
    pub description: String,
    pub pending: bool,
}

/// Calculator state: accumulator, pending operation and history.
pub struct Engine {
    table: &'static OperationTable,
    accumulator: f64,
    pending: Option<Pending>,
    history: Vec<String>,
    last_operation: LastOperation,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("accumulator", &self.accumulator)
            .field("pending", &self.pending.map(|p| p.first_operand))
            .field("history", &self.history)
            .field("last_operation", &self.last_operation)
            .finish()
    }
}

impl Engine {
    /// A cleared engine over the standard key set.
    pub fn new() -> Self {
        Self::with_table(OperationTable::standard())
    }

    fn with_table(table: &'static OperationTable) -> Self {
        Self {
            table,
            accumulator: 0.0,
            pending: None,
            history: Vec::new(),
            last_operation: LastOperation::Clear,
        }
    }

    /// Enter a number.
    ///
    /// A number entered right after a unary result starts a fresh
    /// expression instead of extending the old one.
    pub fn set_operand(&mut self, value: f64) {
        if self.last_operation == LastOperation::Unary {
            self.history.clear();
        }
        self.accumulator = value;
        self.history.push(format_operand(value));
        self.last_operation = LastOperation::Digit;
        trace!(operand = value, "operand set");
    }

    /// Press the key labelled `symbol`. Unknown symbols change nothing.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(operation) = self.table.get(symbol) else {
            debug!(symbol, "ignoring unknown operation symbol");
            return;
        };

        match operation {
            Operation::Constant(value) => {
                self.history.push(symbol.to_owned());
                self.accumulator = value;
                self.last_operation = LastOperation::Constant;
            }
            Operation::Unary(function) => {
                self.wrap_in_parens(symbol);
                self.accumulator = function(self.accumulator);
                self.last_operation = LastOperation::Unary;
            }
            Operation::Binary(function) => {
                // The finished expression's "=" gives way to the new operator.
                if self.last_operation == LastOperation::Equals {
                    self.history.pop();
                }
                self.history.push(symbol.to_owned());
                self.resolve_pending();
                self.pending = Some(Pending {
                    function,
                    first_operand: self.accumulator,
                });
                self.last_operation = LastOperation::Binary;
            }
            Operation::Equals => {
                // No second operand was entered: the accumulator doubles as one.
                if self.last_operation == LastOperation::Binary {
                    self.history.push(format_operand(self.accumulator));
                }
                self.history.push(symbol.to_owned());
                self.resolve_pending();
                self.last_operation = LastOperation::Equals;
            }
        }

        trace!(
            symbol,
            kind = %operation.kind(),
            accumulator = self.accumulator,
            "operation performed"
        );
    }

    /// Reset to the freshly constructed state.
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.last_operation = LastOperation::Clear;
        self.history.clear();
        trace!("engine cleared");
    }

    /// The current accumulator.
    pub fn result(&self) -> f64 {
        self.accumulator
    }

    /// The history joined into one line, with `...` while an operation is
    /// pending.
    pub fn description(&self) -> String {
        let mut description = self.history.concat();
        if self.pending.is_some() {
            description.push_str(PENDING_SUFFIX);
        }
        description
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_operation(&self) -> LastOperation {
        self.last_operation
    }

    /// Whether `symbol` names a key in this engine's table.
    pub fn recognizes(&self, symbol: &str) -> bool {
        self.table.contains(symbol)
    }

    pub fn readout(&self) -> Readout {
        Readout {
            result: self.result(),
            description: self.description(),
            pending: self.is_pending(),
        }
    }

    fn resolve_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = pending.resolve(self.accumulator);
        }
    }

    /// Write a unary symbol around its operand in the history.
    ///
    /// After `=` the whole finished expression is wrapped, landing the
    /// closing paren before the `=`: `7+9=` becomes `√(7+9)=`. Otherwise only
    /// the last token is wrapped: `123` becomes `√(123)`.
    fn wrap_in_parens(&mut self, symbol: &str) {
        let history = &mut self.history;

        if self.last_operation == LastOperation::Equals {
            history.insert(history.len() - 1, ")".to_owned());
            history.insert(0, symbol.to_owned());
            history.insert(1, "(".to_owned());
            return;
        }

        // Nothing entered yet: the operand is the accumulator itself.
        if history.is_empty() {
            history.push(format_operand(self.accumulator));
        }
        history.insert(history.len() - 1, symbol.to_owned());
        history.insert(history.len() - 1, "(".to_owned());
        history.push(")".to_owned());
    }
}
