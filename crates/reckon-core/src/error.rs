//! Unified error handling for Reckon Core.
//!
//! The evaluation engine itself never fails: unknown symbols are ignored and
//! invalid arithmetic settles into NaN or infinity. Errors only arise in the
//! application layer, where raw keystrokes are turned into engine calls.

use thiserror::Error;

/// Root error type for Reckon Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReckonError {
    /// A key that names no operation, rejected because strict mode is on.
    #[error("Unknown operation symbol '{symbol}'")]
    UnknownSymbol { symbol: String },

    /// The keypad buffer could not be read back as a number.
    #[error("Invalid operand '{input}': {reason}")]
    InvalidOperand { input: String, reason: String },
}

impl ReckonError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownSymbol { symbol } => vec![
                format!("'{}' is not a calculator key", symbol),
                "List available keys: reckon symbols".into(),
                "ASCII spellings work too, e.g. sqrt, *, /, ^, pi".into(),
            ],
            Self::InvalidOperand { input, .. } => vec![
                format!("Could not read '{}' as a number", input),
                "Digits and at most one '.' per number".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownSymbol { .. } | Self::InvalidOperand { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}

/// Convenient result type alias.
pub type ReckonResult<T> = Result<T, ReckonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbol_mentions_symbols_command() {
        let err = ReckonError::UnknownSymbol {
            symbol: "foo".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("reckon symbols")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn invalid_operand_display() {
        let err = ReckonError::InvalidOperand {
            input: "1..2".into(),
            reason: "invalid float literal".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid operand '1..2': invalid float literal"
        );
    }
}
