//! Canonical text form of operands and results.
//!
//! Every number the engine writes into its history, and every result a
//! renderer shows, goes through [`format_operand`], so `7` is always `7.0`
//! and the history reads the same way as the display.

use crate::error::{ReckonError, ReckonResult};

/// Render a value the way the history and the display show it.
///
/// Finite values use the shortest representation that round-trips and
/// always carry a fractional part (`7.0`, `0.1`, `-2.5`). Non-finite
/// values are written `nan`, `inf` and `-inf`.
pub fn format_operand(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    // `{:?}` keeps the trailing `.0` on integral values and prints
    // infinities as `inf` / `-inf`.
    format!("{value:?}")
}

/// Parse a keypad buffer into an operand.
///
/// A buffer ending in `.` (the user typed `12.` and pressed an operator) is
/// accepted as the integral value, and a lone `.` reads as zero.
pub fn parse_operand(input: &str) -> ReckonResult<f64> {
    let trimmed = input.trim();
    let normalised = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_owned()
    };

    normalised
        .parse::<f64>()
        .map_err(|e| ReckonError::InvalidOperand {
            input: input.to_owned(),
            reason: e.to_string(),
        })
}
