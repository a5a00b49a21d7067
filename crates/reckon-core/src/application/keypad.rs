//! Keystroke buffering in front of the engine.
//!
//! The engine only accepts finished numbers. The keypad collects digit
//! presses into a display buffer, enforces a single decimal point per
//! entry, and hands the parsed value to the engine when an operation key
//! is pressed.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::lexer::{Key, lex};
use crate::domain::{Engine, format_operand, parse_operand};
use crate::error::{ReckonError, ReckonResult};

/// What the display shows after a reset.
pub const RESET_LABEL: &str = "0";

/// The two labels a renderer shows, plus the raw values behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    /// Main display: the number being typed, or the last result.
    pub display: String,
    /// Secondary label: the expression so far.
    pub history: String,
    /// The engine's accumulator. Serialised as `null` when not finite.
    pub result: f64,
    pub pending: bool,
}

/// Digit entry and operation keys wired to an [`Engine`].
#[derive(Debug)]
pub struct Keypad {
    engine: Engine,
    display: String,
    typing: bool,
    decimal_used: bool,
    strict: bool,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            display: RESET_LABEL.to_owned(),
            typing: false,
            decimal_used: false,
            strict: false,
        }
    }

    /// Reject unknown keys instead of ignoring them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Press a digit or the decimal point.
    ///
    /// A second `.` in the same entry is ignored.
    pub fn touch_digit(&mut self, digit: char) -> ReckonResult<()> {
        if !(digit.is_ascii_digit() || digit == '.') {
            return Err(ReckonError::InvalidOperand {
                input: digit.to_string(),
                reason: "not a digit or decimal point".into(),
            });
        }

        if digit == '.' {
            if self.decimal_used {
                return Ok(());
            }
            self.decimal_used = true;
        }

        if self.typing {
            self.display.push(digit);
        } else {
            self.display = if digit == '.' {
                "0.".to_owned()
            } else {
                digit.to_string()
            };
            self.typing = true;
        }

        Ok(())
    }

    /// Commit any typed number, then press the operation key `symbol`.
    pub fn perform_operation(&mut self, symbol: &str) -> ReckonResult<()> {
        if self.typing {
            let operand = parse_operand(&self.display)?;
            self.engine.set_operand(operand);
            self.typing = false;
            self.decimal_used = false;
        }

        self.engine.perform_operation(symbol);
        self.display = format_operand(self.engine.result());
        Ok(())
    }

    /// The reset control.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.display = RESET_LABEL.to_owned();
        self.typing = false;
        self.decimal_used = false;
    }

    /// Dispatch one lexed key.
    pub fn press(&mut self, key: &Key) -> ReckonResult<()> {
        match key {
            Key::Digits(digits) => {
                for digit in digits.chars() {
                    self.touch_digit(digit)?;
                }
                Ok(())
            }
            Key::Symbol(symbol) => self.perform_operation(symbol),
            Key::Clear => {
                self.clear();
                Ok(())
            }
            Key::Unknown(text) if self.strict => Err(ReckonError::UnknownSymbol {
                symbol: text.clone(),
            }),
            Key::Unknown(text) => {
                // Straight to the engine, which ignores it; typed digits stay
                // uncommitted.
                self.engine.perform_operation(text);
                Ok(())
            }
        }
    }

    /// Lex `line` and press every key in order, stopping at the first error.
    #[instrument(skip(self), level = "debug")]
    pub fn feed(&mut self, line: &str) -> ReckonResult<()> {
        let keys = lex(line);
        debug!(count = keys.len(), "keys lexed");
        for key in &keys {
            self.press(key)?;
        }
        Ok(())
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The expression label, reading `0` when there is no expression.
    pub fn history_label(&self) -> String {
        let description = self.engine.description();
        if description.is_empty() {
            RESET_LABEL.to_owned()
        } else {
            description
        }
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn screen(&self) -> Screen {
        Screen {
            display: self.display.clone(),
            history: self.history_label(),
            result: self.engine.result(),
            pending: self.engine.is_pending(),
        }
    }
}
