//! The operation table: every key the calculator understands.
//!
//! # Design
//!
//! [`Operation`] is a plain value: constants carry their number, unary and
//! binary operations carry a function pointer. The table is built once into
//! a process-wide static and never changes afterwards.
//!
//! # Adding New Keys
//!
//! 1. Add an [`OperationEntry`] to `STANDARD_ENTRIES` in keypad order
//! 2. List any ASCII spellings in its `aliases`
//! 3. Done — the engine, lexer and `symbols` listing pick it up

use std::collections::HashMap;
use std::f64::consts::{E, PI};
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// What a key does when pressed.
#[derive(Clone, Copy)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value.
    Constant(f64),
    /// Applies a function to the accumulator.
    Unary(fn(f64) -> f64),
    /// Stores the accumulator as a first operand, awaiting a second.
    Binary(fn(f64, f64) -> f64),
    /// Resolves the pending binary operation.
    Equals,
}

impl Operation {
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Constant(_) => OperationKind::Constant,
            Self::Unary(_) => OperationKind::Unary,
            Self::Binary(_) => OperationKind::Binary,
            Self::Equals => OperationKind::Equals,
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Unary(_) => f.write_str("Unary(..)"),
            Self::Binary(_) => f.write_str("Binary(..)"),
            Self::Equals => f.write_str("Equals"),
        }
    }
}

/// Fieldless mirror of [`Operation`] for listings and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Constant,
    Unary,
    Binary,
    Equals,
}

impl OperationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Unary => "unary",
            Self::Binary => "binary",
            Self::Equals => "equals",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the operation table.
#[derive(Debug, Clone, Copy)]
pub struct OperationEntry {
    /// Canonical symbol, exactly as printed on the key.
    pub symbol: &'static str,
    pub operation: Operation,
    /// Keyboard-friendly spellings that resolve to `symbol`.
    pub aliases: &'static [&'static str],
}

const STANDARD_ENTRIES: &[OperationEntry] = &[
    OperationEntry {
        symbol: "π",
        operation: Operation::Constant(PI),
        aliases: &["pi"],
    },
    OperationEntry {
        symbol: "e",
        operation: Operation::Constant(E),
        aliases: &[],
    },
    OperationEntry {
        symbol: "±",
        operation: Operation::Unary(|x| -x),
        aliases: &["+/-"],
    },
    OperationEntry {
        symbol: "√",
        operation: Operation::Unary(f64::sqrt),
        aliases: &["sqrt"],
    },
    OperationEntry {
        symbol: "%",
        operation: Operation::Unary(|x| x / 100.0),
        aliases: &[],
    },
    OperationEntry {
        symbol: "ln",
        operation: Operation::Unary(f64::ln),
        aliases: &[],
    },
    OperationEntry {
        symbol: "log",
        operation: Operation::Unary(f64::log10),
        aliases: &[],
    },
    OperationEntry {
        symbol: "sin",
        operation: Operation::Unary(f64::sin),
        aliases: &[],
    },
    OperationEntry {
        symbol: "cos",
        operation: Operation::Unary(f64::cos),
        aliases: &[],
    },
    OperationEntry {
        symbol: "tan",
        operation: Operation::Unary(f64::tan),
        aliases: &[],
    },
    OperationEntry {
        symbol: "sin⁻¹",
        operation: Operation::Unary(f64::asin),
        aliases: &["sin^-1", "asin"],
    },
    OperationEntry {
        symbol: "cos⁻¹",
        operation: Operation::Unary(f64::acos),
        aliases: &["cos^-1", "acos"],
    },
    OperationEntry {
        symbol: "tan⁻¹",
        operation: Operation::Unary(f64::atan),
        aliases: &["tan^-1", "atan"],
    },
    OperationEntry {
        symbol: "x⁻¹",
        operation: Operation::Unary(|x| x.powi(-1)),
        aliases: &["x^-1"],
    },
    OperationEntry {
        symbol: "x²",
        operation: Operation::Unary(|x| x.powi(2)),
        aliases: &["x^2"],
    },
    OperationEntry {
        symbol: "x³",
        operation: Operation::Unary(|x| x.powi(3)),
        aliases: &["x^3"],
    },
    OperationEntry {
        symbol: "eˣ",
        operation: Operation::Unary(|x| E.powf(x)),
        aliases: &["e^x"],
    },
    OperationEntry {
        symbol: "10ˣ",
        operation: Operation::Unary(|x| 10f64.powf(x)),
        aliases: &["10^x"],
    },
    OperationEntry {
        symbol: "÷",
        operation: Operation::Binary(|a, b| a / b),
        aliases: &["/"],
    },
    OperationEntry {
        symbol: "×",
        operation: Operation::Binary(|a, b| a * b),
        aliases: &["*", "x"],
    },
    OperationEntry {
        symbol: "−",
        operation: Operation::Binary(|a, b| a - b),
        aliases: &["-"],
    },
    OperationEntry {
        symbol: "+",
        operation: Operation::Binary(|a, b| a + b),
        aliases: &[],
    },
    OperationEntry {
        symbol: "∧",
        operation: Operation::Binary(f64::powf),
        aliases: &["^", "**"],
    },
    OperationEntry {
        symbol: "=",
        operation: Operation::Equals,
        aliases: &[],
    },
];

static STANDARD: LazyLock<OperationTable> =
    LazyLock::new(|| OperationTable::from_entries(STANDARD_ENTRIES));

/// Symbol → operation lookup, plus alias resolution.
#[derive(Debug)]
pub struct OperationTable {
    entries: &'static [OperationEntry],
    by_symbol: HashMap<&'static str, Operation>,
    by_alias: HashMap<&'static str, &'static str>,
}

impl OperationTable {
    /// The calculator's fixed key set.
    pub fn standard() -> &'static OperationTable {
        &STANDARD
    }

    fn from_entries(entries: &'static [OperationEntry]) -> Self {
        let by_symbol = entries.iter().map(|e| (e.symbol, e.operation)).collect();
        let by_alias = entries
            .iter()
            .flat_map(|e| e.aliases.iter().map(move |alias| (*alias, e.symbol)))
            .collect();

        Self {
            entries,
            by_symbol,
            by_alias,
        }
    }

    /// Look up a canonical symbol. Aliases are not consulted.
    pub fn get(&self, symbol: &str) -> Option<Operation> {
        self.by_symbol.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Map a symbol or one of its aliases to the canonical symbol.
    pub fn resolve(&self, spelling: &str) -> Option<&'static str> {
        if let Some((symbol, _)) = self.by_symbol.get_key_value(spelling) {
            return Some(*symbol);
        }
        self.by_alias.get(spelling).copied()
    }

    /// Every canonical symbol and alias, for prefix matching.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .flat_map(|e| std::iter::once(e.symbol).chain(e.aliases.iter().copied()))
    }

    /// Rows in keypad order.
    pub fn entries(&self) -> &'static [OperationEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYPAD_SYMBOLS: [&str; 24] = [
        "π", "e", "±", "√", "%", "ln", "log", "sin", "cos", "tan", "sin⁻¹", "cos⁻¹", "tan⁻¹",
        "x⁻¹", "x²", "x³", "eˣ", "10ˣ", "÷", "×", "−", "+", "∧", "=",
    ];

    fn unary(symbol: &str) -> fn(f64) -> f64 {
        match OperationTable::standard().get(symbol) {
            Some(Operation::Unary(f)) => f,
            other => panic!("expected unary for {symbol}, got {other:?}"),
        }
    }

    fn binary(symbol: &str) -> fn(f64, f64) -> f64 {
        match OperationTable::standard().get(symbol) {
            Some(Operation::Binary(f)) => f,
            other => panic!("expected binary for {symbol}, got {other:?}"),
        }
    }

    #[test]
    fn table_holds_exactly_the_keypad_symbols() {
        let table = OperationTable::standard();
        assert_eq!(table.len(), KEYPAD_SYMBOLS.len());
        for symbol in KEYPAD_SYMBOLS {
            assert!(table.contains(symbol), "missing {symbol}");
        }
    }

    #[test]
    fn constants() {
        let table = OperationTable::standard();
        assert!(matches!(table.get("π"), Some(Operation::Constant(v)) if v == PI));
        assert!(matches!(table.get("e"), Some(Operation::Constant(v)) if v == E));
        assert!(matches!(table.get("="), Some(Operation::Equals)));
    }

    #[test]
    fn unary_functions() {
        assert_eq!(unary("±")(3.0), -3.0);
        assert_eq!(unary("√")(25.0), 5.0);
        assert_eq!(unary("%")(50.0), 0.5);
        assert_eq!(unary("log")(100.0), 2.0);
        assert_eq!(unary("ln")(1.0), 0.0);
        assert_eq!(unary("x⁻¹")(4.0), 0.25);
        assert_eq!(unary("x²")(3.0), 9.0);
        assert_eq!(unary("x³")(2.0), 8.0);
        assert_eq!(unary("10ˣ")(2.0), 100.0);
        assert_eq!(unary("eˣ")(0.0), 1.0);
        assert_eq!(unary("sin")(0.0), 0.0);
        assert_eq!(unary("cos")(0.0), 1.0);
        assert_eq!(unary("tan⁻¹")(0.0), 0.0);
    }

    #[test]
    fn unary_functions_are_unguarded() {
        assert!(unary("√")(-1.0).is_nan());
        assert_eq!(unary("ln")(0.0), f64::NEG_INFINITY);
        assert!(unary("sin⁻¹")(2.0).is_nan());
        assert_eq!(unary("x⁻¹")(0.0), f64::INFINITY);
    }

    #[test]
    fn binary_functions() {
        assert_eq!(binary("+")(3.0, 4.0), 7.0);
        assert_eq!(binary("−")(3.0, 4.0), -1.0);
        assert_eq!(binary("×")(3.0, 4.0), 12.0);
        assert_eq!(binary("÷")(3.0, 4.0), 0.75);
        assert_eq!(binary("∧")(2.0, 10.0), 1024.0);
        assert_eq!(binary("÷")(1.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn aliases_resolve_to_canonical_symbols() {
        let table = OperationTable::standard();
        assert_eq!(table.resolve("sqrt"), Some("√"));
        assert_eq!(table.resolve("*"), Some("×"));
        assert_eq!(table.resolve("-"), Some("−"));
        assert_eq!(table.resolve("sin^-1"), Some("sin⁻¹"));
        assert_eq!(table.resolve("x^2"), Some("x²"));
        assert_eq!(table.resolve("√"), Some("√"));
        assert_eq!(table.resolve("nope"), None);
    }

    #[test]
    fn get_ignores_aliases() {
        assert!(OperationTable::standard().get("sqrt").is_none());
        assert!(OperationTable::standard().get("").is_none());
    }

    #[test]
    fn aliases_never_shadow_symbols() {
        let table = OperationTable::standard();
        for entry in table.entries() {
            for alias in entry.aliases {
                assert!(!table.contains(alias), "alias {alias} is also a symbol");
            }
        }
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(OperationKind::Binary.to_string(), "binary");
        assert_eq!(Operation::Equals.kind(), OperationKind::Equals);
    }
}
