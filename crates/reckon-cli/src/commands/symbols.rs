//! `reckon symbols` — list the keys the calculator understands.

use serde::Serialize;

use reckon_core::application::CLEAR_SPELLINGS;
use reckon_core::domain::{OperationEntry, OperationKind, OperationTable};

use crate::{
    cli::{ListFormat, SymbolsArgs},
    error::CliResult,
    output::OutputManager,
};

/// One listed key.
#[derive(Debug, Serialize)]
struct SymbolRow {
    symbol: &'static str,
    kind: OperationKind,
    aliases: &'static [&'static str],
}

impl From<&OperationEntry> for SymbolRow {
    fn from(entry: &OperationEntry) -> Self {
        Self {
            symbol: entry.symbol,
            kind: entry.operation.kind(),
            aliases: entry.aliases,
        }
    }
}

pub fn execute(args: SymbolsArgs, output: OutputManager) -> CliResult<()> {
    let kind = args.kind.map(OperationKind::from);
    let rows = rows(OperationTable::standard(), kind);

    match args.format {
        ListFormat::Table => {
            output.header("Available keys:")?;
            // Listings are the command's result, so they ignore --quiet.
            for row in &rows {
                println!("{}", table_line(row));
            }
            if kind.is_none() {
                let spellings = CLEAR_SPELLINGS.join(", ");
                println!("  {:<6} {:<9} {}", "C", "clear", spellings);
            }
        }
        ListFormat::List => {
            for row in &rows {
                println!("{}", row.symbol);
            }
        }
        ListFormat::Json => output.json(&rows)?,
    }

    Ok(())
}

fn rows(table: &OperationTable, kind: Option<OperationKind>) -> Vec<SymbolRow> {
    table
        .entries()
        .iter()
        .filter(|entry| kind.is_none_or(|k| entry.operation.kind() == k))
        .map(SymbolRow::from)
        .collect()
}

fn table_line(row: &SymbolRow) -> String {
    format!("  {:<6} {:<9} {}", row.symbol, row.kind, row.aliases.join(", "))
        .trim_end()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_lists_every_entry() {
        let table = OperationTable::standard();
        assert_eq!(rows(table, None).len(), table.len());
    }

    #[test]
    fn filter_by_kind() {
        let binary = rows(OperationTable::standard(), Some(OperationKind::Binary));
        let symbols: Vec<_> = binary.iter().map(|r| r.symbol).collect();
        assert_eq!(symbols, ["÷", "×", "−", "+", "∧"]);

        let equals = rows(OperationTable::standard(), Some(OperationKind::Equals));
        assert_eq!(equals.len(), 1);
        assert_eq!(equals[0].symbol, "=");
    }

    #[test]
    fn table_line_shows_aliases() {
        let sqrt = rows(OperationTable::standard(), Some(OperationKind::Unary))
            .into_iter()
            .find(|r| r.symbol == "√")
            .unwrap();
        let line = table_line(&sqrt);
        assert!(line.contains("unary"));
        assert!(line.contains("sqrt"));
    }

    #[test]
    fn rows_serialize_with_lowercase_kind() {
        let json = serde_json::to_value(rows(OperationTable::standard(), None)).unwrap();
        assert_eq!(json[0]["symbol"], "π");
        assert_eq!(json[0]["kind"], "constant");
        assert_eq!(json[0]["aliases"][0], "pi");
    }
}
