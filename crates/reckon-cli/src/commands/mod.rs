//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod eval;
pub mod init;
pub mod repl;
pub mod symbols;
