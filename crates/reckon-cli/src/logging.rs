//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `reckon-core` just emits events.
//! What each level shows:
//!
//! | Flag(s)   | Level | Events                                         |
//! |-----------|-------|------------------------------------------------|
//! | `--quiet` | ERROR | failures only                                  |
//! | (none)    | WARN  | user errors                                    |
//! | `-v`      | INFO  | command completion, repl session summary       |
//! | `-vv`     | DEBUG | lexed key counts, ignored unknown symbols      |
//! | `-vvv`    | TRACE | every operand and operation the engine applies |
//!
//! From DEBUG up the event target is printed, so keypad and engine events can
//! be told apart. `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events the default filter lets through.
const LOG_TARGETS: &[&str] = &["reckon", "reckon_core"];

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// clean for results.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter and quiet flag to a level.
fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `EnvFilter` directives giving every Reckon crate `level`; other crates
/// stay silent.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
