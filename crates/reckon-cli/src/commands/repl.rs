//! `reckon repl` — one long-lived keypad fed a line at a time.

use std::io::{self, BufRead, IsTerminal};

use console::Term;
use tracing::{debug, info, instrument};

use reckon_core::application::Keypad;

use crate::{
    cli::{GlobalArgs, OutputFormat, ReplArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Lines that end the session.
const EXIT_COMMANDS: &[&str] = &["quit", "exit"];

#[instrument(skip_all)]
pub fn execute(
    args: ReplArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompt = args.prompt.unwrap_or(config.repl.prompt);
    let keypad = Keypad::new().strict(global.strict || config.keypad.strict);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && output.format() != OutputFormat::Json;
    let lines = run_session(keypad, stdin.lock(), &output, || {
        if interactive {
            Term::stderr().write_str(&prompt)?;
        }
        Ok(())
    })?;

    info!(lines, "session ended");
    Ok(())
}

/// Feed every line of `input` into `keypad`, printing the screen after each.
///
/// A rejected key is reported and the session carries on. Returns the
/// number of lines evaluated.
fn run_session<R, P>(
    mut keypad: Keypad,
    input: R,
    output: &OutputManager,
    mut prompt: P,
) -> CliResult<usize>
where
    R: BufRead,
    P: FnMut() -> io::Result<()>,
{
    let mut evaluated = 0;
    prompt()?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if EXIT_COMMANDS.contains(&trimmed) {
            break;
        }

        if !trimmed.is_empty() {
            debug!(line = trimmed, "repl input");
            match keypad.feed(trimmed) {
                Ok(()) => output.screen(&keypad.screen())?,
                Err(err) => output.error(&err.to_string())?,
            }
            evaluated += 1;
        }

        prompt()?;
    }

    Ok(evaluated)
}
