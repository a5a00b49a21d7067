//! `reckon eval` — press a key sequence on a fresh keypad.

use tracing::{debug, instrument};

use reckon_core::application::{Keypad, lex};

use crate::{
    cli::{EvalArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(steps = args.steps))]
pub fn execute(
    args: EvalArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let line = args.keys.join(" ");
    let keys = lex(&line);
    if keys.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no keys to press".into(),
            source: None,
        });
    }

    let mut keypad = Keypad::new().strict(global.strict || config.keypad.strict);
    debug!(%line, keys = keys.len(), strict = keypad.is_strict(), "evaluating");

    for key in &keys {
        keypad.press(key)?;
        if args.steps {
            output.screen(&keypad.screen())?;
        }
    }
    if !args.steps {
        output.screen(&keypad.screen())?;
    }

    Ok(())
}
