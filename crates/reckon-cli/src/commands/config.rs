//! `reckon config` — inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `reckon config get`.
const KEYS: &[&str] = &["output.no_color", "output.format", "keypad.strict", "repl.prompt"];

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            println!("{value}");
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            print!("{serialised}");
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => serde_json::to_value(config.output.format)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default(),
        "keypad.strict" => config.keypad.strict.to_string(),
        "repl.prompt" => config.repl.prompt.clone(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
                source: None,
            });
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn get_default_values() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "keypad.strict").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
        assert_eq!(get_config_value(&cfg, "repl.prompt").unwrap(), "> ");
    }

    #[test]
    fn get_reflects_loaded_values() {
        let mut cfg = AppConfig::default();
        cfg.output.format = OutputFormat::Json;
        cfg.keypad.strict = true;
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "json");
        assert_eq!(get_config_value(&cfg, "keypad.strict").unwrap(), "true");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
