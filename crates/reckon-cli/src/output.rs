//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use reckon_core::application::Screen;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes results and status lines in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// The flag beats the config file; `Auto` resolves to `Human` on a TTY
    /// and `Plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or(config.output.format);
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Results ───────────────────────────────────────────────────────────

    /// Render the calculator screen. Results are printed even in quiet mode.
    pub fn screen(&self, screen: &Screen) -> io::Result<()> {
        match self.resolved_format {
            OutputFormat::Json => self.json(screen),
            _ => {
                for line in self.render_screen(screen) {
                    self.term.write_line(&line)?;
                }
                Ok(())
            }
        }
    }

    /// The history line then the display line.
    pub fn render_screen(&self, screen: &Screen) -> [String; 2] {
        if !self.supports_color() {
            [screen.history.clone(), screen.display.clone()]
        } else {
            [
                screen.history.dimmed().to_string(),
                screen.display.bold().to_string(),
            ]
        }
    }

    /// Pretty-printed JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Status lines ──────────────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        Term::stderr().write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: Option<OutputFormat>, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
            strict: false,
        }
    }

    fn screen() -> Screen {
        Screen {
            display: "14.0".into(),
            history: "3.0+4.0×2.0=".into(),
            result: 14.0,
            pending: false,
        }
    }

    #[test]
    fn flag_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let out = OutputManager::new(&args(Some(OutputFormat::Plain), false, false), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_used_without_flag() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let out = OutputManager::new(&args(None, false, false), &config);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        let config = AppConfig::default();
        let colored = OutputManager::new(&args(Some(OutputFormat::Human), false, false), &config);
        let plain = OutputManager::new(&args(Some(OutputFormat::Human), false, true), &config);
        assert!(colored.supports_color());
        assert!(!plain.supports_color());
    }

    #[test]
    fn plain_format_never_colors() {
        let out = OutputManager::new(
            &args(Some(OutputFormat::Plain), false, false),
            &AppConfig::default(),
        );
        assert!(!out.supports_color());
        assert_eq!(
            out.render_screen(&screen()),
            ["3.0+4.0×2.0=".to_string(), "14.0".to_string()]
        );
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(Some(OutputFormat::Human), false, false), &config);
        assert!(!out.supports_color());
    }

    #[test]
    fn quiet_status_lines_are_ok() {
        let out = OutputManager::new(
            &args(Some(OutputFormat::Plain), true, true),
            &AppConfig::default(),
        );
        assert!(out.header("hello").is_ok());
        assert!(out.success("done").is_ok());
    }
}
