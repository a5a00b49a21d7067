//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use reckon_core::domain::OperationKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "reckon",
    bin_name = "reckon",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Pocket calculator with expression history",
    long_about = "Reckon is a keypad calculator: type digits and operation keys, \
                  get the running result and the expression that produced it. \
                  Operations chain left to right with no precedence.",
    after_help = "EXAMPLES:\n\
        \x20 reckon eval 3 + 4 × 2 =\n\
        \x20 reckon eval '7+9=' sqrt\n\
        \x20 reckon --output-format json eval 1 / 0 =\n\
        \x20 reckon repl\n\
        \x20 reckon symbols --kind unary",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Press a sequence of keys and print the result.
    #[command(
        visible_alias = "e",
        about = "Evaluate a key sequence",
        after_help = "EXAMPLES:\n\
            \x20 reckon eval 3 + 4 × 2 =\n\
            \x20 reckon eval 25 sqrt\n\
            \x20 reckon eval --steps '2 ^ 10 ='"
    )]
    Eval(EvalArgs),

    /// Interactive session reading one line of keys at a time.
    #[command(
        about = "Start an interactive session",
        after_help = "Type keys and press enter; 'C' clears, 'quit' or Ctrl-D exits."
    )]
    Repl(ReplArgs),

    /// List every key the calculator understands.
    #[command(
        visible_alias = "ls",
        about = "List available keys",
        after_help = "EXAMPLES:\n\
            \x20 reckon symbols\n\
            \x20 reckon symbols --kind binary\n\
            \x20 reckon symbols --format json"
    )]
    Symbols(SymbolsArgs),

    /// Initialise a Reckon configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 reckon init           # default location\n\
            \x20 reckon init --local   # .reckon.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 reckon completions bash > ~/.local/share/bash-completion/completions/reckon\n\
            \x20 reckon completions zsh  > ~/.zfunc/_reckon\n\
            \x20 reckon completions fish > ~/.config/fish/completions/reckon.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Reckon configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 reckon config get keypad.strict\n\
            \x20 reckon config list\n\
            \x20 reckon config path"
    )]
    Config(ConfigCommands),
}

// ── eval ──────────────────────────────────────────────────────────────────────

/// Arguments for `reckon eval`.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Keys to press, e.g. `3 + 4 × 2 =`.  Arguments are joined with spaces
    /// and lexed as one line.
    #[arg(
        value_name = "KEYS",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true,
        help = "Keys to press (digits, symbols, ASCII aliases)"
    )]
    pub keys: Vec<String>,

    /// Print the screen after every key instead of only at the end.
    #[arg(long = "steps", help = "Show the screen after each key")]
    pub steps: bool,
}

// ── repl ──────────────────────────────────────────────────────────────────────

/// Arguments for `reckon repl`.
#[derive(Debug, Args)]
pub struct ReplArgs {
    /// Prompt shown before each line (overrides `repl.prompt`).
    #[arg(long = "prompt", value_name = "TEXT", help = "Prompt text")]
    pub prompt: Option<String>,
}

// ── symbols ───────────────────────────────────────────────────────────────────

/// Arguments for `reckon symbols`.
#[derive(Debug, Args)]
pub struct SymbolsArgs {
    /// Only show keys of one kind.
    #[arg(short = 'k', long = "kind", value_enum, help = "Filter by kind")]
    pub kind: Option<KindFilter>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `symbols` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One symbol per line.
    List,
    /// JSON array.
    Json,
}

/// Operation kinds accepted by `--kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindFilter {
    Constant,
    Unary,
    Binary,
    Equals,
}

impl From<KindFilter> for OperationKind {
    fn from(kind: KindFilter) -> Self {
        match kind {
            KindFilter::Constant => Self::Constant,
            KindFilter::Unary => Self::Unary,
            KindFilter::Binary => Self::Binary,
            KindFilter::Equals => Self::Equals,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `reckon init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.reckon.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `reckon completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `reckon config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `keypad.strict`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
