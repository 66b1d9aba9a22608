//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "campus",
    bin_name = "campus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered CRUD over students, courses and trainers",
    long_about = "Campus runs every request through Controller -> Service -> \
                  Repository -> Store over an in-memory store. The service \
                  layer rejects duplicate ids; nothing outlives the process.",
    after_help = "EXAMPLES:\n\
        \x20 campus demo\n\
        \x20 campus -vv demo                # show each layer a call passes through\n\
        \x20 campus run ops.json --format json\n\
        \x20 cat ops.json | campus run -\n\
        \x20 campus completions bash > /usr/share/bash-completion/completions/campus",
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
    /// Run the built-in sample: two trainers, two courses, three students.
    #[command(
        about = "Run the sample scenario",
        after_help = "EXAMPLES:\n\
            \x20 campus demo\n\
            \x20 campus demo --format csv"
    )]
    Demo(DemoArgs),

    /// Execute a JSON script of operations against a fresh store.
    #[command(
        visible_alias = "r",
        about = "Execute an operation script",
        after_help = "SCRIPT FORMAT:\n\
            \x20 [\n\
            \x20   {\"op\": \"add\", \"record\": {\"trainer\": {\"trainer_id\": 1, \"name\": \"Mondol\", \"expertise\": \"Python\"}}},\n\
            \x20   {\"op\": \"remove\", \"record\": {\"student\": {\"student_id\": 9, \"name\": \"Ghost\", \"email\": \"g@x\"}}},\n\
            \x20   {\"op\": \"list\", \"entity\": \"trainer\"}\n\
            \x20 ]\n\n\
            EXAMPLES:\n\
            \x20 campus run ops.json\n\
            \x20 campus run ops.json --keep-going --format json"
    )]
    Run(RunArgs),

    /// Initialise a Campus configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 campus init\n\
            \x20 campus init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 campus completions bash > ~/.local/share/bash-completion/completions/campus\n\
            \x20 campus completions zsh  > ~/.zfunc/_campus\n\
            \x20 campus completions fish > ~/.config/fish/completions/campus.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Campus configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 campus config get rules.update_mode\n\
            \x20 campus config list\n\
            \x20 campus config path"
    )]
    Config(ConfigCommands),
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `campus demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Listing format (defaults to `output.format` from config).
    #[arg(long = "format", value_enum, help = "Listing format")]
    pub format: Option<ListFormat>,
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `campus run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Script file, or `-` for stdin.
    #[arg(value_name = "SCRIPT", help = "Script file ('-' reads stdin)")]
    pub script: PathBuf,

    /// Continue after a failed operation.  The exit code still reflects the
    /// first failure.
    #[arg(long = "keep-going", help = "Continue after a failed operation")]
    pub keep_going: bool,

    /// Listing format (defaults to `output.format` from config).
    #[arg(long = "format", value_enum, help = "Listing format")]
    pub format: Option<ListFormat>,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable lines under a header.
    Table,
    /// JSON array.
    Json,
    /// CSV rows with a header.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `campus init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `campus completions`.
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

/// Subcommands for `campus config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `rules.update_mode`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_demo_command() {
        let cli = Cli::parse_from(["campus", "demo"]);
        assert!(matches!(cli.command, Commands::Demo(DemoArgs { format: None })));
    }

    #[test]
    fn parse_run_with_stdin_and_flags() {
        let cli = Cli::parse_from(["campus", "run", "-", "--keep-going", "--format", "csv"]);
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.script, PathBuf::from("-"));
            assert!(args.keep_going);
            assert_eq!(args.format, Some(ListFormat::Csv));
        } else {
            panic!("expected Run command");
        }
    }

    #[test]
    fn run_alias() {
        let cli = Cli::parse_from(["campus", "r", "ops.json"]);
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn run_requires_a_script() {
        assert!(Cli::try_parse_from(["campus", "run"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["campus", "demo", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["campus", "--quiet", "--verbose", "demo"]);
        assert!(result.is_err());
    }
}
