//! CLI argument definitions for the registration form.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use course_cli::context::StateOptions;

#[derive(Parser)]
#[command(
    name = "course-reg",
    version,
    about = "Course registration - select courses and check credit hours",
    long_about = "Browse the course catalog, select courses and check the credit total\n\
                  against the minimum and maximum load before registering."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every course in the catalog.
    Catalog,

    /// List courses whose code, name or lecturer contains QUERY (case-sensitive).
    Search {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },

    /// Select courses and show the resulting credit status.
    Plan(PlanArgs),

    /// Interactive session reading commands from stdin.
    Session,
}

/// Catalog and bound sources shared by every command.
#[derive(Args)]
pub struct SourceArgs {
    /// Catalog file (.toml or .json). Defaults to the built-in sample catalog.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Minimum credit hours required to register.
    #[arg(long = "min-credits", value_name = "N", global = true)]
    pub min_credits: Option<u32>,

    /// Maximum credit hours allowed.
    #[arg(long = "max-credits", value_name = "N", global = true)]
    pub max_credits: Option<u32>,
}

impl SourceArgs {
    pub fn state_options(&self) -> StateOptions {
        StateOptions {
            catalog: self.catalog.clone(),
            config: self.config.clone(),
            min_credits: self.min_credits,
            max_credits: self.max_credits,
        }
    }
}

#[derive(Args)]
pub struct PlanArgs {
    /// Course id to select (repeatable).
    #[arg(long = "select", short = 's', value_name = "ID")]
    pub select: Vec<String>,

    /// Register the selection. Fails when the credit total is out of range.
    #[arg(long = "register", conflicts_with = "draft")]
    pub register: bool,

    /// Save the selection as a draft.
    #[arg(long = "draft")]
    pub draft: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
