//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docket CLI - Turn meeting notes into tracked tasks.
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCKET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract action items from a notes file, optionally creating tasks
    Extract(ExtractArgs),

    /// List boards with their groups and columns
    Boards,

    /// List users of the task service
    Users,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// File containing the meeting notes ("-" reads stdin)
    pub file: PathBuf,

    /// Meeting title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Create tasks for the extracted items
    #[arg(long)]
    pub create: bool,

    /// Target board (defaults to MONDAY_BOARD_ID)
    #[arg(short, long)]
    pub board: Option<String>,

    /// Target group (defaults to the board's first group)
    #[arg(short, long)]
    pub group: Option<String>,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}
