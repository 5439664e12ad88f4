//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// rggen-vhdl-rtl - Source-file manifest for the rggen VHDL RTL library
#[derive(Parser)]
#[command(name = "rggen-vhdl-rtl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the resolved source files in registration order
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Define a macro (repeatable)
    #[arg(
        short = 'D',
        long = "define",
        value_name = "SYMBOL",
        env = "RGGEN_MACROS",
        value_delimiter = ','
    )]
    pub defines: Vec<String>,

    /// Path to a config file (defaults to ./rggen-vhdl-rtl.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to prefix emitted file paths with
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "paths")]
    pub format: Format,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Logical unit names, one per line
    Names,
    /// File paths, one per line
    Paths,
    /// JSON array of logical unit names
    Json,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
