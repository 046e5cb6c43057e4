use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// tsgen - scaffold a ready-to-build TypeScript project
#[derive(Parser, Debug)]
#[command(name = "tsgen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'tsgen' without a project name to be prompted for one.")]
pub struct Cli {
    /// Name of the project directory to create under the current directory
    pub project_name: Option<String>,

    /// Accept the default project name instead of prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Read bundled project files from this directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/tsgen/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
