use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "pictowhack")]
#[command(about = "Remove pictograms (emoji, symbols, dingbats) from files")]
#[command(version)]
#[command(after_help = "Examples:
  pictowhack '*.txt'
  pictowhack 'docs/*.md' 'src/**/*.js'
  pictowhack --dry-run '*.txt'")]
pub struct Cli {
    /// File path patterns (supports wildcards, including recursive **)
    #[arg(
        value_name = "PATHS",
        num_args = 1..,
        required_unless_present_any = ["completions", "init_config"]
    )]
    pub paths: Vec<String>,

    /// Show what would be changed without modifying files
    #[arg(short, long)]
    pub dry_run: bool,

    /// Show detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file (default: ./.pictowhack.toml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Match hidden files and directories without a literal leading dot
    #[arg(long)]
    pub include_hidden: bool,

    /// Skip directories with this name (repeatable, e.g., --exclude=node_modules)
    #[arg(long, value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Write a commented config template to ./.pictowhack.toml and exit
    #[arg(long, exclusive = true)]
    pub init_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
