use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use pictowhack_core::{
    Config, PictowhackError, Result, RunEvent, RunOptions, RunSummary, Runner, LOCAL_CONFIG_FILE,
};

mod args;
use args::{Cli, Shell};

const CONFIG_ENV: &str = "PICTOWHACK_CONFIG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        handle_completions(shell);
        return ExitCode::SUCCESS;
    }

    let result = if cli.init_config {
        handle_init_config()
    } else {
        handle_run(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "pictowhack", &mut io::stdout());
}

fn handle_init_config() -> Result<()> {
    let path = std::env::current_dir()?.join(LOCAL_CONFIG_FILE);
    Config::init(&path)?;
    println!("{} {}", "Initialized:".green(), path.display());
    Ok(())
}

fn handle_run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.clone())?.with_overrides(cli.include_hidden, &cli.exclude);

    let options = RunOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    let runner = Runner::new(options, config.scan);
    let summary = runner.run(&cli.paths, &print_event);

    print_summary(&summary);
    Ok(())
}

/// Resolve and load the config file
/// Priority: --config > $PICTOWHACK_CONFIG > ./.pictowhack.toml > user config dir
fn load_config(cli_config: Option<PathBuf>) -> Result<Config> {
    let explicit = cli_config.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    if let Some(path) = &explicit {
        if !path.is_file() {
            return Err(PictowhackError::file_io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "config file not found"),
            ));
        }
    }

    let cwd = std::env::current_dir()?;
    let user_dir = dirs::config_dir();

    match Config::discover(explicit, &cwd, user_dir.as_deref()) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    }
}

fn print_event(event: &RunEvent<'_>) {
    match event {
        RunEvent::NoMatches { pattern } => {
            println!("{} {}", "No files found matching:".yellow(), pattern);
        }
        RunEvent::InvalidPattern { error, .. } => {
            eprintln!("{} {}", "[ERROR]".red().bold(), error);
        }
        RunEvent::Pictogram { classification, .. } => {
            println!(
                "  Name {}, Category {}: {}",
                classification.name,
                classification.category_code(),
                classification.ch
            );
        }
        RunEvent::Modified {
            index,
            path,
            removed,
            dry_run,
        } => {
            let label = if *dry_run {
                "Would modify:".yellow()
            } else {
                "Modified:".green()
            };
            println!(
                "{} {} ({} pictograms removed)",
                label,
                path.display(),
                removed
            );
            println!(
                "{}. {} pictograms found in: {}",
                index.to_string().bold(),
                removed,
                path.display().to_string().cyan()
            );
        }
        RunEvent::Unchanged { index, path } => {
            println!(
                "{}. {}",
                index.to_string().bold(),
                format!("No pictograms found in: {}", path.display()).dimmed()
            );
        }
        RunEvent::SkippedDirectory { path } => {
            println!(
                "{}",
                format!("Skipping directory: {}", path.display()).dimmed()
            );
        }
        RunEvent::Failed { error, .. } => {
            eprintln!("{} Error processing {}", "[ERROR]".red().bold(), error);
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "Summary:".cyan().bold());
    println!("Files processed: {}", summary.files_processed);
    if summary.dry_run {
        println!("Files that would be modified: {}", summary.files_modified);
    } else {
        println!("Files modified: {}", summary.files_modified);
    }
    println!("Pictograms removed: {}", summary.chars_removed);
    if summary.files_failed > 0 {
        println!(
            "{}",
            format!("Files failed: {}", summary.files_failed).red()
        );
    }
}
