mod cli_args;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log;
use std::process;

use cli_args::Cli;
use dirprompt_core::{self as core, AppError, Config, PromptStats};

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.quiet, cli_args.verbose);
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(&cli_args) {
        Ok(_) => {
            log::info!("Finished successfully.");
            0
        }
        Err(e) => {
            let exit_code = exit_code_for(&e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => 1,
        Some(AppError::TomlParse(_)) => 1,
        Some(AppError::Io(_)) => 2,
        Some(AppError::FileRead { .. }) => 2,
        Some(AppError::FileWrite { .. }) => 2,
        Some(AppError::Walk(_)) => 2,
        Some(AppError::Ignore(_)) => 2,
        Some(AppError::Glob(_)) => 2,
        Some(AppError::InvalidArgument(_)) => 5,
        Some(AppError::TikToken(_)) => 8,
        Some(_) => 1,
        None => 1,
    }
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: &Cli) -> Result<()> {
    validate_args(cli)?;
    let config = load_config(cli)?;

    if cli.list {
        log::debug!("Listing selected files...");
        let files = core::select_files(&config).context("Failed to select files")?;
        return output::emit(
            &output::format_file_list(&files),
            cli.output.as_deref(),
            cli.quiet,
        );
    }

    let prompt = core::build_prompt(&config).context("Failed to build prompt")?;
    let stats = if cli.stats {
        Some(PromptStats::collect(&prompt).context("Failed to calculate prompt statistics")?)
    } else {
        None
    };

    output::emit(&prompt.to_output(), cli.output.as_deref(), cli.quiet)?;

    if let Some(stats) = stats {
        output::print_stats_table(&stats);
    }
    Ok(())
}

fn validate_args(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.output {
        if path.is_dir() {
            anyhow::bail!(AppError::InvalidArgument(format!(
                "Output path '{}' is a directory",
                path.display()
            )));
        }
    }
    if cli.list && cli.stats {
        anyhow::bail!(AppError::InvalidArgument(
            "--stats cannot be combined with --list".to_string()
        ));
    }
    Ok(())
}

/// Builds the run configuration: config file first, then CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let root = Config::determine_root(cli.path.as_ref())
        .context("Failed to determine root directory")?;
    log::info!("Root directory: {}", root.display());

    let config_path = Config::resolve_config_path(&root, cli.config.as_ref(), cli.no_config)
        .context("Failed to resolve configuration path")?;
    let mut config = match &config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.root = root;

    let include = cli.include_patterns();
    if !include.is_empty() {
        config.scan.include = include;
    }
    let exclude = cli.exclude_patterns();
    if !exclude.is_empty() {
        config.scan.exclude = exclude;
    }
    if let Some(max_lines) = cli.max_length {
        config.output.max_lines = max_lines;
    }
    if cli.gitignore {
        config.scan.use_gitignore = true;
    }

    log::trace!("Effective config: {:?}", config);
    Ok(config)
}
