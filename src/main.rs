//! vermap CLI application entry point
//!
//! Browse and search a catalog of package version mappings.
//!
//! # Features
//!
//! - **Browse Mode**: Interactive package grid with live search (default)
//! - **List**: Print the status line and preview cards for a query
//! - **Show**: Print every version record of one package
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! vermap --catalog versions.json
//! vermap browse zlib
//!
//! # Print matching packages
//! vermap list re
//! vermap -m sensitive list React
//!
//! # Print every version of one package
//! vermap show left-pad
//!
//! # Write a config file with defaults, then set catalog_path in it
//! vermap config init
//! ```
//!
//! # Configuration
//!
//! Configuration is read from the user's config directory
//! (`~/.config/vermap/config.toml` on Linux) and `VERMAP_*` environment
//! variables. Command-line flags take precedence.

use std::process::ExitCode;
use vermap::{
    VermapError,
    cli::{Cli, Commands},
    commands,
    config::VermapConfig,
    logging::{LogTarget, init_logging},
    ui::{OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, VermapError>;

/// Configuration after command-line overrides
fn effective_config(config: VermapConfig, cli: &Cli) -> VermapConfig {
    VermapConfig {
        catalog_path: config.resolve_catalog(cli.catalog.clone()),
        match_policy: config.resolve_policy(cli.match_policy),
        quiet: cli.quiet || config.quiet,
        ..config
    }
}

fn run(cli: &Cli, config: &VermapConfig, output: &dyn OutputWriter) -> Result<()> {
    match cli.get_command() {
        Commands::Browse { query } => {
            let path = config.catalog_path.clone().ok_or(VermapError::NoCatalog)?;
            commands::browse(path, query.as_deref(), config.match_policy)
        }
        Commands::List { query } => {
            let catalog = commands::open_catalog(config)?;
            commands::list(&catalog, query.as_deref(), config.match_policy, output, true)
        }
        Commands::Show { name } => {
            let catalog = commands::open_catalog(config)?;
            commands::show(&catalog, &name, output, true)
        }
        Commands::Config { command } => commands::config(&command, config, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let startup = StdoutWriter::new(cli.quiet);

    let config = match VermapConfig::load() {
        Ok(config) => effective_config(config, &cli),
        Err(e) => {
            startup.error(&VermapError::from(e).to_string());
            return ExitCode::FAILURE;
        }
    };
    let output = StdoutWriter::new(config.quiet);

    // The browser owns the terminal, so its logs go to a file
    let target = match cli.get_command() {
        Commands::Browse { .. } => LogTarget::File(VermapConfig::log_dir()),
        _ => LogTarget::Stderr,
    };
    let _guard = match init_logging(&config.log_level, cli.verbose, target) {
        Ok(guard) => guard,
        Err(e) => {
            output.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
