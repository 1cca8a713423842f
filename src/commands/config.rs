//! Config command - inspect or create the configuration file

use crate::{VermapError, cli::ConfigCommands, config::VermapConfig, ui::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, VermapError>;

/// Execute a config subcommand
///
/// `effective` is the configuration after command-line overrides.
///
/// # Errors
///
/// Returns `VermapError::Config` if the config location cannot be determined
/// or written, and `VermapError::InvalidInput` when `init` would overwrite an
/// existing file without `--force`.
pub fn execute(
    command: &ConfigCommands,
    effective: &VermapConfig,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => show(effective, output),
        ConfigCommands::Path => {
            output.write(&VermapConfig::config_path()?.display().to_string());
            Ok(())
        }
        ConfigCommands::Init { force } => init(&VermapConfig::config_path()?, *force, output),
    }
}

/// Print `config` as TOML
///
/// # Errors
///
/// Returns `VermapError::Config` if the configuration cannot be serialized.
pub fn show(config: &VermapConfig, output: &dyn OutputWriter) -> Result<()> {
    let text = toml::to_string_pretty(config).map_err(|e| {
        ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
    })?;
    for line in text.lines() {
        output.write(line);
    }
    Ok(())
}

/// Write a default configuration file at `path`
///
/// # Errors
///
/// Returns `VermapError::InvalidInput` if the file exists and `force` is not
/// set, or `VermapError::Config` if it cannot be written.
pub fn init(path: &Path, force: bool, output: &dyn OutputWriter) -> Result<()> {
    if path.exists() && !force {
        return Err(VermapError::InvalidInput(format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    VermapConfig::default().save_to(path)?;
    tracing::info!(path = %path.display(), "config written");
    output.success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
