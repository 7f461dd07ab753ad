use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::FocusError;
use crate::output::to_json;

/// Execute config command
///
/// Prints the effective configuration. With `init`, also writes it to the
/// config file so it can be edited.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn config(
    paths: &Paths,
    config: &Config,
    init: bool,
    format: OutputFormat,
) -> Result<String, FocusError> {
    if init {
        paths.ensure_dirs()?;
        config.save_to_path(&paths.config_file)?;
        log::info!("wrote config to {}", paths.config_file.display());
    }

    match format {
        OutputFormat::Json => to_json(&json!({
            "path": paths.config_file,
            "exists": paths.config_file.exists(),
            "config": config,
        })),
        OutputFormat::Pretty => {
            let state = if paths.config_file.exists() {
                "".normal()
            } else {
                " (not created, showing defaults)".dimmed()
            };
            Ok(format!(
                "{} {}{}\n{}",
                "#".dimmed(),
                paths.config_file.display(),
                state,
                config.to_yaml()?
            ))
        }
    }
}
