use crate::cli::ConfigCommands;
use crate::config;
use crate::error::{RagegenError, Result};
use crate::ui;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run config subcommands
pub fn run_config(command: ConfigCommands, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        ConfigCommands::Show => show_config(config_path.as_deref()),
        ConfigCommands::Edit => edit_config(),
        ConfigCommands::Validate => validate_config(config_path.as_deref()),
        ConfigCommands::Path => print_path(),
    }
}

fn load(config_path: Option<&Path>) -> Result<config::Config> {
    match config_path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = load(config_path)?;
    let redacted = config::redact_config(&config);
    let content = toml::to_string_pretty(&redacted)?;
    println!("{}", content);
    Ok(())
}

fn edit_config() -> Result<()> {
    let path = config::config_path()?;

    if !path.exists() {
        return Err(RagegenError::ConfigNotFound(path.display().to_string()));
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| RagegenError::Config(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(RagegenError::Config(format!(
            "Editor exited with status {}",
            status
        )));
    }

    // Validate the config after editing
    match config::load_config() {
        Ok(config) => {
            if let Err(errors) = config.validate() {
                ui::print_warning("Config has validation errors:");
                for error in errors {
                    ui::print_error(&format!("  {}", error));
                }
            } else {
                ui::print_success("Config is valid");
            }
        }
        Err(e) => {
            ui::print_error(&format!("Config has syntax errors: {}", e));
        }
    }

    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let config = load(config_path)?;

    match config.validate() {
        Ok(warnings) => {
            for warning in warnings {
                ui::print_warning(&warning);
            }
            ui::print_success("Config is valid");
            Ok(())
        }
        Err(errors) => {
            for error in errors {
                ui::print_error(&error);
            }
            Err(RagegenError::ConfigInvalid(
                "Config validation failed".to_string(),
            ))
        }
    }
}

fn print_path() -> Result<()> {
    let path = config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
