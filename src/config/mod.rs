mod types;

pub use types::*;

use crate::error::{RagegenError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the XDG-compliant config directory
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "ragegen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RagegenError::Config("Could not determine config directory".to_string()))
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Check if config file exists
pub fn config_exists() -> Result<bool> {
    Ok(config_path()?.exists())
}

/// Load config from the default location
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    load_config_from(&path)
}

/// Load config from a specific path
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(RagegenError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save config to file
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Resolve the API key from the literal value or by executing the configured command
pub fn resolve_api_key(config: &GeminiConfig) -> Result<String> {
    if let Some(ref key) = config.api_key {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }

    let command = config
        .api_key_command
        .as_ref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| {
            RagegenError::ConfigInvalid(
                "Either gemini.api_key or gemini.api_key_command must be set".to_string(),
            )
        })?;

    let output = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", command]).output()
    } else {
        Command::new("sh").args(["-c", command]).output()
    };

    match output {
        Ok(output) => {
            if output.status.success() {
                let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if key.is_empty() {
                    Err(RagegenError::ApiKeyCommand(
                        "API key command returned empty output".to_string(),
                    ))
                } else {
                    Ok(key)
                }
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(RagegenError::ApiKeyCommand(format!(
                    "API key command failed: {}",
                    stderr.trim()
                )))
            }
        }
        Err(e) => Err(RagegenError::ApiKeyCommand(format!(
            "Failed to execute API key command: {}",
            e
        ))),
    }
}

/// Redact sensitive information from config for display
pub fn redact_config(config: &Config) -> Config {
    let mut redacted = config.clone();
    if redacted.gemini.api_key.is_some() {
        redacted.gemini.api_key = Some("[REDACTED]".to_string());
    }
    if redacted.gemini.api_key_command.is_some() {
        redacted.gemini.api_key_command = Some("[REDACTED]".to_string());
    }
    redacted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_key_material() {
        let config = Config::default_with_api_key_command(None);
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("api_key")));
    }

    #[test]
    fn test_validate_accepts_key_command() {
        let config = Config::default_with_api_key_command(Some("pass show gemini".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default_with_api_key_command(Some("echo key".to_string()));
        config.gemini.endpoint_url = "not a url".to_string();
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("valid URL")));
    }

    #[test]
    fn test_validate_warns_on_both_key_sources() {
        let mut config = Config::default_with_api_key_command(Some("echo key".to_string()));
        config.gemini.api_key = Some("literal".to_string());
        let warnings = config.validate().unwrap();
        assert!(warnings.iter().any(|w| w.contains("takes precedence")));
    }

    #[test]
    fn test_resolve_api_key_prefers_literal() {
        let config = GeminiConfig {
            endpoint_url: "https://example.com".to_string(),
            api_key: Some("  literal-key  ".to_string()),
            api_key_command: Some("echo from-command".to_string()),
            timeout_seconds: 60,
        };
        assert_eq!(resolve_api_key(&config).unwrap(), "literal-key");
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_api_key_from_command() {
        let config = GeminiConfig {
            endpoint_url: "https://example.com".to_string(),
            api_key: None,
            api_key_command: Some("echo from-command".to_string()),
            timeout_seconds: 60,
        };
        assert_eq!(resolve_api_key(&config).unwrap(), "from-command");
    }

    #[test]
    fn test_redact_config() {
        let mut config = Config::default_with_api_key_command(Some("pass show gemini".to_string()));
        config.gemini.api_key = Some("secret".to_string());
        let redacted = redact_config(&config);
        assert_eq!(redacted.gemini.api_key.as_deref(), Some("[REDACTED]"));
        assert_eq!(redacted.gemini.api_key_command.as_deref(), Some("[REDACTED]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default_with_api_key_command(Some("echo key".to_string()));
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.gemini.endpoint_url, config.gemini.endpoint_url);
        assert_eq!(parsed.output.directory, config.output.directory);
    }
}
