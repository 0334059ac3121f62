use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// API key as a literal value; takes precedence over api_key_command
    #[serde(default)]
    pub api_key: Option<String>,
    /// Command to execute to retrieve the API key
    #[serde(default)]
    pub api_key_command: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_endpoint_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        .to_string()
}

fn default_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated post reports; relative paths resolve against the working directory
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_output_directory(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("generated_posts")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: LogLevel::default(),
            log_format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Quiet,
    Normal,
    Verbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Create a default config, optionally with an API key command
    pub fn default_with_api_key_command(api_key_command: Option<String>) -> Self {
        Config {
            gemini: GeminiConfig {
                endpoint_url: default_endpoint_url(),
                api_key: None,
                api_key_command,
                timeout_seconds: default_timeout(),
            },
            output: OutputConfig::default(),
            settings: Settings::default(),
        }
    }

    /// Validate the configuration; returns warnings on success, errors on failure
    pub fn validate(&self) -> std::result::Result<Vec<String>, Vec<String>> {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        if self.gemini.endpoint_url.trim().is_empty() {
            errors.push("Gemini endpoint URL is required".to_string());
        } else if Url::parse(&self.gemini.endpoint_url).is_err() {
            errors.push(format!(
                "Gemini endpoint URL is not a valid URL: {}",
                self.gemini.endpoint_url
            ));
        }

        let has_key = self
            .gemini
            .api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty());
        let has_key_command = self
            .gemini
            .api_key_command
            .as_ref()
            .is_some_and(|c| !c.trim().is_empty());

        if !has_key && !has_key_command {
            errors.push("Either gemini.api_key or gemini.api_key_command is required".to_string());
        }
        if has_key && has_key_command {
            warnings.push("Both api_key and api_key_command are set; api_key takes precedence".to_string());
        }

        if self.gemini.timeout_seconds == 0 {
            warnings.push("gemini.timeout_seconds is 0; requests will never time out".to_string());
        }

        if self.output.directory.as_os_str().is_empty() {
            errors.push("Output directory must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(errors)
        }
    }
}
