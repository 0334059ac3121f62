use std::process::ExitCode;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    GeneralError = 1,
    GenerationFailed = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

#[derive(Error, Debug)]
pub enum RagegenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found at {0}")]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Gemini error: {0}")]
    Gemini(String),

    #[error("Gemini timeout after {0} seconds")]
    GeminiTimeout(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid post: {0}")]
    PostValidation(String),

    #[error("API key command failed: {0}")]
    ApiKeyCommand(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl RagegenError {
    /// Convert error to appropriate exit status
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RagegenError::Config(_)
            | RagegenError::ConfigNotFound(_)
            | RagegenError::ConfigInvalid(_)
            | RagegenError::Io(_)
            | RagegenError::TomlParse(_)
            | RagegenError::TomlSerialize(_)
            | RagegenError::Json(_)
            | RagegenError::InvalidInput(_)
            | RagegenError::ApiKeyCommand(_)
            | RagegenError::UserCancelled => ExitStatus::GeneralError,

            RagegenError::Gemini(_)
            | RagegenError::GeminiTimeout(_)
            | RagegenError::PostValidation(_) => ExitStatus::GenerationFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, RagegenError>;
