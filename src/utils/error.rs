use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Signup rejected with status {status} ({} field errors)", .errors.len())]
    Rejected { status: u16, errors: Vec<FieldError> },
}

impl SignupError {
    /// Message safe to print to an end user. Transport and rejection details stay in the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SignupError::Http(_) | SignupError::Rejected { .. } => {
                "Server error. Try later.".to_string()
            }
            SignupError::IoError(e) => format!("Could not read input: {}", e),
            SignupError::TomlError(e) => format!("Form file is not valid TOML: {}", e.message()),
            SignupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;
