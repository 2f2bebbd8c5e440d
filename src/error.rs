use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvenanceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value '{value}' for setting '{field}': {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No commits to analyze: load a repository or branch with at least one commit")]
    NoData,

    #[error("Analysis cancelled: the repository snapshot was replaced")]
    Cancelled,

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProvenanceError {
    /// Short, stable name of the error kind, used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidSetting { .. } => "InvalidSetting",
            Self::NoData => "NoData",
            Self::Cancelled => "Cancelled",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
        }
    }

    /// Underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Hint shown under the error in CLI output.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Run `diff-provenance config validate` to check the file".to_string())
            }
            Self::InvalidSetting { .. } => Some(format!(
                "Valid settings: {}",
                crate::config::SETTING_FIELDS.join(", ")
            )),
            Self::NoData => {
                Some("Export a snapshot that contains at least one commit".to_string())
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the path exists".to_string()),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check file permissions".to_string())
                }
                _ => None,
            },
            Self::InvalidPattern { .. } => {
                Some("Use glob syntax, e.g. \"**/*.lock\" or \"vendor/**\"".to_string())
            }
            Self::Json(_) => Some(
                "A snapshot is a JSON array of commits or an object with a \"commits\" array"
                    .to_string(),
            ),
            _ => None,
        }
    }

    #[must_use]
    pub fn invalid_setting(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvenanceError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
