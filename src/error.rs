//! Error types for mailtags

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mailtags
#[derive(Debug, Error)]
pub enum MailtagsError {
    #[error("Settings file not found: {0}")]
    SettingsNotFound(PathBuf),

    #[error("Invalid tag name: '{0}'")]
    InvalidTagName(String),

    #[error("Missing context argument: {0}")]
    MissingContext(String),

    #[error("Invalid context value for '{key}': {reason}")]
    InvalidContextValue { key: String, reason: String },

    #[error("Affiliate not found: {0}")]
    AffiliateNotFound(u64),

    #[error("Unknown notification: {0}")]
    UnknownNotification(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Tag handler error: {0}")]
    Handler(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MailtagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MailtagsError::SettingsNotFound(_) => 2,
            MailtagsError::MissingContext(_) | MailtagsError::InvalidContextValue { .. } => 3,
            MailtagsError::AffiliateNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MailtagsError::SettingsNotFound(path) => {
                format!(
                    "Settings file not found: {}\n\n\
                    Suggestions:\n\
                    • Create a mailtags.toml in the current directory\n\
                    • Pass the file explicitly with --config <path>\n\
                    • Set MAILTAGS_CONFIG environment variable to the settings path",
                    path.display()
                )
            }
            MailtagsError::MissingContext(key) => {
                format!(
                    "Missing context argument: '{}'\n\n\
                    Suggestions:\n\
                    • Pass it on the command line: --set {}=<value>\n\
                    • Add it to the context file given with --context",
                    key, key
                )
            }
            MailtagsError::AffiliateNotFound(id) => {
                format!(
                    "Affiliate not found: {}\n\n\
                    Suggestions:\n\
                    • Check the affiliate id\n\
                    • Add an [[affiliates]] entry with id = {} to mailtags.toml",
                    id, id
                )
            }
            MailtagsError::UnknownNotification(kind) => {
                format!(
                    "Unknown notification: '{}'\n\n\
                    Valid notifications: registration, application-accepted, new-referral",
                    kind
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MailtagsError
pub type Result<T> = std::result::Result<T, MailtagsError>;
