//! Error types for the RustCasts settings layer

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Preference store error
    #[error("Preference error: {0}")]
    Preference(#[from] crate::preferences::PreferenceError),

    /// Launcher component registry error
    #[error("Component registry error: {0}")]
    Component(#[from] crate::launcher::ComponentError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SettingsError>;

impl From<String> for SettingsError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SettingsError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
