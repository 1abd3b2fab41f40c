use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(calview::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calview::config))]
    Config(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(calview::google_calendar))]
    GoogleCalendar(String),

    #[error("Invalid date: {0}")]
    #[diagnostic(code(calview::invalid_date))]
    InvalidDate(String),

    #[error("Invalid event: {0}")]
    #[diagnostic(code(calview::invalid_event))]
    InvalidEvent(String),

    #[error("Invalid query: {0}")]
    #[diagnostic(code(calview::invalid_query))]
    InvalidQuery(String),

    #[error(transparent)]
    #[diagnostic(code(calview::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(calview::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(calview::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for JSON errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create invalid event errors
pub fn invalid_event_error(message: &str) -> Error {
    Error::InvalidEvent(message.to_string())
}

/// Helper to create invalid query errors
pub fn invalid_query_error(message: &str) -> Error {
    Error::InvalidQuery(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
