use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(zonesync::config),
        help("check the environment variables (ROSTER_PATH, TIMEZONE, REFRESH_INTERVAL, TEAM) and command line flags")
    )]
    Config(String),

    #[error("Roster error: {0}")]
    #[diagnostic(
        code(zonesync::roster),
        help("the roster is a TOML file with [[teams]] and [[people]] tables, see config/roster.toml")
    )]
    Roster(String),

    #[error("Timezone error: {0}")]
    #[diagnostic(
        code(zonesync::timezone),
        help("use an IANA identifier such as Europe/Helsinki, `zonesync zones` lists them")
    )]
    Timezone(String),

    #[error(transparent)]
    #[diagnostic(code(zonesync::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(zonesync::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(zonesync::other))]
    Other(String),
}

// TOML roster files
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Roster(err.to_string())
    }
}

// JSON dashboard output
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ZoneResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create roster errors
pub fn roster_error(message: &str) -> Error {
    Error::Roster(message.to_string())
}

/// Helper to create timezone errors
pub fn timezone_error(message: &str) -> Error {
    Error::Timezone(message.to_string())
}
