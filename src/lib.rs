//! memberlist - terminal member roster
//!
//! A list/detail TUI over an in-memory, seeded collection of member records.
//! The list screen shows every member, the detail screen creates a new one or
//! edits an existing one in place.

// Public re-exports
pub mod app;
pub mod config;
pub mod coordinator;
pub mod logging;
pub mod models;
pub mod store;

use thiserror::Error;

// Common error types
#[derive(Debug, Error)]
pub enum MemberListError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Log sink could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
    /// Detail form rejected its input
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for MemberListError {
    fn from(err: toml::de::Error) -> Self {
        MemberListError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MemberListError {
    fn from(err: toml::ser::Error) -> Self {
        MemberListError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for memberlist operations
pub type Result<T> = std::result::Result<T, MemberListError>;

/// Error presentation helpers
pub mod error {
    use super::MemberListError;

    /// Convert error to a short message suitable for the status line
    pub fn user_friendly_message(error: &MemberListError) -> String {
        match error {
            MemberListError::Validation(msg) => msg.clone(),
            MemberListError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            MemberListError::Tui(_) => {
                "Terminal could not be set up. Is this an interactive terminal?".to_string()
            }
            MemberListError::Logging(_) => {
                "Log file could not be opened. Check the logging path in your config.".to_string()
            }
            MemberListError::Io(_) => error.to_string(),
        }
    }
}

pub use coordinator::{Coordinator, DetailMode, MemberDelegate};
pub use models::{Member, RowViewModel};
pub use store::MemberStore;

// Common types and constants
pub const APP_NAME: &str = "memberlist";
pub const CONFIG_FILE: &str = "memberlist.toml";
pub const LOG_FILE: &str = "memberlist.log";
