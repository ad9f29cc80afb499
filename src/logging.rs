//! Log sink setup
//!
//! The terminal belongs to the TUI, so events go to a plain-text file
//! instead of stderr. `RUST_LOG` wins over the configured level.

use crate::config::LoggingConfig;
use crate::{MemberListError, Result, APP_NAME, LOG_FILE};
use std::fs;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Resolve where the log file lives
/// Uses the configured path, else $DATA_LOCAL_HOME/memberlist/memberlist.log
pub fn log_file_path(config: &LoggingConfig) -> Result<PathBuf> {
    if let Some(file) = &config.file {
        return Ok(file.clone());
    }

    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        MemberListError::Logging("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Install the global subscriber. Returns the log file path.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let path = log_file_path(config)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| {
            MemberListError::Logging(format!("Log path has no file name: {}", path.display()))
        })?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .map_err(|e| MemberListError::Logging(e.to_string()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| MemberListError::Logging(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        let path = log_file_path(&LoggingConfig::default()).unwrap();
        assert!(path.ends_with("memberlist/memberlist.log"));
    }

    #[test]
    fn test_configured_log_path_wins() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/tmp/roster.log")),
            ..LoggingConfig::default()
        };
        assert_eq!(log_file_path(&config).unwrap(), PathBuf::from("/tmp/roster.log"));
    }
}
