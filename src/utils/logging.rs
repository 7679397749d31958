//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `<config dir>/app.log`
//! and rotation on startup keeping 9 historical files.

use crate::config::ConfigManager;
use crate::error::{Result, ShowcaseError, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system in the configuration directory
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging() -> Result<()> {
    init_logging_in(&ConfigManager::get_config_dir())
}

/// Initialize the logging system writing `app.log` into `log_dir`
///
/// Rotates existing logs on startup to keep one file per session.
pub fn init_logging_in(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    rotate_logs_on_startup(&log_dir.join("app.log"))?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| ShowcaseError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ShowcaseError::ConfigError(Box::new(e)))?;

    tracing::info!("showcase v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on startup
///
/// - app.log.9 is deleted (oldest log)
/// - app.log.N -> app.log.N+1 for N in 8..=1
/// - app.log -> app.log.1
///
/// A fresh app.log is then created by the appender.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| ShowcaseError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| ShowcaseError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_dir, read_file};

    #[test]
    fn test_rotate_logs_on_startup_basic() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");
        std::fs::write(&log_path, "Session 1 log content").unwrap();

        rotate_logs_on_startup(&log_path).unwrap();

        let log_1 = temp_dir.path().join("app.log.1");
        assert!(log_1.exists(), "app.log.1 should exist after rotation");
        assert!(!log_path.exists(), "app.log is recreated by the appender");
        assert_eq!(read_file(&log_1), "Session 1 log content");
    }

    #[test]
    fn test_rotate_logs_on_startup_respects_max_files() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        for i in 1..=12 {
            std::fs::write(&log_path, format!("Session {i}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        for i in 1..=MAX_LOG_FILES {
            assert!(temp_dir.path().join(format!("app.log.{i}")).exists());
        }
        assert!(!temp_dir.path().join("app.log.10").exists());

        // Sessions 1-3 were dropped; 4 is the oldest retained
        assert_eq!(read_file(&temp_dir.path().join("app.log.9")), "Session 4");
        assert_eq!(read_file(&temp_dir.path().join("app.log.1")), "Session 12");
    }

    #[test]
    fn test_rotate_logs_on_startup_no_existing_log() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        assert!(rotate_logs_on_startup(&log_path).is_ok());
        assert!(!temp_dir.path().join("app.log.1").exists());
    }

    #[test]
    fn test_rotate_logs_on_startup_partial_history() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");
        std::fs::write(&log_path, "Current session").unwrap();
        std::fs::write(temp_dir.path().join("app.log.1"), "Previous session").unwrap();
        std::fs::write(temp_dir.path().join("app.log.5"), "Very old session").unwrap();

        rotate_logs_on_startup(&log_path).unwrap();

        assert_eq!(read_file(&temp_dir.path().join("app.log.1")), "Current session");
        assert_eq!(read_file(&temp_dir.path().join("app.log.2")), "Previous session");
        assert_eq!(read_file(&temp_dir.path().join("app.log.6")), "Very old session");
    }
}
