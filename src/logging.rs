//! File logging setup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Log file name prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "staff-registry";

/// Open a daily rolling log file in `dir`, creating the directory.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, String> {
    std::fs::create_dir_all(dir).map_err(|e| format!("Failed to create log directory {}: {e}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| format!("Failed to open log file in {}: {e}", dir.display()))
}

/// Initialize the global subscriber. The returned guard flushes on drop.
///
/// Falls back to stderr when the log file cannot be opened.
pub fn init(logging: &LoggingConfig) -> WorkerGuard {
    let dir = logging.resolve_directory();
    let (writer, guard) = match file_appender(&dir) {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(e) => {
            eprintln!("Warning: {e}. Logging to stderr.");
            tracing_appender::non_blocking(std::io::stderr())
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("staff-registry-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = scratch_path("logs");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(file_appender(&dir).is_ok());
        assert!(dir.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_appender_unusable_directory() {
        // A directory cannot be created beneath a regular file.
        let file = scratch_path("not-a-dir");
        std::fs::write(&file, b"").unwrap();

        let err = file_appender(&file.join("logs")).unwrap_err();
        assert!(err.starts_with("Failed to create log directory"));

        let _ = std::fs::remove_file(&file);
    }
}
