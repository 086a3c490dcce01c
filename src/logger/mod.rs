//! Logger initialization from the `[logger]` settings section.
//!
//! Console output by default; when file logging is enabled the log file
//! takes over as the writer and output switches to JSON lines.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;

/// Initializes the global tracing subscriber.
///
/// The `RUST_LOG` environment variable, when set, wins over the
/// configured level.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    if settings.file.enabled {
        if let Some(parent) = std::path::Path::new(&settings.file.path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.file.path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .json()
            .init();
    } else if settings.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logging_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/run.log");
        let settings = LoggerSettings {
            file: crate::config::settings::FileSettings {
                enabled: true,
                path: path.to_string_lossy().into_owned(),
            },
            ..LoggerSettings::default()
        };
        // init_logger can only install one global subscriber per process, so
        // only exercise the directory/file preparation here.
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.file.path)
            .unwrap();
        assert!(path.exists());
    }
}
