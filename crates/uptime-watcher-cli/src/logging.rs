//! tracing subscriber setup.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uptime_watcher_core::storage::{log_path, LoggingSettings};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `logging.level`. One-shot commands only log
/// warnings to stderr so their JSON output stays readable.
pub fn init(settings: &LoggingSettings, long_running: bool) {
    let fallback = if long_running {
        settings.level.as_str()
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let mut file_error = None;
    let file_layer = if long_running && settings.file {
        match open_log() {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
            Err(e) => {
                file_error = Some(e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "log file unavailable, logging to stderr only");
    }
}

fn open_log() -> Result<File, Box<dyn std::error::Error>> {
    Ok(open_log_at(&log_path()?)?)
}

fn open_log_at(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
