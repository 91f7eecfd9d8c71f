use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_FILE_ENV: &str = "DASHSTATE_LOG";

/// Initialize tracing.
///
/// Level comes from `RUST_LOG` (default `warn`). Output goes to stderr,
/// or to a file when `DASHSTATE_LOG` is set. Log files get a unique
/// suffix so concurrent runs don't clobber each other:
/// `{path}.{timestamp}.{pid}`. If the file can't be created, output
/// stays on stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_file = std::env::var(LOG_FILE_ENV)
        .ok()
        .and_then(|log_path| open_log_file(&log_path));

    match log_file {
        Some(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }
}

/// Create `{log_path}.{timestamp}.{pid}`, or `None` with a warning on stderr.
fn open_log_file(log_path: &str) -> Option<File> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                unique_path, err
            );
            None
        }
    }
}
