//! Tracing setup: stdout plus an optional daily rolling file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::StartupError;

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "wordroll.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it for the
/// lifetime of the process.
///
/// # Errors
///
/// Returns [`StartupError::Logging`] if `filter` is not a valid directive
/// or a global subscriber is already installed.
pub fn init(filter: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, StartupError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| StartupError::Logging(e.to_string()))?;

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| StartupError::Logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_rejected() {
        let err = init("wordroll=notalevel", None).unwrap_err();
        assert!(matches!(err, StartupError::Logging(_)));
    }
}
