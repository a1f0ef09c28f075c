//! crates/logging/src/capture.rs
//! In-memory log capture for tests and embedders.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

use super::config::LogConfig;
use super::tracing_bridge::build_subscriber;

/// Shared buffer that collects formatted log lines.
///
/// Clones share the same storage, so one handle can be moved into a
/// subscriber while another reads the output afterwards.
///
/// # Examples
///
/// ```
/// use logging::{CapturedLogs, LogConfig, Verbosity};
///
/// let logs = CapturedLogs::new();
/// let config = LogConfig::new(Verbosity::Verbose).with_respect_env(false);
/// tracing::subscriber::with_default(logs.subscriber(&config), || {
///     tracing::info!(target: "sha256::cli", "hashing stdin");
/// });
/// assert!(logs.contents().contains("hashing stdin"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything captured so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Builds a subscriber for `config` that writes into this buffer.
    pub fn subscriber(&self, config: &LogConfig) -> impl Subscriber + Send + Sync + 'static {
        build_subscriber(config, self.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            logs: self.clone(),
        }
    }
}

/// Writer handed out by [`CapturedLogs`] for a single event.
#[derive(Debug)]
pub struct CapturedWriter {
    logs: CapturedLogs,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logs.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
