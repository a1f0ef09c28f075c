//! crates/logging/src/tracing_bridge.rs
//! Subscriber setup that turns a [`LogConfig`] into a `tracing` pipeline.
//!
//! Events are formatted by the `tracing-subscriber` `fmt` layer and written
//! to standard error so standard output stays reserved for digests. The
//! filter starts from the configured [`Verbosity`](crate::Verbosity); when
//! [`LogConfig::respect_env`] is set, `RUST_LOG` directives take precedence.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LogConfig, init_tracing};
//!
//! init_tracing(&LogConfig::from_flags(1, false));
//! tracing::info!(target: "sha256::cli", "hashing stdin");
//! ```

use std::io;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::{LOG_ENV_VAR, LogConfig};

/// Builds the event filter for `config`.
#[must_use]
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    let builder = EnvFilter::builder()
        .with_default_directive(config.verbosity.level_filter().into())
        .with_env_var(LOG_ENV_VAR);

    if config.respect_env {
        builder.from_env_lossy()
    } else {
        builder.parse_lossy("")
    }
}

/// Builds a formatting subscriber for `config` that writes to `writer`.
pub fn build_subscriber<W>(config: &LogConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(writer)
        .with_ansi(config.ansi)
        .with_target(true)
        .finish()
}

/// Installs the global subscriber described by `config`.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one stays in place, so calling this more than once is harmless.
pub fn init_tracing(config: &LogConfig) -> bool {
    build_subscriber(config, io::stderr).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verbosity;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn filter_follows_verbosity_without_env() {
        let config = LogConfig::new(Verbosity::Debug).with_respect_env(false);
        let filter = build_filter(&config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn quiet_admits_errors_only() {
        let config = LogConfig::new(Verbosity::Quiet).with_respect_env(false);
        let filter = build_filter(&config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn second_init_is_harmless() {
        let config = LogConfig::default().with_respect_env(false);
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
