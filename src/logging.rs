//! Tracing subscriber setup

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Install the global subscriber, writing to stderr.
///
/// `debug_enabled` selects DEBUG, otherwise WARN. A `RUST_LOG` value takes over
/// when present. Does nothing if a subscriber is already installed.
pub fn init(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });

    debug!(debug_enabled, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_init_then_keeps_first_subscriber() {
        init(false);
        init(true);
        assert!(tracing::dispatcher::has_been_set());
    }
}
