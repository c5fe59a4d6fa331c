use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber, filtered by `RUST_LOG`.
///
/// Log lines go to stderr so stdout only carries the prompt and progress
/// transcript. Span close events (with their busy time) are shown when the
/// filter enables debug output.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let show_span_timings = env_filter.to_string().contains("debug");

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if show_span_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    // Already initialized is fine.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
