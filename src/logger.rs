use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if wants_span_timings(verbosity, &rust_log) {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Span-close timings are shown whenever debug or trace output is requested.
fn wants_span_timings(verbosity: u8, filter: &str) -> bool {
    let filter = filter.to_ascii_lowercase();
    verbosity > 0 || filter.contains("debug") || filter.contains("trace")
}
