//! Tracing subscriber setup

use tracing_subscriber::{
    fmt::{format::FmtSpan, Layer as FmtLayer},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, JSON lines on stdout when `json` is set
pub fn init(json: bool) -> Result<(), TryInitError> {
    let registry = Registry::default().with(env_filter());

    if json {
        registry
            .with(
                FmtLayer::default()
                    .json()
                    .with_span_events(FmtSpan::NONE)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stdout)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(FmtLayer::default().with_writer(std::io::stderr))
            .try_init()
    }
}
