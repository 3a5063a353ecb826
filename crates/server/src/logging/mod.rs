//! Tracing setup and per-request wide events.

pub mod wide_events;

pub use wide_events::WideEvent;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_DIRECTIVES: &str = "oauth_callback_server=info,hyper=warn,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides [`DEFAULT_DIRECTIVES`].
pub fn initialize_standard_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

/// Tools that print their result to stdout log to stderr instead.
pub fn initialize_stderr_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
