//! Diagnostic tracing for the self-check binary.
//!
//! The library only emits events through `tracing`; installing a
//! subscriber is left to whoever embeds it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=tracker=debug cargo run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
