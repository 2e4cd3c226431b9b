//! Tracing subscriber initialization.
//!
//! The embedding app shell calls [`init_tracing`] once at startup;
//! everything below emits structured events through `tracing` and
//! stays agnostic of the subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to debug-level output for the mentora
/// crates and info elsewhere. Returns an error if a subscriber is
/// already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mentora_core=debug,mentora_infra=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}
