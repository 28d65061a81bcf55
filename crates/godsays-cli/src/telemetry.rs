//! Logging setup for server mode.
//!
//! Events are printed by `tracing_subscriber::fmt` and filtered with
//! `RUST_LOG` (default `info`). The `godsays` core crate is built with its
//! `tracing` feature, so `RUST_LOG=godsays=trace` shows every phrase draw.
//!
//! CLI mode does not install a subscriber; stdout only ever carries the
//! phrase there.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
