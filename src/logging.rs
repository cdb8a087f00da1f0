//! Tracing setup for binaries and tests built on this crate.

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber and the `color_eyre` report handler.
///
/// `RUST_LOG` takes precedence over `default_level`. Set `json` for
/// machine-readable output.
pub fn init_logging(default_level: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());
    if json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }

    color_eyre::install().map_err(|e| anyhow::anyhow!("failed to install color_eyre: {e}"))?;
    Ok(())
}
