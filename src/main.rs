use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ucrm_contract_notify::config::Config;
use ucrm_contract_notify::runner::Runner;

/// Main entry point for the batch.
///
/// Initializes tracing, loads configuration, and runs one full pass over the
/// client list. Invoked by an external scheduler; there are no CLI flags.
/// A startup failure or a failed client-list fetch exits non-zero, anything
/// past that is handled per client inside the runner.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ucrm_contract_notify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let runner = Runner::new(config)?;
    let summary = runner.run().await?;

    tracing::info!(
        "Run complete: {} dispatched, {} failed",
        summary.dispatched,
        summary.failed
    );
    Ok(())
}
