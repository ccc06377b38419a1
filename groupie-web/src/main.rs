//! groupie-web - Groupie Tracker web front-end
//!
//! Loads the artist catalog from the remote API once, then serves the
//! artist list, detail and search pages. If the catalog cannot be loaded the
//! process exits before binding the listener.

use anyhow::{Context, Result};
use clap::Parser;
use groupie_common::ApiClient;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use groupie_web::prepare;
use groupie_web::settings::{Args, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::resolve(args).context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting groupie-web v{}", env!("CARGO_PKG_VERSION"));
    info!("Artist API: {}", settings.api_url);
    info!("Static assets: {}", settings.static_dir.display());

    let client = ApiClient::new().context("Failed to create HTTP client")?;

    let (listener, app) = match prepare(&settings, client).await {
        Ok(ready) => ready,
        Err(e) => {
            error!("Startup failed: {}", e);
            return Err(e)
                .with_context(|| format!("Could not start on {}", settings.listen_addr()));
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Ctrl+C handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received Ctrl+C, shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}
