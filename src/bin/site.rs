//! # CheckDev Site
//!
//! Serves the aggregated home page and profiles over HTTP.

use anyhow::Result;
use tracing::info;

use checkdev::config::{ServiceKind, Settings};
use checkdev::startup::Application;

const SERVICE: ServiceKind = ServiceKind::Site;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    checkdev::telemetry::init_tracing(SERVICE);

    // Load configuration from environment and config files
    let settings = Settings::load(SERVICE)?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings, SERVICE).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
