//! Web server for the AI Vision admin dashboard
#![forbid(unsafe_code)]

use aivision_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get configuration
    let config = aivision_core::Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        aivision_core::Config::default()
    });

    // Build the application with configuration
    let app = build_app(config.clone());

    // Use configuration for web server address
    let host: IpAddr = config
        .web
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.web.host, e))?;
    let addr = SocketAddr::new(host, config.web.port);

    info!("Starting AI Vision admin web server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
