//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging of the REST surface. The workspace's main
//! `uvecheck-run` binary serves the same router.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uvecheck_core::{constants::TODAY_ENV_VAR, today_from_env_value, CoreConfig};

/// Main entry point for the UveCheck REST API server
///
/// # Environment Variables
/// - `UVECHECK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `UVECHECK_TODAY`: Optional fixed evaluation date (`YYYY-MM-DD`)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - `UVECHECK_TODAY` is set but is not a valid date,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("UVECHECK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let fixed_today = today_from_env_value(std::env::var(TODAY_ENV_VAR).ok())?;
    if let Some(today) = fixed_today {
        tracing::info!("-- Evaluating every assessment as of {}", today);
    }

    tracing::info!("-- Starting UveCheck REST API on {}", addr);

    let app = api_rest::router(Arc::new(CoreConfig::new(fixed_today)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
