use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::HealthService;
use uvecheck_core::{CoreConfig, constants::TODAY_ENV_VAR, today_from_env_value};

/// Main entry point for the UveCheck application
///
/// Starts the REST server (with Swagger UI at `/swagger-ui`).
///
/// # Environment Variables
/// - `UVECHECK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `UVECHECK_TODAY`: Optional fixed evaluation date (`YYYY-MM-DD`) for every assessment
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("uvecheck=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("UVECHECK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let fixed_today = today_from_env_value(std::env::var(TODAY_ENV_VAR).ok())?;

    tracing::info!("++ Starting UveCheck REST on {}", rest_addr);
    match fixed_today {
        Some(today) => tracing::info!("++ Fixed evaluation date {}", today),
        None => tracing::info!("++ Evaluating against the system clock"),
    }
    tracing::info!("++ {}", HealthService::check_health().message);

    let rest_app = api_rest::router(Arc::new(CoreConfig::new(fixed_today)));

    let rest_server = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
        axum::serve(listener, rest_app).await?;
        Ok::<(), anyhow::Error>(())
    });

    rest_server.await??;

    Ok(())
}
