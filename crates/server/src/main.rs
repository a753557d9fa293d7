use server::config;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();
    tracing::info!(
        min_ply = config.min_ply,
        max_ply = config.max_ply,
        max_attempts = config.max_attempts,
        time_budget_ms = config.time_budget.map(|d| d.as_millis() as u64),
        "Puzzle settings loaded"
    );

    let addr = format!("{}:{}", config.host, config.port);
    let app = server::app(config);

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
