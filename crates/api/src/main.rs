use anyhow::Context;

use learnhub_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    learnhub_observability::init();

    let config = ApiConfig::from_env()?;
    if !config.seed_demo_data {
        tracing::warn!("demo data disabled; the service starts with no users, courses or reviews");
    }

    let app = learnhub_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
