use anyhow::Context;

use shiprate_api::app::{build_app, services::AppServices};
use shiprate_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    shiprate_observability::init(config.log_format);

    let services = AppServices::from_config(&config).with_context(|| {
        format!(
            "failed to load country data from {}",
            config.countries_csv.display()
        )
    })?;

    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
