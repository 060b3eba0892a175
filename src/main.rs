use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_city_info::{CityInfoGenerator, CityInfoService, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_city_info=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP city info server");

    let config = Config::from_env()?;
    let generator = CityInfoGenerator::new(config)?;
    let server = CityInfoService::new(generator)
        .serve(rmcp::transport::stdio())
        .await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
