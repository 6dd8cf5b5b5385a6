use anyhow::Result;
use promptdeck_mcp::{McpServer, ServerInfo};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries protocol traffic, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let registry = promptdeck_rules::registry();
    info!(rules = registry.len(), "promptdeck rules server starting");

    McpServer::new(
        registry,
        ServerInfo::new("promptdeck-rules", env!("CARGO_PKG_VERSION")),
    )
    .run()
    .await
}
