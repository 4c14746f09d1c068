// Engine main entry point
use engine::config::AppConfig;
use engine::profitability::LotRegistry;
use engine::services::{create_router, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG takes precedence over the configured filter.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(version = %config.version, title = %config.frontend.head.title, "Starting pricing engine...");
    for rule in config.mismatched_proxy_targets() {
        warn!(
            prefix = %rule.prefix,
            target = %rule.target,
            port = config.server.port,
            "UI dev proxy does not point at the engine port"
        );
    }

    let lots = match &config.data.lots_path {
        Some(path) => LotRegistry::load_or_empty(path),
        None => {
            warn!("data.lots_path is not set, profitability lookups will fail");
            LotRegistry::default()
        }
    };
    let app = create_router(AppState::new(lots), &config);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, api_prefix = config.api_prefix(), "Engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
