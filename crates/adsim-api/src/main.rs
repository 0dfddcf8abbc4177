use adsim_api::{create_app, ApiConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let addr = config.socket_addr()?;

    let app = create_app(AppState::new(), &config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("AdSim API server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
