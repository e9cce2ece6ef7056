use media_relay::{AppState, Config, build_app, config::load_settings};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = load_settings("config.yml")?;
    let config = Config::from_env(settings)?;
    let port = config.settings.port;
    info!(static_dir = %config.settings.static_dir.display(), "Configuration loaded");

    let app = build_app(AppState::new(config)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server is running on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
