use crate::config::Config;
use crate::error::ConfigError;
use crate::router::{relay_catalog, relay_media_metadata, search_videos};
use crate::shell::serve_app_shell;
use crate::upstream::{Bindings, Upstream};
use axum::{Router, routing::get};
use reqwest::Client;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub bindings: Arc<Bindings>,
    pub client: Client,
    pub shell: ServeDir<ServeFile>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let bindings = Bindings::from_config(&config)?;
        let client = Client::builder()
            .timeout(config.settings.request_timeout())
            .build()
            .map_err(ConfigError::HttpClient)?;
        let static_dir = &config.settings.static_dir;
        let shell = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

        Ok(Self {
            config: Arc::new(config),
            bindings: Arc::new(bindings),
            client,
            shell,
        })
    }
}

/// Assembles the relay routes, the app-shell fallback and the middleware stack.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{}/search", Upstream::YouTube.prefix()),
            get(search_videos),
        )
        .route(&format!("{}/", Upstream::Steam.prefix()), get(relay_catalog))
        .route(
            &format!("{}/{{*rest}}", Upstream::Steam.prefix()),
            get(relay_catalog),
        )
        .route(&format!("{}/", Upstream::Tmdb.prefix()), get(relay_media_metadata))
        .route(
            &format!("{}/{{*rest}}", Upstream::Tmdb.prefix()),
            get(relay_media_metadata),
        )
        .fallback(serve_app_shell)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
