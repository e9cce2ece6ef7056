pub mod config;
pub mod error;
pub mod model;
pub mod router;
pub mod routes;
pub mod shell;
pub mod upstream;

pub use config::{ApiKey, Config, Credentials, Settings};
pub use error::{ConfigError, RelayError};
pub use model::{AppState, build_app};
pub use router::{relay_catalog, relay_media_metadata, search_videos};
pub use shell::serve_app_shell;
pub use upstream::{RouteBinding, Upstream};
