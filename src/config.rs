use crate::error::ConfigError;
use crate::upstream::Upstream;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const YOUTUBE_KEY_VAR: &str = "VUE_APP_YOUTUBE_API_KEY";
pub const STEAM_KEY_VAR: &str = "VUE_APP_STEAM_API_KEY";
pub const TMDB_KEY_VAR: &str = "VUE_APP_TMDB_API_KEY";
pub const PORT_VAR: &str = "PORT";

/// Everything the relay needs, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub credentials: Credentials,
}

/// Non-secret settings, optionally read from `config.yml`.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub port: u16,
    pub static_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub upstreams: UpstreamUrls,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: PathBuf::from("dist"),
            request_timeout_secs: 30,
            upstreams: UpstreamUrls::default(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamUrls {
    pub youtube: String,
    pub steam: String,
    pub tmdb: String,
}

impl Default for UpstreamUrls {
    fn default() -> Self {
        Self {
            youtube: "https://www.googleapis.com/youtube/v3".to_string(),
            steam: "https://api.steampowered.com".to_string(),
            tmdb: "https://api.themoviedb.org/3".to_string(),
        }
    }
}

impl UpstreamUrls {
    pub fn base_url(&self, upstream: Upstream) -> &str {
        match upstream {
            Upstream::YouTube => &self.youtube,
            Upstream::Steam => &self.steam,
            Upstream::Tmdb => &self.tmdb,
        }
    }
}

/// A server-held secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub youtube: ApiKey,
    pub steam: ApiKey,
    pub tmdb: ApiKey,
}

impl Credentials {
    pub fn get(&self, upstream: Upstream) -> &ApiKey {
        match upstream {
            Upstream::YouTube => &self.youtube,
            Upstream::Steam => &self.steam,
            Upstream::Tmdb => &self.tmdb,
        }
    }
}

impl Config {
    /// Reads credentials and the port override from the process environment.
    pub fn from_env(settings: Settings) -> Result<Self, ConfigError> {
        Self::from_lookup(settings, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`], with variables resolved through `lookup`.
    pub fn from_lookup<F>(mut settings: Settings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(ApiKey::new)
                .ok_or(ConfigError::MissingCredential(name))
        };

        let credentials = Credentials {
            youtube: required(YOUTUBE_KEY_VAR)?,
            steam: required(STEAM_KEY_VAR)?,
            tmdb: required(TMDB_KEY_VAR)?,
        };

        if let Some(value) = lookup(PORT_VAR) {
            settings.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        Ok(Self {
            settings,
            credentials,
        })
    }
}

/// Parses a settings file. `Ok(None)` when the path is not a readable `.yml`/`.yaml` file.
pub fn try_load_settings<P: AsRef<Path>>(path: P) -> Result<Option<Settings>, ConfigError> {
    let path = path.as_ref();

    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => {}
        _ => return Ok(None),
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_yml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads `filename`, falling back to `<stem>.yml` / `<stem>.yaml`, then to defaults.
pub fn load_settings(filename: &str) -> Result<Settings, ConfigError> {
    if let Some(settings) = try_load_settings(filename)? {
        return Ok(settings);
    }

    if let Some(stem) = Path::new(filename).file_stem().and_then(|s| s.to_str()) {
        for ext in ["yml", "yaml"] {
            let path = format!("{}.{}", stem, ext);
            if let Some(settings) = try_load_settings(&path)? {
                return Ok(settings);
            }
        }
    }

    Ok(Settings::default())
}
