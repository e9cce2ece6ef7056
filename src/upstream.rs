use crate::config::{ApiKey, Config};
use crate::error::{ConfigError, RelayError};
use std::fmt;
use url::Url;

/// One of the third-party APIs the relay forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    YouTube,
    Steam,
    Tmdb,
}

impl Upstream {
    /// Inbound path prefix owned by this upstream.
    pub fn prefix(self) -> &'static str {
        match self {
            Upstream::YouTube => "/api/youtube",
            Upstream::Steam => "/api/steam",
            Upstream::Tmdb => "/api/tmdb",
        }
    }

    /// Query parameter the credential is injected under.
    pub fn credential_param(self) -> &'static str {
        match self {
            Upstream::YouTube | Upstream::Steam => "key",
            Upstream::Tmdb => "api_key",
        }
    }

    /// Message returned to the caller when the upstream call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Upstream::YouTube => "An error occurred while fetching videos",
            Upstream::Steam => "An error occurred while fetching Steam data",
            Upstream::Tmdb => "An error occurred while fetching TMDB data",
        }
    }

    fn fixed_params(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Upstream::YouTube => &[("part", "snippet"), ("type", "video"), ("maxResults", "10")],
            Upstream::Steam | Upstream::Tmdb => &[],
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Upstream::YouTube => "YouTube",
            Upstream::Steam => "Steam",
            Upstream::Tmdb => "TMDB",
        })
    }
}

/// Static association of an upstream with its base URL and credential.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RouteBinding {
    pub upstream: Upstream,
    pub base_url: Url,
    pub credential: ApiKey,
}

impl RouteBinding {
    pub fn new(upstream: Upstream, base_url: &str, credential: ApiKey) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidUpstreamUrl {
            upstream,
            source,
        })?;
        Ok(Self {
            upstream,
            base_url,
            credential,
        })
    }

    /// Resolves `subpath` (raw, percent-encoded, starting with `/`) against the base URL.
    ///
    /// The result always keeps the base's origin; anything else is rejected.
    /// The relay routes always pass a leading `/`, so the error arms only guard direct callers.
    pub fn target_url(&self, subpath: &str) -> Result<Url, RelayError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), subpath);
        let url = Url::parse(&joined).map_err(|source| RelayError::InvalidTarget {
            upstream: self.upstream,
            source,
        })?;
        if url.origin() != self.base_url.origin() {
            return Err(RelayError::ForeignTarget {
                upstream: self.upstream,
            });
        }
        Ok(url)
    }

    /// Outbound query: fixed parameters, then caller pairs, then the credential.
    ///
    /// Caller pairs named like the credential parameter are dropped.
    pub fn outbound_query(&self, caller: Vec<(String, String)>) -> Vec<(String, String)> {
        let credential_param = self.upstream.credential_param();
        let mut query: Vec<(String, String)> = self
            .upstream
            .fixed_params()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        query.extend(caller.into_iter().filter(|(k, _)| k != credential_param));
        query.push((
            credential_param.to_string(),
            self.credential.expose().to_string(),
        ));
        query
    }
}

/// The three bindings, one per upstream.
#[derive(Debug, Clone)]
pub struct Bindings {
    youtube: RouteBinding,
    steam: RouteBinding,
    tmdb: RouteBinding,
}

impl Bindings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let bind = |upstream: Upstream| {
            RouteBinding::new(
                upstream,
                config.settings.upstreams.base_url(upstream),
                config.credentials.get(upstream).clone(),
            )
        };
        Ok(Self {
            youtube: bind(Upstream::YouTube)?,
            steam: bind(Upstream::Steam)?,
            tmdb: bind(Upstream::Tmdb)?,
        })
    }

    pub fn get(&self, upstream: Upstream) -> &RouteBinding {
        match upstream {
            Upstream::YouTube => &self.youtube,
            Upstream::Steam => &self.steam,
            Upstream::Tmdb => &self.tmdb,
        }
    }
}
