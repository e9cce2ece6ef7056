use crate::upstream::Upstream;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
    #[error("environment variable {0} must be set")]
    MissingCredential(&'static str),
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid base URL for {upstream}: {source}")]
    InvalidUpstreamUrl {
        upstream: Upstream,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure while relaying a request to an upstream.
///
/// Every variant collapses to the same 500 body for its upstream.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{upstream} request failed: {source}")]
    Request {
        upstream: Upstream,
        #[source]
        source: reqwest::Error,
    },
    #[error("{upstream} target is not a valid URL: {source}")]
    InvalidTarget {
        upstream: Upstream,
        #[source]
        source: url::ParseError,
    },
    #[error("{upstream} target leaves the bound host")]
    ForeignTarget { upstream: Upstream },
}

impl RelayError {
    pub fn request(upstream: Upstream, source: reqwest::Error) -> Self {
        // reqwest includes the full URL, credential and all, in its Display output.
        RelayError::Request {
            upstream,
            source: source.without_url(),
        }
    }

    pub fn upstream(&self) -> Upstream {
        match self {
            RelayError::Request { upstream, .. }
            | RelayError::InvalidTarget { upstream, .. }
            | RelayError::ForeignTarget { upstream } => *upstream,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.upstream().failure_message() })),
        )
            .into_response()
    }
}
