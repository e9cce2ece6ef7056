use crate::error::RelayError;
use crate::model::AppState;
use crate::upstream::Upstream;
use axum::{
    extract::{Query, State},
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

type QueryPairs = Vec<(String, String)>;

/// `GET /api/youtube/search?q=`: only `q` is taken from the caller.
///
/// An absent `q` is simply not forwarded.
pub async fn search_videos(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Response {
    let upstream = Upstream::YouTube;
    let query: QueryPairs = params
        .into_iter()
        .find(|(name, _)| name == "q")
        .into_iter()
        .collect();
    respond(upstream, relay(&state, upstream, "/search", query).await)
}

/// `GET /api/steam/<rest>`
pub async fn relay_catalog(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<QueryPairs>,
) -> Response {
    forward(state, Upstream::Steam, uri, params).await
}

/// `GET /api/tmdb/<rest>`
pub async fn relay_media_metadata(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<QueryPairs>,
) -> Response {
    forward(state, Upstream::Tmdb, uri, params).await
}

async fn forward(state: AppState, upstream: Upstream, uri: Uri, params: QueryPairs) -> Response {
    // Raw path, so percent-encoding reaches the upstream untouched.
    let subpath = uri.path().strip_prefix(upstream.prefix()).unwrap_or("/");
    respond(upstream, relay(&state, upstream, subpath, params).await)
}

/// Issues the bound GET and hands back the upstream body verbatim.
async fn relay(
    state: &AppState,
    upstream: Upstream,
    subpath: &str,
    params: QueryPairs,
) -> Result<Response, RelayError> {
    let binding = state.bindings.get(upstream);
    let url = binding.target_url(subpath)?;
    debug!(%upstream, path = url.path(), "Relaying request");

    let response = state
        .client
        .get(url)
        .query(&binding.outbound_query(params))
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|err| RelayError::request(upstream, err))?;

    let body = response
        .bytes()
        .await
        .map_err(|err| RelayError::request(upstream, err))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn respond(upstream: Upstream, result: Result<Response, RelayError>) -> Response {
    result.unwrap_or_else(|err| {
        error!(%upstream, error = %err, "{} API error", upstream);
        err.into_response()
    })
}
