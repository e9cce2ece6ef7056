use crate::model::AppState;
use crate::routes::resolve_view;
use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tracing::debug;

/// Catch-all: static assets when they exist, otherwise `index.html` so the
/// client-side router can take over.
pub async fn serve_app_shell(State(state): State<AppState>, request: Request) -> Response {
    match resolve_view(request.uri().path()) {
        Some(route) => debug!(view = route.view, "Serving app shell"),
        None => debug!(path = request.uri().path(), "Serving static asset or app shell"),
    }

    match state.shell.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
