//! Client-side route table shipped with the frontend bundle.
//!
//! The server never dispatches on it; it only serves the app shell for these
//! paths and lets the browser router pick the view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRoute {
    pub path: &'static str,
    pub view: &'static str,
}

pub const VIEW_ROUTES: &[ViewRoute] = &[
    ViewRoute {
        path: "/",
        view: "home",
    },
    ViewRoute {
        path: "/youtube",
        view: "youtube",
    },
    ViewRoute {
        path: "/movies",
        view: "movies",
    },
];

/// Exact match, ignoring a single trailing slash.
pub fn resolve_view(path: &str) -> Option<&'static ViewRoute> {
    let normalized = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    };
    VIEW_ROUTES.iter().find(|route| route.path == normalized)
}
