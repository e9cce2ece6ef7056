use media_relay::{ApiKey, RelayError, RouteBinding, Upstream};

fn binding(upstream: Upstream, base: &str) -> RouteBinding {
    RouteBinding::new(upstream, base, ApiKey::new("secret")).unwrap()
}

#[test]
fn test_target_url_appends_subpath() {
    let steam = binding(Upstream::Steam, "https://api.steampowered.com");
    let url = steam.target_url("/ISteamApps/GetAppList/v2").unwrap();
    assert_eq!(url.as_str(), "https://api.steampowered.com/ISteamApps/GetAppList/v2");

    let tmdb = binding(Upstream::Tmdb, "https://api.themoviedb.org/3");
    let url = tmdb.target_url("/movie/550").unwrap();
    assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/550");
}

#[test]
fn test_target_url_keeps_percent_encoding() {
    let tmdb = binding(Upstream::Tmdb, "https://api.themoviedb.org/3");
    let url = tmdb.target_url("/search/movie%20night").unwrap();
    assert_eq!(url.path(), "/3/search/movie%20night");
}

#[test]
fn test_target_url_never_leaves_bound_host() {
    let steam = binding(Upstream::Steam, "https://api.steampowered.com");

    let url = steam.target_url("//evil.example.com/steal").unwrap();
    assert_eq!(url.host_str(), Some("api.steampowered.com"));

    let err = steam.target_url("@evil.example.com/steal").unwrap_err();
    assert!(matches!(err, RelayError::ForeignTarget { upstream: Upstream::Steam }));

    let err = steam.target_url(":99999/x").unwrap_err();
    assert!(matches!(err, RelayError::InvalidTarget { upstream: Upstream::Steam, .. }));
}

#[test]
fn test_outbound_query_order() {
    let youtube = binding(Upstream::YouTube, "https://www.googleapis.com/youtube/v3");
    let query = youtube.outbound_query(vec![("q".to_string(), "test".to_string())]);
    let query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(
        query,
        vec![
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", "10"),
            ("q", "test"),
            ("key", "secret"),
        ]
    );
}

#[test]
fn test_outbound_query_drops_caller_credential() {
    let tmdb = binding(Upstream::Tmdb, "https://api.themoviedb.org/3");
    let query = tmdb.outbound_query(vec![
        ("api_key".to_string(), "spoofed".to_string()),
        ("language".to_string(), "en".to_string()),
    ]);
    assert_eq!(
        query,
        vec![
            ("language".to_string(), "en".to_string()),
            ("api_key".to_string(), "secret".to_string()),
        ]
    );
}

#[test]
fn test_invalid_base_url() {
    let result = RouteBinding::new(Upstream::Steam, "not a url", ApiKey::new("secret"));
    assert!(result.is_err());
}

#[test]
fn test_upstream_labels() {
    assert_eq!(Upstream::YouTube.prefix(), "/api/youtube");
    assert_eq!(Upstream::Tmdb.credential_param(), "api_key");
    assert_eq!(Upstream::Steam.to_string(), "Steam");
    assert_eq!(
        Upstream::Steam.failure_message(),
        "An error occurred while fetching Steam data"
    );
}
