use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use media_relay::{RelayError, Upstream};

async fn failed_request(url: &str) -> reqwest::Error {
    reqwest::Client::new().get(url).send().await.unwrap_err()
}

#[tokio::test]
async fn test_request_error_hides_credential() {
    let source = failed_request("http://127.0.0.1:1/ISteamApps/GetAppList/v2?key=steam-secret").await;
    assert!(source.to_string().contains("steam-secret"));

    let err = RelayError::request(Upstream::Steam, source);

    assert!(!err.to_string().contains("steam-secret"));
    assert!(!format!("{:?}", err).contains("steam-secret"));
    assert_eq!(err.upstream(), Upstream::Steam);
}

#[tokio::test]
async fn test_error_response_is_fixed_body() {
    let source = failed_request("http://127.0.0.1:1/3/movie/550?api_key=tmdb-secret").await;
    let response = RelayError::request(Upstream::Tmdb, source).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"error":"An error occurred while fetching TMDB data"}"#);
}
