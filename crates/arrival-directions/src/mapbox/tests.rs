//! Tests for the Mapbox client: request building and HTTP handling
//! against a local one-shot HTTP stub.

use std::time::Duration;

use arrival_common::{LngLat, Profile};
use arrival_config::schema::DirectionsSchemaConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::*;
use crate::{DirectionsError, DirectionsProvider, DirectionsRequest};

const PARKING: LngLat = LngLat::new(-123.2487763774755, 49.27106955540924);
const ENTRANCE: LngLat = LngLat::new(-123.25042484166043, 49.270382121434956);

fn client_for(base_url: &str) -> DirectionsClient {
    let config = DirectionsConfig::new("pk.test-token")
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    DirectionsClient::new(config).unwrap()
}

/// Serve exactly one HTTP response. Resolves the receiver with the
/// request line (e.g. `GET /path?query HTTP/1.1`).
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut read = 0;
        while read < buf.len() {
            let n = socket.read(&mut buf[read..]).await.unwrap();
            if n == 0 {
                break;
            }
            read += n;
            if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&buf[..read]).to_string();
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}/directions/v5/mapbox"), rx)
}

const ROUTE_BODY: &str = r#"{"code":"Ok","routes":[{"geometry":{"type":"LineString","coordinates":[[-123.2487,49.2710],[-123.2504,49.2703]]},"distance":150.0,"duration":120.0,"legs":[{"steps":[{"distance":150.0,"maneuver":{"instruction":"Walk west"}}]}]}]}"#;

// -- Request building --

#[test]
fn request_url_has_profile_coordinates_and_query() {
    let client = client_for(DEFAULT_BASE_URL);
    let url = client
        .request_url(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::Walking))
        .unwrap();

    assert_eq!(
        url.path(),
        "/directions/v5/mapbox/walking/-123.2487763774755,49.27106955540924;-123.25042484166043,49.270382121434956"
    );
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("steps".to_string(), "true".to_string()),
            ("geometries".to_string(), "geojson".to_string()),
            ("access_token".to_string(), "pk.test-token".to_string()),
        ]
    );
}

#[test]
fn request_url_tolerates_trailing_slash() {
    let client = client_for("https://api.mapbox.com/directions/v5/mapbox/");
    let url = client
        .request_url(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::DrivingTraffic))
        .unwrap();
    assert!(url
        .path()
        .starts_with("/directions/v5/mapbox/driving-traffic/"));
}

#[test]
fn request_url_rejects_non_finite_coordinates() {
    let client = client_for(DEFAULT_BASE_URL);
    let bad = LngLat::new(f64::NAN, 49.0);
    let err = client
        .request_url(&DirectionsRequest::new(bad, ENTRANCE, Profile::Driving))
        .unwrap_err();
    assert!(matches!(err, DirectionsError::InvalidRequest(_)));
}

#[test]
fn config_debug_redacts_token() {
    let config = DirectionsConfig::new("pk.very-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("pk.very-secret"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn config_from_schema_prefers_explicit_token() {
    let schema = DirectionsSchemaConfig {
        access_token: Some("  pk.from-config ".into()),
        timeout_secs: 7,
        ..Default::default()
    };
    let config = DirectionsConfig::from_schema(&schema).unwrap();
    assert_eq!(config.access_token, "pk.from-config");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(7));
}

// -- HTTP round trips --

#[tokio::test]
async fn route_fetches_and_parses_first_route() {
    let (base, request_line) = serve_once("200 OK", ROUTE_BODY).await;
    let client = client_for(&base);

    let route = client
        .route(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::Walking))
        .await
        .unwrap();
    assert_eq!(route.geometry.len(), 2);
    assert_eq!(route.steps[0].instruction, "Walk west");

    let line = request_line.await.unwrap();
    assert!(line.starts_with("GET /directions/v5/mapbox/walking/"));
    assert!(line.contains("geometries=geojson"));
    assert!(line.contains("access_token=pk.test-token"));
}

#[tokio::test]
async fn unauthorized_is_api_error() {
    let (base, _rx) = serve_once("401 Unauthorized", r#"{"message":"Not Authorized - Invalid Token"}"#).await;
    let client = client_for(&base);

    let err = client
        .route(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::Driving))
        .await
        .unwrap_err();
    match err {
        DirectionsError::ApiError(msg) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("Invalid Token"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let (base, _rx) = serve_once("429 Too Many Requests", "{}").await;
    let client = client_for(&base);

    let err = client
        .route(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::Driving))
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::RateLimited));
}

#[tokio::test]
async fn empty_route_list_is_no_route() {
    let (base, _rx) = serve_once("200 OK", r#"{"code":"NoRoute","routes":[]}"#).await;
    let client = client_for(&base);

    let err = client
        .route(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::Cycling))
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::NoRoute(_)));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Bind then drop to get a port with no listener.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(&format!("http://{addr}/directions/v5/mapbox"));

    let err = client
        .route(&DirectionsRequest::new(PARKING, ENTRANCE, Profile::Driving))
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::NetworkError(_)));
    assert!(!err.to_string().contains("pk.test-token"));
}
