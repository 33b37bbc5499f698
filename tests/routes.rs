//! In-process router tests (no upstream traffic).

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use labor_data_relay::config::RelayConfig;
use labor_data_relay::http::{HttpServer, X_REQUEST_ID};
use serde_json::Value;
use tower::ServiceExt;

fn router() -> axum::Router {
    let mut config = RelayConfig::default();
    config.upstream.use_system_proxy = false;
    HttpServer::new(config).unwrap().router()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let response = router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("/api/labor-data/a0101"));
    assert!(html.contains("/api/labor-data/a0201"));
    assert!(html.contains("/api/labor-data/a0901"));
    assert!(html.contains("/api/health"));
}

#[tokio::test]
async fn test_health_payload() {
    let response = router()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_id_is_bad_request() {
    let response = router()
        .oneshot(Request::get("/api/labor-data/b9999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["error"], "unsupported data type");
}

#[tokio::test]
async fn test_undecodable_id_is_bad_request_json() {
    let response = router()
        .oneshot(Request::get("/api/labor-data/%FF").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["error"], "unsupported data type");
    assert_eq!(json["id"], "%FF");
}

#[tokio::test]
async fn test_preflight_is_permissive() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/labor-data/a0101")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("GET"));
    assert!(methods.contains("OPTIONS"));
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("content-type"));
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let response = router()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = response.headers()[X_REQUEST_ID].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let response = router()
        .oneshot(
            Request::get("/api/health")
                .header(X_REQUEST_ID, "client-chosen-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[X_REQUEST_ID], "client-chosen-id");
}

#[tokio::test]
async fn test_unrouted_path_is_not_found() {
    let response = router()
        .oneshot(Request::get("/api/labor-data").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
