//! Response shaping.
//!
//! # Responsibilities
//! - Wrap relayed bytes with the CSV content type and CORS headers
//! - Render the index page listing the dataset endpoints
//!
//! # Design Decisions
//! - Relayed bytes are passed through untouched
//! - Cache-Control is only a hint to downstream caches

use axum::{
    body::{Body, Bytes},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_TYPE,
        },
        HeaderValue, StatusCode,
    },
    response::Response,
};

use crate::sources::SourceTable;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

pub const DATA_ROUTE_PREFIX: &str = "/api/labor-data";
pub const HEALTH_ROUTE: &str = "/api/health";

/// Build the 200 response carrying upstream CSV bytes.
pub fn csv_response(body: Bytes, cache_max_age_secs: Option<u64>) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    if let Some(max_age) = cache_max_age_secs {
        if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={max_age}")) {
            headers.insert(CACHE_CONTROL, value);
        }
    }

    response
}

/// Static HTML page listing every data endpoint and the health check.
pub fn render_index(table: &SourceTable) -> String {
    let mut items = String::new();
    for (source, _) in table.iter() {
        items.push_str(&format!(
            "        <li><a href=\"{DATA_ROUTE_PREFIX}/{code}\">{title}</a> <code>{code}</code></li>\n",
            code = source.code(),
            title = source.title(),
        ));
    }

    format!(
        "<!DOCTYPE html>
<html>
<head>
    <meta charset=\"utf-8\">
    <title>Labor Data Relay</title>
</head>
<body>
    <h1>Labor Data Relay</h1>
    <p>Available data endpoints:</p>
    <ul>
{items}    </ul>
    <p>Health check: <a href=\"{HEALTH_ROUTE}\">{HEALTH_ROUTE}</a></p>
</body>
</html>
"
    )
}
