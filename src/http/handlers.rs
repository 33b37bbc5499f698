//! Route handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{HeaderMap, Uri},
    response::{Html, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

use crate::http::error::RelayError;
use crate::http::request::request_id;
use crate::http::response::csv_response;
use crate::http::server::AppState;
use crate::sources::SourceError;

/// Health payload. Independent of upstream state.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/labor-data/{id}`: relay one upstream CSV.
pub async fn relay_labor_data(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let start = Instant::now();
    let request_id = request_id(&headers);

    // An id that does not decode (e.g. invalid UTF-8) is reported in its raw form.
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            let raw = uri.path().rsplit('/').next().unwrap_or_default().to_string();
            tracing::warn!(
                request_id = %request_id,
                id = %raw,
                error = %rejection.body_text(),
                "Rejected undecodable data type"
            );
            return Err(SourceError::UnknownSource(raw).into());
        }
    };

    let (source, url) = state.sources.resolve(&id).map_err(|e| {
        tracing::warn!(request_id = %request_id, id = %id, "Rejected unsupported data type");
        e
    })?;

    tracing::info!(request_id = %request_id, source = %source, url = %url, "Relaying request");

    let body = state.upstream.fetch(url).await.map_err(|e| {
        tracing::error!(request_id = %request_id, source = %source, error = %e, "Proxy request failed");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        source = %source,
        bytes = body.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Relayed upstream data"
    );

    Ok(csv_response(body, state.cache_max_age_secs))
}

/// `GET /api/health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        message: "relay is running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.to_string())
}
