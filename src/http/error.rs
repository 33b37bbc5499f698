//! Mapping of relay failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::sources::SourceError;
use crate::upstream::UpstreamError;

pub const UNSUPPORTED_DATA_TYPE: &str = "unsupported data type";
pub const PROXY_REQUEST_FAILED: &str = "proxy request failed";

/// Errors surfaced to the caller of the data route.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Source(SourceError::UnknownSource(_)) => StatusCode::BAD_REQUEST,
            RelayError::Source(_) | RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            RelayError::Source(SourceError::UnknownSource(id)) => ErrorBody {
                error: UNSUPPORTED_DATA_TYPE.to_string(),
                id: Some(id.clone()),
                message: None,
            },
            other => {
                let description = other.to_string();
                ErrorBody {
                    error: format!("{PROXY_REQUEST_FAILED}: {description}"),
                    id: None,
                    message: Some(description),
                }
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
