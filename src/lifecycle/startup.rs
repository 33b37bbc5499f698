//! Startup orchestration.
//!
//! # Responsibilities
//! - Define the errors that abort startup
//! - Announce the listening address and the available endpoints
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::ConfigError;
use crate::http::response::{DATA_ROUTE_PREFIX, HEALTH_ROUTE};
use crate::sources::{SourceError, SourceTable};
use crate::upstream::UpstreamError;

/// Errors that prevent the relay from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid upstream base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Sources(#[from] SourceError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Log one line per dataset endpoint plus the health endpoint.
pub fn announce_endpoints(addr: SocketAddr, sources: &SourceTable) {
    for (source, upstream) in sources.iter() {
        tracing::info!(
            endpoint = %format!("http://{addr}{DATA_ROUTE_PREFIX}/{}", source.code()),
            upstream = %upstream,
            "{}",
            source.title()
        );
    }
    tracing::info!(endpoint = %format!("http://{addr}{HEALTH_ROUTE}"), "Health check");
}
