//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the source table and upstream client once
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, timeout, request ID, tracing)
//! - Serve on a listener until shutdown is signalled

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use url::Url;

use crate::config::RelayConfig;
use crate::http::handlers::{health, index, relay_labor_data};
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::response::{render_index, DATA_ROUTE_PREFIX, HEALTH_ROUTE};
use crate::lifecycle::startup::StartupError;
use crate::sources::SourceTable;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sources: Arc<SourceTable>,
    pub upstream: UpstreamClient,
    pub cache_max_age_secs: Option<u64>,
    pub index_html: Arc<str>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    sources: Arc<SourceTable>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, StartupError> {
        let base = Url::parse(&config.upstream.base_url).map_err(|source| {
            StartupError::BaseUrl {
                url: config.upstream.base_url.clone(),
                source,
            }
        })?;
        let sources = Arc::new(SourceTable::new(&base)?);
        let upstream = UpstreamClient::new(&config.upstream)?;

        let state = AppState {
            sources: sources.clone(),
            upstream,
            cache_max_age_secs: Some(config.response.cache_max_age_secs).filter(|secs| *secs > 0),
            index_html: render_index(&sources).into(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, sources })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);

        Router::new()
            .route("/", get(index))
            .route(HEALTH_ROUTE, get(health))
            .route(&format!("{DATA_ROUTE_PREFIX}/{{id}}"), get(relay_labor_data))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(cors)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn sources(&self) -> &SourceTable {
        &self.sources
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
