//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, upstream client, lifecycle
//!     → tracing events (request_id, source, url, bytes)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every handler log line
//! - tower-http TraceLayer supplies per-request spans

pub mod logging;

pub use logging::init_logging;
