//! Upstream origin access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (GET with headers.rs set, timeout)
//!     → upstream host
//!     → decoded body bytes | UpstreamError
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt per inbound request; no retries, no failover
//! - Compressed bodies are decoded before relaying

pub mod client;
pub mod headers;

pub use client::{UpstreamClient, UpstreamError, UpstreamResult};
pub use headers::browser_headers;
