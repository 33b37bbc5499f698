//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check timeouts are ordered so the upstream gives up first
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::RelayConfig;
use crate::observability::logging::default_directive;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{0}' is not a valid URL")]
    BaseUrl(String),

    #[error("upstream.base_url scheme '{0}' is not http or https")]
    BaseUrlScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("upstream.connect_timeout_secs ({connect}) exceeds upstream.timeout_secs ({total})")]
    ConnectExceedsTotal { connect: u64, total: u64 },

    #[error("timeouts.request_secs ({inbound}) must exceed upstream.timeout_secs ({upstream})")]
    InboundNotAboveUpstream { inbound: u64, upstream: u64 },

    #[error("observability.log_level '{0}' is not a valid level")]
    LogLevel(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::BaseUrlScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::BaseUrl(config.upstream.base_url.clone())),
    }

    let upstream = &config.upstream;
    if upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if upstream.connect_timeout_secs > upstream.timeout_secs {
        errors.push(ValidationError::ConnectExceedsTotal {
            connect: upstream.connect_timeout_secs,
            total: upstream.timeout_secs,
        });
    }

    if config.timeouts.request_secs <= upstream.timeout_secs {
        errors.push(ValidationError::InboundNotAboveUpstream {
            inbound: config.timeouts.request_secs,
            upstream: upstream.timeout_secs,
        });
    }

    if EnvFilter::try_new(default_directive(&config.observability.log_level)).is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
