//! HTTP client initialization.
//!
//! This module provides functions to build the HTTP clients used by the
//! event transports, with both timeouts applied.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::TransportConfig;

/// Initializes the async HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the transport config
/// - Connect timeout (TCP connection establishment)
/// - Total timeout (whole request, including the response headers)
///
/// Redirects are not followed: the event is posted to exactly one URL.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &TransportConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the blocking HTTP client.
///
/// Same settings as [`init_client`]. Must not be called from within an async
/// runtime context; reqwest's blocking client runs its own.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_blocking_client(
    config: &TransportConfig,
) -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .build()
}
