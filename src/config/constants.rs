//! Configuration constants.
//!
//! This module defines the wire identifiers of the score event and the
//! default transport limits.

use std::time::Duration;

// Event identity
/// Versioned schema identifier carried in every event.
/// Consumers key on this value, so any change to field names or nesting
/// needs a new version suffix.
pub const SCHEMA_ID: &str = "mcosu.events.score.v1";
/// Event type of a completed play.
pub const EVENT_SCORE_SET: &str = "score_set";

// Network operation timeouts
/// TCP connection timeout in milliseconds
pub const CONNECT_TIMEOUT_MS: u64 = 500;
/// Total request timeout in milliseconds (connect + send + response headers)
/// Kept under a second so a post never stalls its caller noticeably
pub const REQUEST_TIMEOUT_MS: u64 = 1000;

/// Default connect timeout as a `Duration`.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(CONNECT_TIMEOUT_MS);
/// Default total request timeout as a `Duration`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(REQUEST_TIMEOUT_MS);

/// Media type of the request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Default User-Agent string for event posts.
pub const DEFAULT_USER_AGENT: &str = concat!("score_events/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the endpoint URL for the CLI.
pub const ENDPOINT_ENV_VAR: &str = "SCORE_EVENTS_URL";
