//! Best-effort delivery of score events.
//!
//! This module provides:
//! - `EventTransport`: async transport with tracked fire-and-forget posts
//! - `BlockingEventTransport`: the same contract for hosts without a runtime
//!
//! A transport is the lifecycle bracket around posting: construct it once at
//! startup, drop or shut it down once at exit. A post reports `true` when the
//! HTTP exchange completed, whatever status the server answered with, and
//! `false` on any client-side failure. Nothing is retried.

mod blocking;
mod client;

use log::debug;
use reqwest::StatusCode;

use crate::error_handling::PostError;

// Re-export public API
pub use blocking::BlockingEventTransport;
pub use client::EventTransport;

/// Collapses a post result into the boolean delivery signal, logging the outcome.
fn report_outcome(url: &str, result: Result<StatusCode, PostError>) -> bool {
    match result {
        Ok(status) => {
            debug!("Score event delivered to {url} (status {status})");
            true
        }
        Err(e) => {
            debug!("Score event not delivered to {url} [{}]: {e}", e.kind.as_str());
            false
        }
    }
}
