//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and posting
//! - Categorization of HTTP client errors into `FailureKind`
//!
//! A failed post is reported to callers as `false`. The categories only exist
//! so the log says why.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FailureKind, InitializationError, PostError};
