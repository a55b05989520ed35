//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Client-side reason a post did not complete.
///
/// Used for logging only: callers of `post` see a single failure signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Connect or total timeout elapsed.
    Timeout,
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// The request could not be sent.
    Request,
    /// The request body could not be written.
    Body,
    /// The request could not be built (e.g. malformed URL).
    Builder,
    /// Anything else reported by the HTTP client.
    Other,
}

impl FailureKind {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connect",
            FailureKind::Request => "request",
            FailureKind::Body => "body",
            FailureKind::Builder => "builder",
            FailureKind::Other => "other",
        }
    }
}

/// A post that failed on the client side.
///
/// Server responses, whatever their status, are never a `PostError`.
#[derive(Error, Debug)]
#[error("score event post failed ({label}): {source}", label = .kind.as_str())]
pub struct PostError {
    /// Category of the failure.
    pub kind: FailureKind,
    /// Underlying HTTP client error.
    #[source]
    pub source: ReqwestError,
}

impl From<ReqwestError> for PostError {
    fn from(source: ReqwestError) -> Self {
        let kind = super::categorize_reqwest_error(&source);
        PostError { kind, source }
    }
}
