//! Error categorization.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Timeouts are checked first because reqwest reports a connect timeout as
/// both a timeout and a connect error.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FailureKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_builder() {
        FailureKind::Builder
    } else if error.is_body() {
        FailureKind::Body
    } else if error.is_request() {
        FailureKind::Request
    } else {
        FailureKind::Other
    }
}
