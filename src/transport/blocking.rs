//! Blocking event transport.

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::report_outcome;
use crate::config::{TransportConfig, JSON_CONTENT_TYPE};
use crate::error_handling::{InitializationError, PostError};
use crate::event::build_score_json;
use crate::initialization::init_blocking_client;
use crate::models::{BeatmapMetadata, DerivedScoreExtras, ScoreRecord};

/// Blocking counterpart of [`EventTransport`](super::EventTransport).
///
/// Each post blocks the calling thread for at most the request timeout.
/// Construct, use and drop it outside any async runtime context, or from
/// `tokio::task::spawn_blocking`.
#[derive(Debug, Clone)]
pub struct BlockingEventTransport {
    client: reqwest::blocking::Client,
}

impl BlockingEventTransport {
    /// Creates a transport with the given timeouts and user agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn new(config: &TransportConfig) -> Result<Self, InitializationError> {
        let client = init_blocking_client(config)?;
        debug!(
            "Blocking event transport ready (connect timeout {:?}, request timeout {:?})",
            config.connect_timeout, config.request_timeout
        );
        Ok(Self { client })
    }

    /// Posts a JSON document, returning the response status on success.
    ///
    /// # Errors
    ///
    /// Returns a `PostError` on any client-side failure. Error statuses are
    /// not errors.
    pub fn try_post(&self, url: &str, document: &str) -> Result<StatusCode, PostError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(document.to_owned())
            .send()?;
        Ok(response.status())
    }

    /// Posts a JSON document once. Returns `true` if the exchange completed.
    pub fn post(&self, url: &str, document: &str) -> bool {
        report_outcome(url, self.try_post(url, document))
    }

    /// Builds the score event and posts it.
    pub fn post_score(
        &self,
        url: &str,
        score: &ScoreRecord,
        beatmap: &BeatmapMetadata,
        extras: &DerivedScoreExtras,
    ) -> bool {
        match build_score_json(score, beatmap, extras) {
            Ok(document) => self.post(url, &document),
            Err(e) => {
                debug!("Score event for {} could not be encoded: {e}", beatmap.md5_hash);
                false
            }
        }
    }

    /// Releases the transport.
    ///
    /// Dropping the value is the release: the client's background thread
    /// stops once its last clone is dropped. This only marks the end of the
    /// lifecycle explicitly, mirroring [`EventTransport::shutdown`](super::EventTransport::shutdown).
    pub fn shutdown(self) {
        debug!("Blocking event transport shut down");
    }
}
