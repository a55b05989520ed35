//! Async event transport.

use std::sync::Arc;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;

use super::report_outcome;
use crate::config::{TransportConfig, JSON_CONTENT_TYPE};
use crate::error_handling::{InitializationError, PostError};
use crate::event::build_score_json;
use crate::initialization::init_client;
use crate::models::{BeatmapMetadata, DerivedScoreExtras, ScoreRecord};

/// Posts score events over a shared, pooled HTTP client.
///
/// `new` and `shutdown` bracket the transport's lifetime. Posts borrow the
/// transport, so none can be awaited after `shutdown` has taken it, and
/// `shutdown` waits for every post started with `spawn_post`.
///
/// # Examples
///
/// ```no_run
/// use score_events::{EventTransport, TransportConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = EventTransport::new(&TransportConfig::default())?;
/// let delivered = transport
///     .post("http://127.0.0.1:8080/events", r#"{"event":"score_set"}"#)
///     .await;
/// println!("delivered: {delivered}");
/// transport.shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventTransport {
    client: Arc<reqwest::Client>,
    tracker: TaskTracker,
}

impl EventTransport {
    /// Creates a transport with the given timeouts and user agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built (e.g. the TLS backend fails to initialize).
    pub fn new(config: &TransportConfig) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        debug!(
            "Event transport ready (connect timeout {:?}, request timeout {:?})",
            config.connect_timeout, config.request_timeout
        );
        Ok(Self {
            client,
            tracker: TaskTracker::new(),
        })
    }

    /// Posts a JSON document, returning the response status on success.
    ///
    /// The response body is never read.
    ///
    /// # Errors
    ///
    /// Returns a `PostError` on any client-side failure (invalid URL, DNS,
    /// connect, timeout, transport). Error statuses are not errors.
    pub async fn try_post(&self, url: &str, document: &str) -> Result<StatusCode, PostError> {
        send_document(&self.client, url, document.to_owned()).await
    }

    /// Posts a JSON document once. Returns `true` if the exchange completed.
    pub async fn post(&self, url: &str, document: &str) -> bool {
        report_outcome(url, self.try_post(url, document).await)
    }

    /// Builds the score event and posts it.
    pub async fn post_score(
        &self,
        url: &str,
        score: &ScoreRecord,
        beatmap: &BeatmapMetadata,
        extras: &DerivedScoreExtras,
    ) -> bool {
        match build_score_json(score, beatmap, extras) {
            Ok(document) => self.post(url, &document).await,
            Err(e) => {
                debug!("Score event for {} could not be encoded: {e}", beatmap.md5_hash);
                false
            }
        }
    }

    /// Posts a JSON document on a background task.
    ///
    /// The task is tracked: `shutdown` waits for it. The handle may be
    /// dropped to forget the outcome.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_post(
        &self,
        url: impl Into<String>,
        document: impl Into<String>,
    ) -> JoinHandle<bool> {
        let client = Arc::clone(&self.client);
        let url = url.into();
        let document = document.into();
        self.tracker.spawn(async move {
            let result = send_document(&client, &url, document).await;
            report_outcome(&url, result)
        })
    }

    /// Number of spawned posts still running.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Releases the transport after every spawned post has finished.
    ///
    /// Each post is bounded by the request timeout, so this returns within
    /// that bound once called.
    pub async fn shutdown(self) {
        self.tracker.close();
        let pending = self.tracker.len();
        if pending > 0 {
            debug!("Waiting for {pending} in-flight score event post(s)");
        }
        self.tracker.wait().await;
        debug!("Event transport shut down");
    }
}

async fn send_document(
    client: &reqwest::Client,
    url: &str,
    document: String,
) -> Result<StatusCode, PostError> {
    let response = client
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(document)
        .send()
        .await?;
    Ok(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FailureKind;

    #[test]
    fn test_transport_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EventTransport>();
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_failure() {
        let transport = EventTransport::new(&TransportConfig::default()).unwrap();
        assert!(!transport.post("not a url", "{}").await);

        let err = transport.try_post("not a url", "{}").await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Builder);
        transport.shutdown().await;
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_failure() {
        let transport = EventTransport::new(&TransportConfig::default()).unwrap();
        assert!(!transport.post("http://127.0.0.1:1/events", "{}").await);
        transport.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_without_posts() {
        let transport = EventTransport::new(&TransportConfig::default()).unwrap();
        assert_eq!(transport.in_flight(), 0);
        transport.shutdown().await;
    }
}
