//! score_events library: osu! score events over HTTP
//!
//! Builds the versioned `score_set` JSON document for a completed play and
//! posts it to an HTTP endpoint, best-effort. Delivery is advisory telemetry:
//! a post is bounded by short timeouts, is never retried, and reports only
//! whether the exchange completed.
//!
//! # Example
//!
//! ```no_run
//! use score_events::{
//!     build_score_json, BeatmapMetadata, DerivedScoreExtras, EventTransport, Grade,
//!     ScoreRecord, TransportConfig,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let score = ScoreRecord {
//!     num_300s: 980,
//!     num_100s: 20,
//!     combo_max: 1000,
//!     max_possible_combo: 1000,
//!     perfect: true,
//!     ..Default::default()
//! };
//! let beatmap = BeatmapMetadata::default();
//! let extras = DerivedScoreExtras {
//!     grade: Grade::SS,
//!     ..Default::default()
//! };
//!
//! let document = build_score_json(&score, &beatmap, &extras)?;
//!
//! let transport = EventTransport::new(&TransportConfig::default())?;
//! transport.spawn_post("http://127.0.0.1:8080/events", document);
//! transport.shutdown().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `EventTransport` requires a Tokio runtime. Hosts without one use
//! `BlockingEventTransport`.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod event;
pub mod initialization;
pub mod models;
pub mod transport;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, TransportConfig};
pub use error_handling::{FailureKind, InitializationError, PostError};
pub use event::{build_score_event, build_score_json, ScoreEvent};
pub use models::{BeatmapMetadata, DerivedScoreExtras, Grade, PlayRecord, ScoreRecord, Text};
pub use transport::{BlockingEventTransport, EventTransport};
