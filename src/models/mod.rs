//! Input records supplied by the host application.
//!
//! This module provides:
//! - `ScoreRecord`: one completed play (tallies, timing, difficulty, mods)
//! - `BeatmapMetadata`: identity and descriptive data of the played map
//! - `DerivedScoreExtras`: values the host computes but does not store on the score
//! - `Grade`: the closed letter-grade classification
//! - `Text`: free-form text in whatever encoding the host holds it
//!
//! All records are read-only inputs to the event builder.

mod beatmap;
mod grade;
mod score;
mod text;

// Re-export public API
pub use beatmap::BeatmapMetadata;
pub use grade::Grade;
pub use score::{DerivedScoreExtras, PlayRecord, ScoreRecord};
pub use text::Text;
