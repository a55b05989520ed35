//! Score event building.
//!
//! Turns a score, its beatmap and the host's derived values into the
//! versioned `score_set` document. No I/O and no state.

mod builder;
mod schema;

// Re-export public API
pub use builder::{build_score_event, build_score_json};
pub use schema::{
    Attributes, BeatmapSection, Bpm, Combo, DifficultySection, HitError, Hits, Ids, ModsSection,
    Objects, PlayerSection, ScoreEvent, ScoreSection, Stars,
};
