//! Score records and the values derived from them.

use serde::Deserialize;

use super::{BeatmapMetadata, Grade, Text};

/// Immutable snapshot of one completed play.
///
/// Numeric fields are expected to be finite. The event builder copies them
/// through unchanged, so a NaN here is a defect of whoever produced the record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreRecord {
    /// Raw score value.
    pub score: u64,
    /// Performance points awarded for the play.
    pub pp: f64,

    /// Highest combo reached.
    pub combo_max: i32,
    /// Highest combo the map allows.
    pub max_possible_combo: i32,
    /// Whether the play was a full combo with no misses or slider breaks.
    pub perfect: bool,

    /// Hits judged 300.
    pub num_300s: i32,
    /// Hits judged 100.
    pub num_100s: i32,
    /// Hits judged 50.
    pub num_50s: i32,
    /// Geki hits (300s completing a combo).
    pub num_gekis: i32,
    /// Katu hits (100s completing a combo).
    pub num_katus: i32,
    /// Misses.
    pub num_misses: i32,
    /// Slider breaks.
    pub num_slider_breaks: i32,

    /// Unstable rate (scaled standard deviation of hit errors).
    pub unstable_rate: f32,
    /// Lowest average hit error, in milliseconds.
    pub hit_error_avg_min: f32,
    /// Highest average hit error, in milliseconds.
    pub hit_error_avg_max: f32,

    /// Approach rate at play time.
    pub ar: f32,
    /// Circle size at play time.
    pub cs: f32,
    /// Overall difficulty at play time.
    pub od: f32,
    /// HP drain at play time.
    pub hp: f32,
    /// Total star rating.
    pub stars_total: f64,
    /// Aim star rating.
    pub stars_aim: f64,
    /// Speed star rating.
    pub stars_speed: f64,
    /// Playback speed multiplier (1.5 for DT, 0.75 for HT).
    pub speed_multiplier: f32,

    /// Legacy modifier bit-set.
    pub mods_legacy: u32,
    /// Experimental modifier configuration, as host text.
    pub experimental_mods: Text,

    /// Player display name.
    pub player_name: Text,
    /// Unix timestamp of the play, in seconds.
    pub unix_timestamp: u64,

    /// Score stored in the legacy format.
    pub is_legacy_score: bool,
    /// Score imported from a legacy database (never ranked by this client).
    pub is_imported_legacy_score: bool,
}

/// Values computed by the host from a score but not stored on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DerivedScoreExtras {
    /// Letter grade.
    pub grade: Grade,
    /// Accuracy, as a percentage.
    pub accuracy: f32,
    /// Performance points had the play been a full combo.
    pub pp_fc: f64,
    /// Performance points of a perfect play on the map with the same mods.
    pub pp_max: f64,
    /// Rendered modifier string (e.g. "HDDT").
    pub mod_string: String,
}

/// A score together with the beatmap and derived values needed to report it.
///
/// This is the on-disk form read by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayRecord {
    /// The play itself.
    pub score: ScoreRecord,
    /// The played beatmap.
    pub beatmap: BeatmapMetadata,
    /// Derived values.
    #[serde(default)]
    pub extras: DerivedScoreExtras,
}
