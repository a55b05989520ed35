//! Wire schema of the score event.
//!
//! Field names and nesting here are the external contract. Serialization
//! follows declaration order, so the document layout is fixed.

use serde::Serialize;

/// A complete `score_set` event document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEvent {
    /// Versioned schema identifier.
    pub schema: &'static str,
    /// Event type.
    pub event: &'static str,
    /// Unix timestamp of the play, in seconds.
    pub timestamp: u64,
    /// Result of the play.
    pub score: ScoreSection,
    /// Modifiers in effect.
    pub mods: ModsSection,
    /// Difficulty the play was made at.
    pub difficulty: DifficultySection,
    /// The played beatmap.
    pub beatmap: BeatmapSection,
    /// The player.
    pub player: PlayerSection,
}

/// `score` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSection {
    /// Letter grade token.
    pub grade: &'static str,
    /// Raw score value.
    pub value: u64,
    /// Awarded performance points.
    pub pp: f64,
    /// Performance points as a full combo.
    pub pp_fc: f64,
    /// Performance points of a perfect play.
    pub pp_max: f64,
    /// Accuracy percentage.
    pub accuracy: f32,
    /// Combo summary.
    pub combo: Combo,
    /// Judgement counts.
    pub hits: Hits,
    /// Unstable rate.
    pub unstable_rate: f32,
    /// Average hit error extremes.
    pub hit_error: HitError,
    /// Legacy-format score.
    pub legacy: bool,
    /// Imported from a legacy database.
    pub unranked: bool,
}

/// `score.combo` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Combo {
    /// Highest combo reached.
    pub max: i32,
    /// Highest combo the map allows.
    pub map_max: i32,
    /// Full combo flag.
    pub perfect: bool,
}

/// `score.hits` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hits {
    /// 300s.
    #[serde(rename = "300")]
    pub n300: i32,
    /// 100s.
    #[serde(rename = "100")]
    pub n100: i32,
    /// 50s.
    #[serde(rename = "50")]
    pub n50: i32,
    /// Gekis.
    pub geki: i32,
    /// Katus.
    pub katu: i32,
    /// Misses.
    pub miss: i32,
    /// Slider breaks.
    pub slider_breaks: i32,
}

/// `score.hit_error` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitError {
    /// Lowest average hit error.
    pub min: f32,
    /// Highest average hit error.
    pub max: f32,
}

/// `mods` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModsSection {
    /// Legacy modifier bit-set.
    pub legacy: u32,
    /// Rendered modifier string.
    pub string: String,
    /// Experimental modifier configuration.
    pub experimental: String,
}

/// `difficulty` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultySection {
    /// Map attributes at play time.
    pub attributes: Attributes,
    /// Star ratings.
    pub stars: Stars,
    /// Playback speed multiplier.
    pub speed_multiplier: f32,
}

/// `difficulty.attributes` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attributes {
    /// Approach rate.
    pub ar: f32,
    /// Circle size.
    pub cs: f32,
    /// Overall difficulty.
    pub od: f32,
    /// HP drain.
    pub hp: f32,
}

/// `difficulty.stars` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stars {
    /// Total star rating.
    pub total: f64,
    /// Aim star rating.
    pub aim: f64,
    /// Speed star rating.
    pub speed: f64,
}

/// `beatmap` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeatmapSection {
    /// MD5 digest of the beatmap file.
    pub md5: String,
    /// Song title.
    pub title: String,
    /// Song artist.
    pub artist: String,
    /// Mapper name.
    pub creator: String,
    /// Difficulty name.
    pub difficulty: String,
    /// Playable length in milliseconds.
    pub length_ms: u64,
    /// BPM summary.
    pub bpm: Bpm,
    /// Hit object counts.
    pub objects: Objects,
    /// Online ids.
    pub ids: Ids,
}

/// `beatmap.bpm` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bpm {
    /// Lowest BPM.
    pub min: i32,
    /// Highest BPM.
    pub max: i32,
    /// Most common BPM.
    pub common: i32,
}

/// `beatmap.objects` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Objects {
    /// Total hit objects.
    pub total: i32,
    /// Circles.
    pub circles: i32,
    /// Sliders.
    pub sliders: i32,
    /// Spinners.
    pub spinners: i32,
}

/// `beatmap.ids` object. Zero or negative values mean unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ids {
    /// Beatmap id.
    pub beatmap: i64,
    /// Beatmap set id.
    pub beatmapset: i64,
}

/// `player` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSection {
    /// Display name.
    pub name: String,
}
