//! Beatmap identity and descriptive metadata.

use serde::Deserialize;

use super::Text;

/// Identity and descriptive data of the played beatmap.
///
/// `beatmap_id` and `beatmap_set_id` are zero or negative when the map is
/// unknown or was never submitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BeatmapMetadata {
    /// MD5 digest of the beatmap file, as 32 lowercase hex characters.
    pub md5_hash: String,

    /// Song title.
    pub title: Text,
    /// Song artist.
    pub artist: Text,
    /// Mapper name.
    pub creator: Text,
    /// Difficulty name.
    pub difficulty_name: Text,

    /// Playable length in milliseconds.
    pub length_ms: u64,

    /// Lowest BPM.
    pub min_bpm: i32,
    /// Highest BPM.
    pub max_bpm: i32,
    /// BPM covering the longest stretch of the map.
    pub most_common_bpm: i32,

    /// Total hit objects.
    pub num_objects: i32,
    /// Hit circles.
    pub num_circles: i32,
    /// Sliders.
    pub num_sliders: i32,
    /// Spinners.
    pub num_spinners: i32,

    /// Online beatmap id, `<= 0` if unknown.
    pub beatmap_id: i64,
    /// Online beatmap set id, `<= 0` if unknown.
    pub beatmap_set_id: i64,
}

impl BeatmapMetadata {
    /// Returns true if both online ids are known.
    pub fn is_submitted(&self) -> bool {
        self.beatmap_id > 0 && self.beatmap_set_id > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_submitted() {
        let mut beatmap = BeatmapMetadata {
            beatmap_id: 129891,
            beatmap_set_id: 39804,
            ..Default::default()
        };
        assert!(beatmap.is_submitted());

        beatmap.beatmap_id = 0;
        assert!(!beatmap.is_submitted());

        beatmap.beatmap_id = 129891;
        beatmap.beatmap_set_id = -1;
        assert!(!beatmap.is_submitted());
    }
}
