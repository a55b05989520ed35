// Shared fixtures for the integration tests.
//
// Each test file includes this module, so not every helper is used everywhere.

#![allow(dead_code)]

use score_events::{BeatmapMetadata, DerivedScoreExtras, Grade, ScoreRecord, Text};

/// A full-combo SS play with HD.
pub fn full_combo_score() -> ScoreRecord {
    ScoreRecord {
        score: 12_345_678,
        pp: 287.41,
        combo_max: 1000,
        max_possible_combo: 1000,
        perfect: true,
        num_300s: 980,
        num_100s: 20,
        num_50s: 0,
        num_gekis: 211,
        num_katus: 14,
        num_misses: 0,
        num_slider_breaks: 0,
        unstable_rate: 91.5,
        hit_error_avg_min: -14.25,
        hit_error_avg_max: 12.5,
        ar: 9.3,
        cs: 4.2,
        od: 8.8,
        hp: 5.0,
        stars_total: 5.92,
        stars_aim: 2.95,
        stars_speed: 2.71,
        speed_multiplier: 1.0,
        mods_legacy: 8,
        experimental_mods: Text::from(""),
        player_name: Text::from("McOsuPlayer"),
        unix_timestamp: 1_712_345_678,
        is_legacy_score: false,
        is_imported_legacy_score: false,
    }
}

/// A submitted map with plain ASCII metadata.
pub fn ranked_beatmap() -> BeatmapMetadata {
    BeatmapMetadata {
        md5_hash: "3c6e0b8a9c15224a8228b9a98ca1531d".to_string(),
        title: Text::from("Harumachi Clover"),
        artist: Text::from("Hanasaka Yui (CV: M.A.O)"),
        creator: Text::from("Sotarks"),
        difficulty_name: Text::from("Expert"),
        length_ms: 84_000,
        min_bpm: 182,
        max_bpm: 182,
        most_common_bpm: 182,
        num_objects: 546,
        num_circles: 301,
        num_sliders: 244,
        num_spinners: 1,
        beatmap_id: 1_859_207,
        beatmap_set_id: 859_916,
    }
}

/// The same map with its metadata in Japanese and unknown online ids.
pub fn unsubmitted_japanese_beatmap() -> BeatmapMetadata {
    BeatmapMetadata {
        title: Text::from("春待ちクローバー"),
        artist: Text::Wide("花坂結衣（CV：M・A・O）".encode_utf16().collect()),
        creator: Text::Bytes("ソタークス".as_bytes().to_vec()),
        beatmap_id: 0,
        beatmap_set_id: -1,
        ..ranked_beatmap()
    }
}

/// Extras matching `full_combo_score`.
pub fn ss_extras() -> DerivedScoreExtras {
    DerivedScoreExtras {
        grade: Grade::SS,
        accuracy: 98.67,
        pp_fc: 287.41,
        pp_max: 301.2,
        mod_string: "HD".to_string(),
    }
}
