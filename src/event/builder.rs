//! Score event construction.

use log::trace;

use super::schema::{
    Attributes, BeatmapSection, Bpm, Combo, DifficultySection, HitError, Hits, Ids, ModsSection,
    Objects, PlayerSection, ScoreEvent, ScoreSection, Stars,
};
use crate::config::{EVENT_SCORE_SET, SCHEMA_ID};
use crate::models::{BeatmapMetadata, DerivedScoreExtras, ScoreRecord};

/// Builds the `score_set` event for a completed play.
///
/// Pure and total: every legal input produces an event, identical inputs
/// produce identical events, and the timestamp is the score's own. Free-form
/// text is normalized to UTF-8 here. Sentinel beatmap ids are passed through.
///
/// # Arguments
///
/// * `score` - The play
/// * `beatmap` - The played beatmap
/// * `extras` - Grade, accuracy and other values derived by the host
pub fn build_score_event(
    score: &ScoreRecord,
    beatmap: &BeatmapMetadata,
    extras: &DerivedScoreExtras,
) -> ScoreEvent {
    if !beatmap.is_submitted() {
        trace!(
            "Building event for unsubmitted beatmap {} (ids {}/{})",
            beatmap.md5_hash,
            beatmap.beatmap_id,
            beatmap.beatmap_set_id
        );
    }

    ScoreEvent {
        schema: SCHEMA_ID,
        event: EVENT_SCORE_SET,
        timestamp: score.unix_timestamp,
        score: score_section(score, extras),
        mods: ModsSection {
            legacy: score.mods_legacy,
            string: extras.mod_string.clone(),
            experimental: score.experimental_mods.normalize(),
        },
        difficulty: DifficultySection {
            attributes: Attributes {
                ar: score.ar,
                cs: score.cs,
                od: score.od,
                hp: score.hp,
            },
            stars: Stars {
                total: score.stars_total,
                aim: score.stars_aim,
                speed: score.stars_speed,
            },
            speed_multiplier: score.speed_multiplier,
        },
        beatmap: beatmap_section(beatmap),
        player: PlayerSection {
            name: score.player_name.normalize(),
        },
    }
}

/// Builds the event and serializes it to a JSON string.
///
/// # Errors
///
/// Returns a `serde_json::Error` only if serialization itself fails, which the
/// event schema (string keys, plain values) does not allow in practice.
pub fn build_score_json(
    score: &ScoreRecord,
    beatmap: &BeatmapMetadata,
    extras: &DerivedScoreExtras,
) -> Result<String, serde_json::Error> {
    build_score_event(score, beatmap, extras).to_json()
}

impl ScoreEvent {
    /// Serializes the event to a compact JSON string.
    ///
    /// # Errors
    ///
    /// See [`build_score_json`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn score_section(score: &ScoreRecord, extras: &DerivedScoreExtras) -> ScoreSection {
    ScoreSection {
        grade: extras.grade.as_str(),
        value: score.score,
        pp: score.pp,
        pp_fc: extras.pp_fc,
        pp_max: extras.pp_max,
        accuracy: extras.accuracy,
        combo: Combo {
            max: score.combo_max,
            map_max: score.max_possible_combo,
            perfect: score.perfect,
        },
        hits: Hits {
            n300: score.num_300s,
            n100: score.num_100s,
            n50: score.num_50s,
            geki: score.num_gekis,
            katu: score.num_katus,
            miss: score.num_misses,
            slider_breaks: score.num_slider_breaks,
        },
        unstable_rate: score.unstable_rate,
        hit_error: HitError {
            min: score.hit_error_avg_min,
            max: score.hit_error_avg_max,
        },
        legacy: score.is_legacy_score,
        unranked: score.is_imported_legacy_score,
    }
}

fn beatmap_section(beatmap: &BeatmapMetadata) -> BeatmapSection {
    BeatmapSection {
        md5: beatmap.md5_hash.clone(),
        title: beatmap.title.normalize(),
        artist: beatmap.artist.normalize(),
        creator: beatmap.creator.normalize(),
        difficulty: beatmap.difficulty_name.normalize(),
        length_ms: beatmap.length_ms,
        bpm: Bpm {
            min: beatmap.min_bpm,
            max: beatmap.max_bpm,
            common: beatmap.most_common_bpm,
        },
        objects: Objects {
            total: beatmap.num_objects,
            circles: beatmap.num_circles,
            sliders: beatmap.num_sliders,
            spinners: beatmap.num_spinners,
        },
        ids: Ids {
            beatmap: beatmap.beatmap_id,
            beatmapset: beatmap.beatmap_set_id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, Text};
    use serde_json::Value;
    use strum::IntoEnumIterator;

    fn sample_score() -> ScoreRecord {
        ScoreRecord {
            score: 9_876_543,
            pp: 312.5,
            combo_max: 1000,
            max_possible_combo: 1000,
            perfect: true,
            num_300s: 980,
            num_100s: 20,
            num_gekis: 150,
            num_katus: 12,
            unstable_rate: 82.25,
            hit_error_avg_min: -11.5,
            hit_error_avg_max: 9.75,
            ar: 9.0,
            cs: 4.0,
            od: 8.5,
            hp: 6.0,
            stars_total: 5.81,
            stars_aim: 2.9,
            stars_speed: 2.6,
            speed_multiplier: 1.0,
            mods_legacy: 8,
            experimental_mods: Text::from("fposu_mod_strafing"),
            player_name: Text::from("WhiteCat"),
            unix_timestamp: 1_700_000_000,
            ..Default::default()
        }
    }

    fn sample_beatmap() -> BeatmapMetadata {
        BeatmapMetadata {
            md5_hash: "8b1b5d8a2f2f0e0c9f1f2d3e4a5b6c7d".to_string(),
            title: Text::from("Blue Zenith"),
            artist: Text::from("xi"),
            creator: Text::from("Asphyxia"),
            difficulty_name: Text::from("FOUR DIMENSIONS"),
            length_ms: 211_000,
            min_bpm: 200,
            max_bpm: 200,
            most_common_bpm: 200,
            num_objects: 1416,
            num_circles: 1100,
            num_sliders: 314,
            num_spinners: 2,
            beatmap_id: 658127,
            beatmap_set_id: 292301,
        }
    }

    fn sample_extras() -> DerivedScoreExtras {
        DerivedScoreExtras {
            grade: Grade::SS,
            accuracy: 98.67,
            pp_fc: 312.5,
            pp_max: 340.0,
            mod_string: "HD".to_string(),
        }
    }

    fn to_value(event: &ScoreEvent) -> Value {
        serde_json::from_str(&event.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_top_level_identity() {
        let event = build_score_event(&sample_score(), &sample_beatmap(), &sample_extras());
        let doc = to_value(&event);

        assert_eq!(doc["schema"], "mcosu.events.score.v1");
        assert_eq!(doc["event"], "score_set");
        assert_eq!(doc["timestamp"], 1_700_000_000u64);
    }

    #[test]
    fn test_full_combo_example() {
        let event = build_score_event(&sample_score(), &sample_beatmap(), &sample_extras());
        let doc = to_value(&event);

        assert_eq!(doc["score"]["combo"]["perfect"], true);
        assert_eq!(doc["score"]["combo"]["max"], 1000);
        assert_eq!(doc["score"]["combo"]["map_max"], 1000);
        assert_eq!(doc["score"]["hits"]["300"], 980);
        assert_eq!(doc["score"]["hits"]["100"], 20);
        assert_eq!(doc["score"]["hits"]["50"], 0);
        assert_eq!(doc["score"]["hits"]["miss"], 0);
        assert_eq!(doc["score"]["grade"], "X");
    }

    #[test]
    fn test_build_is_deterministic() {
        let (score, beatmap, extras) = (sample_score(), sample_beatmap(), sample_extras());
        let first = build_score_json(&score, &beatmap, &extras).unwrap();
        let second = build_score_json(&score, &beatmap, &extras).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_grade_builds() {
        for grade in Grade::iter() {
            let extras = DerivedScoreExtras {
                grade,
                ..sample_extras()
            };
            let event = build_score_event(&sample_score(), &sample_beatmap(), &extras);
            assert_eq!(event.score.grade, grade.as_str());
        }
    }

    #[test]
    fn test_sentinel_ids_pass_through() {
        let beatmap = BeatmapMetadata {
            beatmap_id: 0,
            beatmap_set_id: -1,
            ..sample_beatmap()
        };
        let doc = to_value(&build_score_event(
            &sample_score(),
            &beatmap,
            &sample_extras(),
        ));
        assert_eq!(doc["beatmap"]["ids"]["beatmap"], 0);
        assert_eq!(doc["beatmap"]["ids"]["beatmapset"], -1);
    }

    #[test]
    fn test_default_inputs_build() {
        let event = build_score_event(
            &ScoreRecord::default(),
            &BeatmapMetadata::default(),
            &DerivedScoreExtras::default(),
        );
        assert_eq!(event.score.grade, "N");
        assert_eq!(event.beatmap.title, "");
        assert!(event.to_json().is_ok());
    }

    #[test]
    fn test_text_fields_are_normalized() {
        let beatmap = BeatmapMetadata {
            title: Text::Bytes(vec![0x43, 0x61, 0x66, 0xE9]),
            artist: Text::Wide("ずっと真夜中でいいのに。".encode_utf16().collect()),
            creator: Text::from("map\x1fper"),
            ..sample_beatmap()
        };
        let score = ScoreRecord {
            player_name: Text::Wide("Игрок".encode_utf16().collect()),
            ..sample_score()
        };
        let event = build_score_event(&score, &beatmap, &sample_extras());

        assert_eq!(event.beatmap.title, "Café");
        assert_eq!(event.beatmap.artist, "ずっと真夜中でいいのに。");
        assert_eq!(event.beatmap.creator, "map\u{1f}per");
        assert_eq!(event.player.name, "Игрок");

        // Control characters survive as JSON escapes
        let json = event.to_json().unwrap();
        assert!(json.contains(r#""creator":"map\u001fper""#));
    }

    #[test]
    fn test_section_order() {
        let json = build_score_json(&sample_score(), &sample_beatmap(), &sample_extras()).unwrap();
        let positions: Vec<usize> = [
            "\"schema\"",
            "\"event\"",
            "\"timestamp\"",
            "\"score\"",
            "\"mods\"",
            "\"difficulty\"",
            "\"beatmap\"",
            "\"player\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
