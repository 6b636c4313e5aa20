//! Workout model - ordered exercise loops with sets and rest.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::de;
use crate::id::{ExerciseId, WorkoutId};
use crate::tempo::Tempo;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"));

/// Derive the URL slug for a title: lowercase, whitespace runs become `-`.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN.replace_all(&title.to_lowercase(), "-").into_owned()
}

/// A workout: a titled sequence of exercise loops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,

    /// Workout title, also the source of the slug
    pub title: String,

    /// Free-form tags such as difficulty level
    #[serde(default)]
    pub tags: Vec<String>,

    /// Description
    #[serde(default)]
    pub description: String,

    /// What the workout is good for
    #[serde(default)]
    pub benefits: Vec<String>,

    /// Loops in execution order; unreadable loops are dropped
    #[serde(default, deserialize_with = "de::readable_items")]
    pub exercise_loops: Vec<ExerciseLoop>,
}

impl Workout {
    /// Create an empty workout.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: WorkoutId::new(id),
            title: title.into(),
            tags: Vec::new(),
            description: String::new(),
            benefits: Vec::new(),
            exercise_loops: Vec::new(),
        }
    }

    /// Slug derived from the title.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Whether this workout answers to the given slug (case-insensitive).
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug() == slug.to_lowercase()
    }

    /// Every exercise id referenced by the workout, in execution order.
    pub fn exercise_ids(&self) -> impl Iterator<Item = &ExerciseId> {
        self.exercise_loops
            .iter()
            .flat_map(|l| l.exercises.iter())
            .map(|r| &r.id)
    }
}

/// A block of exercises performed back to back, repeated `sets` times.
///
/// When read from JSON, a loop must carry an exercise list. Non-numeric
/// `sets`/`rest` read as zero and fractional `sets` are truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLoop {
    /// Exercises performed in one set; null or malformed entries are dropped
    #[serde(alias = "exercices", deserialize_with = "de::readable_items")]
    pub exercises: Vec<ExerciseReference>,

    /// Number of sets; values below one are treated as one
    #[serde(default, deserialize_with = "de::integer")]
    pub sets: i64,

    /// Rest between consecutive sets, in seconds; negative is treated as zero
    #[serde(default, deserialize_with = "de::number")]
    pub rest: f64,
}

impl ExerciseLoop {
    /// Create a loop.
    pub fn new(exercises: Vec<ExerciseReference>, sets: i64, rest: f64) -> Self {
        Self { exercises, sets, rest }
    }
}

/// One exercise inside a loop with its prescription.
///
/// Either `reps` or `duration` is normally present. `reps_text` is only shown
/// to the user and never used in calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseReference {
    /// Referenced exercise; numeric ids are kept as their decimal text
    #[serde(default, deserialize_with = "exercise_key")]
    pub id: ExerciseId,

    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::optional_integer")]
    pub reps: Option<i64>,

    /// Display label for the repetitions, e.g. "6 each leg"
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::optional_text")]
    pub reps_text: Option<String>,

    /// Time under work per set, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::optional_number")]
    pub duration: Option<f64>,

    /// Raw tempo string, see [`Tempo`]; non-string values read as absent
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::optional_text")]
    pub tempo: Option<String>,
}

fn exercise_key<'de, D>(deserializer: D) -> Result<ExerciseId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    de::key(deserializer).map(ExerciseId::new)
}

impl ExerciseReference {
    /// Repetition-based reference.
    pub fn reps(id: impl Into<String>, reps: i64) -> Self {
        Self {
            id: ExerciseId::new(id),
            reps: Some(reps),
            ..Default::default()
        }
    }

    /// Time-based reference.
    pub fn timed(id: impl Into<String>, seconds: f64) -> Self {
        Self {
            id: ExerciseId::new(id),
            duration: Some(seconds),
            ..Default::default()
        }
    }

    /// Set the tempo string.
    pub fn with_tempo(mut self, tempo: impl Into<String>) -> Self {
        self.tempo = Some(tempo.into());
        self
    }

    /// Set the display label for repetitions.
    pub fn with_reps_text(mut self, text: impl Into<String>) -> Self {
        self.reps_text = Some(text.into());
        self
    }

    /// Parsed tempo, `None` when absent or malformed.
    pub fn parsed_tempo(&self) -> Option<Tempo> {
        self.tempo.as_deref().and_then(Tempo::parse)
    }

    /// Human-readable prescription, e.g. "12 reps", "6 each leg", "60s".
    pub fn prescription(&self) -> String {
        if let Some(text) = &self.reps_text {
            return text.clone();
        }
        match (self.duration, self.reps) {
            (Some(d), _) if d > 0.0 => format!("{}s", d),
            (_, Some(r)) => format!("{} reps", r),
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Push Ups lvl 1"), "push-ups-lvl-1");
        assert_eq!(slugify("Squats   lvl\t2"), "squats-lvl-2");
        assert_eq!(slugify(" Edge "), "-edge-");
    }

    #[test]
    fn test_matches_slug_case_insensitive() {
        let workout = Workout::new("w1", "Pull Ups lvl 1");
        assert!(workout.matches_slug("pull-ups-lvl-1"));
        assert!(workout.matches_slug("Pull-Ups-LVL-1"));
        assert!(!workout.matches_slug("pull-ups-lvl-2"));
    }

    #[test]
    fn test_deserialize_workout() {
        let json = r#"{
            "id": "31da8a69-2ffd-4e78-98cc-d49331c25312",
            "title": "Squats lvl 2",
            "tags": ["lvl 2"],
            "description": "Legs",
            "benefits": ["Leg strength"],
            "exerciseLoops": [
                {"exercises": [{"id": "d5e6", "reps": 12, "repsText": "6 each leg"}], "sets": 3, "rest": 120},
                {"exercises": [{"id": "888a", "duration": 10}], "sets": 3, "rest": 180}
            ]
        }"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.exercise_loops.len(), 2);
        let first = &workout.exercise_loops[0].exercises[0];
        assert_eq!(first.reps, Some(12));
        assert_eq!(first.reps_text.as_deref(), Some("6 each leg"));
        assert_eq!(workout.exercise_loops[1].exercises[0].duration, Some(10.0));
        assert_eq!(workout.exercise_ids().count(), 2);
    }

    #[test]
    fn test_legacy_loop_field_name() {
        let json = r#"{"exercices": [{"id": "1", "reps": 8}], "sets": 3, "rest": 120}"#;
        let exercise_loop: ExerciseLoop = serde_json::from_str(json).unwrap();
        assert_eq!(exercise_loop.exercises.len(), 1);
    }

    #[test]
    fn test_missing_loop_fields_default() {
        let exercise_loop: ExerciseLoop = serde_json::from_str(r#"{"exercises": []}"#).unwrap();
        assert!(exercise_loop.exercises.is_empty());
        assert_eq!(exercise_loop.sets, 0);
        assert_eq!(exercise_loop.rest, 0.0);
    }

    #[test]
    fn test_loop_requires_exercise_list() {
        assert!(serde_json::from_str::<ExerciseLoop>("{}").is_err());
        assert!(serde_json::from_str::<ExerciseLoop>(r#"{"exercises": "squats"}"#).is_err());
    }

    #[test]
    fn test_malformed_loop_fields_fall_back() {
        let json = r#"{"exercises": [null, {"id": "a", "reps": 8, "tempo": 2010}, 5],
                       "sets": null, "rest": "long"}"#;
        let exercise_loop: ExerciseLoop = serde_json::from_str(json).unwrap();
        assert_eq!(exercise_loop.exercises.len(), 1);
        assert_eq!(exercise_loop.exercises[0].reps, Some(8));
        assert!(exercise_loop.exercises[0].tempo.is_none());
        assert_eq!(exercise_loop.sets, 0);
        assert_eq!(exercise_loop.rest, 0.0);
    }

    #[test]
    fn test_fractional_sets_are_truncated() {
        let json = r#"{"exercises": [], "sets": 2.5, "rest": 10.5}"#;
        let exercise_loop: ExerciseLoop = serde_json::from_str(json).unwrap();
        assert_eq!(exercise_loop.sets, 2);
        assert_eq!(exercise_loop.rest, 10.5);
    }

    #[test]
    fn test_reference_field_fallbacks() {
        let json = r#"{"id": 7, "reps": "eight", "duration": null, "repsText": 6}"#;
        let r: ExerciseReference = serde_json::from_str(json).unwrap();
        assert_eq!(r.id.as_str(), "7");
        assert!(r.reps.is_none());
        assert!(r.duration.is_none());
        assert!(r.reps_text.is_none());

        let r: ExerciseReference = serde_json::from_str(r#"{"id": null, "reps": 4.9}"#).unwrap();
        assert!(!r.id.is_present());
        assert_eq!(r.reps, Some(4));
    }

    #[test]
    fn test_workout_drops_unreadable_loops() {
        let json = r#"{"id": "w", "title": "T", "exerciseLoops": [
            null,
            {"sets": 3},
            {"exercises": [{"id": "1", "reps": 8}], "sets": 3, "rest": 120}
        ]}"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.exercise_loops.len(), 1);
        assert_eq!(workout.exercise_loops[0].sets, 3);
    }

    #[test]
    fn test_prescription() {
        assert_eq!(ExerciseReference::reps("a", 8).prescription(), "8 reps");
        assert_eq!(ExerciseReference::timed("a", 60.0).prescription(), "60s");
        assert_eq!(
            ExerciseReference::reps("a", 12).with_reps_text("6 each leg").prescription(),
            "6 each leg"
        );
        assert_eq!(ExerciseReference::default().prescription(), "-");
    }

    #[test]
    fn test_parsed_tempo() {
        let r = ExerciseReference::reps("a", 12).with_tempo("2010");
        assert_eq!(r.parsed_tempo().map(|t| t.seconds_per_rep()), Some(3));
        let bad = ExerciseReference::reps("a", 12).with_tempo("slow");
        assert!(bad.parsed_tempo().is_none());
    }
}
