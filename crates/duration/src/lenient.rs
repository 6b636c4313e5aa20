//! Estimation over untyped JSON.
//!
//! Catalog data edited by hand may not match the typed model. These helpers
//! apply the same rules as [`DurationEstimator`] but treat every shape
//! mismatch as a missing value instead of rejecting the document.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;
use workouts_core::ExerciseLoop;
use crate::estimator::DurationEstimator;

/// Extract the loops that can contribute time.
///
/// Non-array input yields no loops. Loops that are not objects, or whose
/// exercise list is missing or not an array, are dropped. Within a loop,
/// fields of the wrong type read as absent, numeric exercise ids are kept as
/// text, and fractional `sets` and `reps` are truncated towards zero
/// (`sets: 2.5` counts as two sets).
pub fn parse_loops(value: &JsonValue) -> Vec<ExerciseLoop> {
    let Some(items) = value.as_array() else {
        debug!("Exercise loops are not an array");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match ExerciseLoop::deserialize(item) {
            Ok(exercise_loop) => Some(exercise_loop),
            Err(e) => {
                debug!(error = %e, "Skipping unreadable exercise loop");
                None
            }
        })
        .collect()
}

/// Estimate the duration of a JSON loop array, in seconds.
pub fn estimate_workout_value(value: &JsonValue) -> f64 {
    DurationEstimator::new().estimate_workout(&parse_loops(value))
}

/// Estimate a JSON document holding either a loop array or a workout object
/// with `exerciseLoops`.
pub fn estimate_document(value: &JsonValue) -> f64 {
    match value.get("exerciseLoops") {
        Some(loops) => estimate_workout_value(loops),
        None => estimate_workout_value(value),
    }
}
