//! Catalog source abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use workouts_core::{Exercise, Workout};

/// Error type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file does not exist
    #[error("Catalog not found: {0}")]
    NotFound(String),
}

/// Raw catalog contents as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Exercise definitions
    #[serde(default)]
    pub exercises: Vec<Exercise>,

    /// Workouts referencing the exercises
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl CatalogData {
    /// Parse a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Where catalog data comes from.
///
/// Sources are read once at startup; the resulting catalog is never written
/// back.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short description used in logs.
    fn describe(&self) -> String;

    /// Load the catalog contents.
    async fn load(&self) -> Result<CatalogData>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults_missing_sections() {
        let data = CatalogData::from_json("{}").unwrap();
        assert!(data.exercises.is_empty());
        assert!(data.workouts.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = CatalogData::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_camel_case() {
        let mut workout = Workout::new("w1", "Core lvl 1");
        workout.exercise_loops.push(workouts_core::ExerciseLoop::new(
            vec![workouts_core::ExerciseReference::reps("e1", 12).with_reps_text("6 each side")],
            3,
            60.0,
        ));
        let data = CatalogData {
            exercises: vec![],
            workouts: vec![workout],
        };
        let json = data.to_json().unwrap();
        assert!(json.contains("exerciseLoops"));
        assert!(json.contains("repsText"));
        assert_eq!(CatalogData::from_json(&json).unwrap(), data);
    }
}
