//! JSON file catalog source.
//!
//! Reads a `{ "exercises": [...], "workouts": [...] }` document from disk.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use super::{CatalogData, CatalogError, CatalogSource, Result};

/// File-based JSON catalog source.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source reading from `path`. Nothing is read until `load`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn load(&self) -> Result<CatalogData> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let data = CatalogData::from_json(&json)?;
        debug!(
            path = %self.path.display(),
            exercises = data.exercises.len(),
            workouts = data.workouts.len(),
            "Read catalog file"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "exercises": [
            {"id": "e1", "title": "Push-ups", "images": [{"url": "/exercise-video/pushup.webm"}], "description": ""}
        ],
        "workouts": [
            {
                "id": "w1",
                "title": "Push Ups lvl 1",
                "tags": ["lvl 1"],
                "description": "Pushing basics",
                "benefits": ["Chest"],
                "exerciseLoops": [{"exercises": [{"id": "e1", "reps": 8}], "sets": 3, "rest": 120}]
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_load_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let source = JsonCatalogSource::new(&path);
        let data = source.load().await.unwrap();
        assert_eq!(data.exercises.len(), 1);
        assert_eq!(data.workouts[0].exercise_loops[0].sets, 3);
        assert!(source.describe().starts_with("json:"));
    }

    #[tokio::test]
    async fn test_load_tolerates_malformed_loop_fields() {
        let json = r#"{
            "exercises": [{"id": "e1", "title": "Push-ups", "images": []}],
            "workouts": [{
                "id": "w1",
                "title": "Push Ups lvl 1",
                "exerciseLoops": [
                    null,
                    {"exercises": [{"id": "e1", "reps": 8, "tempo": 2010}], "sets": null, "rest": null},
                    {"exercises": [null, {"id": "e1", "reps": 8}], "sets": 3, "rest": 120}
                ]
            }]
        }"#;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, json).unwrap();

        let data = JsonCatalogSource::new(&path).load().await.unwrap();
        let workout = &data.workouts[0];
        assert_eq!(workout.exercise_loops.len(), 2);
        assert!(workout.exercise_loops[0].exercises[0].tempo.is_none());

        // 8 reps at the default tempo once, then 8 reps for 3 sets with 120s rest
        let seconds = workouts_duration::estimate_workout_duration(&workout.exercise_loops);
        assert_eq!(seconds, 24.0 + 312.0);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = JsonCatalogSource::new(dir.path().join("absent.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"workouts\": 3 }").unwrap();

        let err = JsonCatalogSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
