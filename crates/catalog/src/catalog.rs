//! Read-only workout catalog with slug and id lookups.

use std::collections::{HashMap, HashSet};
use tracing::{info, warn};
use workouts_core::{Exercise, ExerciseId, ExerciseLoop, ExerciseReference, Workout, WorkoutId};
use super::{CatalogData, CatalogSource, Result};

/// Immutable collection of exercises and workouts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    workouts: Vec<Workout>,
}

impl Catalog {
    /// Build a catalog from loaded data.
    pub fn new(data: CatalogData) -> Self {
        Self {
            exercises: data.exercises,
            workouts: data.workouts,
        }
    }

    /// Load from a source and log any integrity problems.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = Self::new(source.load().await?);
        info!(
            source = %source.describe(),
            exercises = catalog.exercises.len(),
            workouts = catalog.workouts.len(),
            "Catalog loaded"
        );
        catalog.integrity_report().log_warnings();
        Ok(catalog)
    }

    /// All exercises in catalog order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// All workouts in catalog order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Find the first workout whose title slug matches `slug`, ignoring case.
    pub fn find_workout_by_slug(&self, slug: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.matches_slug(slug))
    }

    /// Find an exercise by exact id.
    pub fn find_exercise_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id.as_str() == id)
    }

    /// Pair each reference of a loop with the exercise it points to.
    pub fn resolve_loop<'a>(
        &'a self,
        exercise_loop: &'a ExerciseLoop,
    ) -> Vec<(&'a ExerciseReference, Option<&'a Exercise>)> {
        exercise_loop
            .exercises
            .iter()
            .map(|r| (r, self.find_exercise_by_id(r.id.as_str())))
            .collect()
    }

    /// Check references and uniqueness.
    pub fn integrity_report(&self) -> IntegrityReport {
        let known: HashSet<&ExerciseId> = self.exercises.iter().map(|e| &e.id).collect();
        let mut report = IntegrityReport::default();

        for workout in &self.workouts {
            for id in workout.exercise_ids() {
                if !known.contains(id) {
                    report.missing_exercises.push((workout.id.clone(), id.clone()));
                }
            }
        }

        let mut ids: HashMap<&WorkoutId, usize> = HashMap::new();
        let mut slugs: HashMap<String, usize> = HashMap::new();
        for workout in &self.workouts {
            *ids.entry(&workout.id).or_insert(0) += 1;
            *slugs.entry(workout.slug()).or_insert(0) += 1;
        }

        report.duplicate_workout_ids = ids
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(id, _)| id.clone())
            .collect();
        report.duplicate_workout_ids.sort();

        report.duplicate_slugs = slugs
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(slug, _)| slug)
            .collect();
        report.duplicate_slugs.sort();

        report
    }
}

impl From<CatalogData> for Catalog {
    fn from(data: CatalogData) -> Self {
        Self::new(data)
    }
}

/// Problems found in catalog data. None of them prevent use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrityReport {
    /// (workout, exercise) pairs where the exercise is unknown
    pub missing_exercises: Vec<(WorkoutId, ExerciseId)>,

    /// Workout ids used more than once
    pub duplicate_workout_ids: Vec<WorkoutId>,

    /// Slugs shared by several workouts; only the first is reachable
    pub duplicate_slugs: Vec<String>,
}

impl IntegrityReport {
    /// Whether no problem was found.
    pub fn is_clean(&self) -> bool {
        self.missing_exercises.is_empty()
            && self.duplicate_workout_ids.is_empty()
            && self.duplicate_slugs.is_empty()
    }

    /// Emit one warning per problem.
    pub fn log_warnings(&self) {
        for (workout, exercise) in &self.missing_exercises {
            warn!(%workout, %exercise, "Workout references unknown exercise");
        }
        for id in &self.duplicate_workout_ids {
            warn!(%id, "Duplicate workout id");
        }
        for slug in &self.duplicate_slugs {
            warn!(%slug, "Duplicate workout slug, later workouts are unreachable");
        }
    }
}
