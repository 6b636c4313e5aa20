//! Workout catalog core data models.
//!
//! This crate defines the exercises, workouts and exercise loops shared by
//! the duration estimator, the catalog and the CLI.

#![warn(missing_docs)]

// Identities
mod id;

// Tolerant field readers
mod de;

// Exercises and their media
mod exercise;
pub mod media;

// Workout structure
mod workout;
mod tempo;

// Re-exports
pub use id::{ExerciseId, WorkoutId};
pub use exercise::{Exercise, ExerciseMedia, CropRect, MediaKind};
pub use workout::{Workout, ExerciseLoop, ExerciseReference, slugify};
pub use tempo::Tempo;
