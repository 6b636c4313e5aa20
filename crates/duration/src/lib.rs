//! Workout duration estimation.
//!
//! Turns exercise loops (reps, tempo, explicit durations, sets and rest)
//! into an estimated number of seconds.

#![warn(missing_docs)]

pub mod estimator;
pub mod breakdown;
pub mod lenient;
pub mod format;

pub use estimator::{
    DurationEstimator, EstimatorConfig, estimate_reference_duration, estimate_workout_duration,
    DEFAULT_SECONDS_PER_REP, MAX_REPS,
};
pub use breakdown::{LoopEstimate, WorkoutBreakdown};
pub use lenient::{estimate_document, estimate_workout_value, parse_loops};
pub use format::{format_duration, format_minutes};
