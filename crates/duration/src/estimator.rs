//! Workout duration estimation.
//!
//! The estimator never fails: malformed optional fields fall back to a
//! numeric default (zero contribution, or the default seconds per rep).

use serde::{Deserialize, Serialize};
use tracing::debug;
use workouts_core::{ExerciseLoop, ExerciseReference, Tempo};
use crate::breakdown::{LoopEstimate, WorkoutBreakdown};

/// Seconds per repetition when no valid tempo is given.
pub const DEFAULT_SECONDS_PER_REP: u32 = 3;

/// Repetition counts above this are considered malformed.
pub const MAX_REPS: i64 = 1000;

/// Estimator tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Seconds per repetition when the tempo is absent or invalid
    pub default_seconds_per_rep: u32,

    /// Largest repetition count that still produces a duration
    pub max_reps: i64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_seconds_per_rep: DEFAULT_SECONDS_PER_REP,
            max_reps: MAX_REPS,
        }
    }
}

/// Duration estimator.
#[derive(Debug, Clone, Default)]
pub struct DurationEstimator {
    config: EstimatorConfig,
}

impl DurationEstimator {
    /// Create an estimator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration.
    pub fn with_config(mut self, config: EstimatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate one reference, in seconds.
    ///
    /// A positive explicit `duration` wins over reps and tempo.
    pub fn estimate_reference(&self, reference: &ExerciseReference) -> f64 {
        self.estimate_prescription(reference.reps, reference.duration, reference.tempo.as_deref())
    }

    /// Estimate a raw prescription, in seconds.
    pub fn estimate_prescription(
        &self,
        reps: Option<i64>,
        duration: Option<f64>,
        tempo: Option<&str>,
    ) -> f64 {
        if let Some(duration) = duration.filter(|d| *d > 0.0) {
            return duration;
        }

        let reps = reps.unwrap_or(0);
        if reps <= 0 {
            return 0.0;
        }
        if reps > self.config.max_reps {
            debug!(reps, max = self.config.max_reps, "Repetition count out of range, ignoring");
            return 0.0;
        }

        reps as f64 * f64::from(self.seconds_per_rep(tempo))
    }

    /// Seconds per repetition for an optional tempo string.
    pub fn seconds_per_rep(&self, tempo: Option<&str>) -> u32 {
        match tempo {
            None => self.config.default_seconds_per_rep,
            Some(raw) => match Tempo::parse(raw) {
                Some(tempo) => tempo.seconds_per_rep(),
                None => {
                    debug!(tempo = raw, "Invalid tempo, using default seconds per rep");
                    self.config.default_seconds_per_rep
                }
            },
        }
    }

    /// Time for one pass through the loop's exercises, in seconds.
    ///
    /// References without an exercise id do not contribute.
    pub fn exercise_time(&self, exercise_loop: &ExerciseLoop) -> f64 {
        exercise_loop
            .exercises
            .iter()
            .filter(|r| {
                let present = r.id.is_present();
                if !present {
                    debug!("Skipping exercise reference without id");
                }
                present
            })
            .map(|r| self.estimate_reference(r))
            .sum()
    }

    /// Estimate a single loop including its sets and rest.
    pub fn estimate_loop(&self, index: usize, exercise_loop: &ExerciseLoop) -> LoopEstimate {
        let exercise_time = self.exercise_time(exercise_loop);
        let sets = exercise_loop.sets.max(1);
        let rest = exercise_loop.rest.max(0.0);
        let total = exercise_time * sets as f64 + rest * (sets - 1) as f64;

        LoopEstimate {
            index,
            exercise_time,
            sets,
            rest,
            total,
            running_total: total,
        }
    }

    /// Per-loop estimates in execution order.
    pub fn breakdown(&self, loops: &[ExerciseLoop]) -> WorkoutBreakdown {
        let mut running_total = 0.0;
        let loops = loops
            .iter()
            .enumerate()
            .map(|(index, l)| {
                let mut estimate = self.estimate_loop(index, l);
                running_total += estimate.total;
                estimate.running_total = running_total;
                estimate
            })
            .collect();

        WorkoutBreakdown { loops }
    }

    /// Total workout duration, in seconds.
    pub fn estimate_workout(&self, loops: &[ExerciseLoop]) -> f64 {
        loops
            .iter()
            .enumerate()
            .map(|(index, l)| self.estimate_loop(index, l).total)
            .sum()
    }
}

/// Estimate one reference with the default configuration.
pub fn estimate_reference_duration(reference: &ExerciseReference) -> f64 {
    DurationEstimator::new().estimate_reference(reference)
}

/// Estimate a workout's loops with the default configuration.
pub fn estimate_workout_duration(loops: &[ExerciseLoop]) -> f64 {
    DurationEstimator::new().estimate_workout(loops)
}
