//! Per-loop duration reports.

use serde::{Deserialize, Serialize};

/// Estimate for one loop of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopEstimate {
    /// Position of the loop in the workout
    pub index: usize,

    /// Time for one pass through the loop's exercises
    pub exercise_time: f64,

    /// Sets after clamping to at least one
    pub sets: i64,

    /// Rest between sets after clamping to at least zero
    pub rest: f64,

    /// Loop contribution: exercise time per set plus rest between sets
    pub total: f64,

    /// Sum of this and all previous loop contributions
    pub running_total: f64,
}

impl LoopEstimate {
    /// Total rest inside the loop.
    pub fn rest_time(&self) -> f64 {
        self.rest * (self.sets - 1) as f64
    }
}

/// Loop-by-loop estimate of a workout, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBreakdown {
    /// Loop estimates
    pub loops: Vec<LoopEstimate>,
}

impl WorkoutBreakdown {
    /// Total workout duration.
    pub fn total(&self) -> f64 {
        self.loops.iter().map(|l| l.total).sum()
    }

    /// Time spent working, rest excluded.
    pub fn work_time(&self) -> f64 {
        self.loops.iter().map(|l| l.exercise_time * l.sets as f64).sum()
    }

    /// Time spent resting between sets.
    pub fn rest_time(&self) -> f64 {
        self.loops.iter().map(LoopEstimate::rest_time).sum()
    }
}
