//! Plain-text rendering of catalog entries.

use workouts_catalog::Catalog;
use workouts_core::{ExerciseReference, Workout};
use workouts_duration::{format_duration, DurationEstimator};

pub fn workout_list(catalog: &Catalog) -> String {
    let estimator = DurationEstimator::new();
    let mut out = format!("Workouts ({})\n", catalog.workouts().len());

    for workout in catalog.workouts() {
        out.push_str(&format!(
            "  {} | {} | {} - {}\n",
            workout.slug(),
            workout.tags.join(", "),
            format_duration(estimator.estimate_workout(&workout.exercise_loops)),
            workout.title,
        ));
    }
    out
}

pub fn workout(catalog: &Catalog, workout: &Workout) -> String {
    let breakdown = DurationEstimator::new().breakdown(&workout.exercise_loops);
    let mut out = format!("Workout: {}\n", workout.title);

    out.push_str(&format!("  Slug: {}\n", workout.slug()));
    if !workout.tags.is_empty() {
        out.push_str(&format!("  Tags: {}\n", workout.tags.join(", ")));
    }
    out.push_str(&format!("  Description: {}\n", workout.description));
    if !workout.benefits.is_empty() {
        out.push_str(&format!("  Benefits: {}\n", workout.benefits.join(", ")));
    }

    for (exercise_loop, estimate) in workout.exercise_loops.iter().zip(&breakdown.loops) {
        out.push_str(&format!(
            "  Loop {}: {} x {} sets, {}s rest -> {} (running {})\n",
            estimate.index + 1,
            format_duration(estimate.exercise_time),
            estimate.sets,
            estimate.rest,
            format_duration(estimate.total),
            format_duration(estimate.running_total),
        ));
        for (reference, exercise) in catalog.resolve_loop(exercise_loop) {
            let title = exercise.map_or("Unknown exercise", |e| e.title.as_str());
            out.push_str(&format!("    - {} {}\n", title, prescription(reference)));
        }
    }

    out.push_str(&format!("  Total: {}\n", format_duration(breakdown.total())));
    out
}

fn prescription(reference: &ExerciseReference) -> String {
    match reference.parsed_tempo() {
        Some(tempo) => format!("({}, tempo {})", reference.prescription(), tempo),
        None => format!("({})", reference.prescription()),
    }
}

pub fn exercise_list(catalog: &Catalog) -> String {
    let mut out = format!("Exercises ({})\n", catalog.exercises().len());

    for exercise in catalog.exercises() {
        let kind = exercise
            .primary_media()
            .map_or_else(|| "none".to_string(), |m| m.kind().to_string());
        out.push_str(&format!("  {} | {} | {}\n", exercise.id, kind, exercise.title));
    }
    out
}
