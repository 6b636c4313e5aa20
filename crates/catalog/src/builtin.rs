//! Built-in catalog shipped with the binary.
//!
//! Initialized once on first use and shared process-wide.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use workouts_core::{CropRect, Exercise, ExerciseLoop, ExerciseMedia, ExerciseReference, Workout};
use super::{Catalog, CatalogData, CatalogSource, Result};

const PUSH_UPS: &str = "6958008f-7188-4d70-ba75-c6e0ee786076";
const NEGATIVE_PUSH_UPS: &str = "a74909ff-b865-48f1-a82e-18211a788215";
const SCAPULA_PUSH_UPS: &str = "d4f55277-e441-4266-9b1f-df8d26ab3d96";
const PLANK_HOLD: &str = "ab231895-b370-4bcc-a7ca-d58ec1608cf1";
const DEEP_SQUATS: &str = "888a4569-238e-403c-ae73-dbf862580d00";
const NARROW_SQUATS: &str = "384d6d6a-43b6-4b40-be7f-b3d34a720b9f";
const BODYWEIGHT_SQUATS: &str = "bc702648-afb7-44ac-a349-890c022e3dc";
const BULGARIAN_SPLIT_SQUATS: &str = "d5e6f7g8-9h0i-1j2k-3l4m-5n6o7p8b9r0";
const BARBELL_ROWS: &str = "e8f9a123-4567-89ab-cdef-0123456789ab";
const PASSIVE_HANG: &str = "f1b2c3d4-5e6f-7890-abcd-ef1234567890";

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin_data()));

/// The process-wide built-in catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}

/// Source yielding the built-in catalog data.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl CatalogSource for BuiltinSource {
    fn describe(&self) -> String {
        "builtin".to_string()
    }

    async fn load(&self) -> Result<CatalogData> {
        Ok(builtin_data())
    }
}

/// Build the built-in catalog contents.
pub fn builtin_data() -> CatalogData {
    CatalogData {
        exercises: exercises(),
        workouts: workouts(),
    }
}

fn exercises() -> Vec<Exercise> {
    vec![
        Exercise::new(PUSH_UPS, "Push-ups", "/exercise-video/pushup.webm"),
        Exercise::new(NEGATIVE_PUSH_UPS, "Negative Push-ups", "/exercise-video/negative-push-ups.webm"),
        Exercise {
            images: vec![ExerciseMedia::new("/exercise-video/scapula-push-ups.webm").with_crop(CropRect {
                x: 0.0,
                y: 100.0,
                width: 100.0,
                height: 0.0,
            })],
            ..Exercise::new(SCAPULA_PUSH_UPS, "Scapula Push-ups", "")
        }
        .with_description(
            "In plank position, focus on squeezing and releasing your shoulder blades while keeping arms straight.",
        ),
        Exercise::new(PLANK_HOLD, "Plank Hold", "/exercise-video/plank-hold.webm").with_description(
            "Hold a strong plank position. Keep your core tight, back straight, and maintain steady breathing.",
        ),
        Exercise::new(DEEP_SQUATS, "Deep Squats", "/exercise-video/deep-squats.webm").with_description(
            "Keep your back straight and your chest up. Lower your body slowly to the ground over 3-5 seconds. Reset to starting position.",
        ),
        Exercise::new(NARROW_SQUATS, "Narrow Stance Squats", "/exercise-video/narrow-stance-squats.webm")
            .with_description(
                "Keep your feet close together. Maintain proper squat form with controlled movement and full range of motion.",
            ),
        Exercise::new(BODYWEIGHT_SQUATS, "Bodyweight Squats", "/exercise-video/bodyweight-squats.webm")
            .with_description(
                "Standard bodyweight squats. Keep your back straight and your chest up. Lower your body slowly and return to starting position.",
            ),
        Exercise::new(BULGARIAN_SPLIT_SQUATS, "Bulgarian Split Squats", "/exercise-video/bulg.webm")
            .with_description(
                "Place one foot behind you on an elevated surface. Lower your body by bending your front knee while keeping your back straight. Focus on balance and controlled movement.",
            ),
        Exercise::new(BARBELL_ROWS, "Bent Over Barbell Rows", "/exercise-video/bent-over-barbell-rows.webm")
            .with_description(
                "Keep your back straight and hinge at the hips. Pull the barbell towards your lower chest, squeezing your shoulder blades together.",
            ),
        Exercise::new(PASSIVE_HANG, "Passive Hang", "https://image.boxrox.com/2023/07/Dead-hang-1024x580.jpg")
            .with_description(
                "Hang from a pull-up bar with arms fully extended. Focus on engaging your lats and building grip strength.",
            ),
    ]
}

fn workout(
    id: &str,
    title: &str,
    level: &str,
    description: &str,
    benefits: &[&str],
    loops: Vec<ExerciseLoop>,
) -> Workout {
    Workout {
        tags: vec![level.to_string()],
        description: description.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        exercise_loops: loops,
        ..Workout::new(id, title)
    }
}

fn workouts() -> Vec<Workout> {
    let reps = |id: &str, n: i64| ExerciseReference::reps(id, n);
    let timed = |id: &str, seconds: f64| ExerciseReference::timed(id, seconds);

    vec![
        workout(
            "31da8a69-2ffd-4e78-98cc-d49331c25312",
            "Push Ups lvl 1",
            "lvl 1",
            "Master the fundamental pushing movement with progressive exercises",
            &["Upper body strength", "Core stability", "Chest & triceps"],
            vec![
                ExerciseLoop::new(vec![reps(NEGATIVE_PUSH_UPS, 8)], 3, 120.0),
                ExerciseLoop::new(vec![reps(SCAPULA_PUSH_UPS, 8)], 4, 120.0),
                ExerciseLoop::new(vec![timed(PLANK_HOLD, 60.0)], 4, 120.0),
            ],
        ),
        workout(
            "c97d8e45-6f2a-4b8c-9e1f-7a3b5c9d8e1f",
            "Pull Ups lvl 1",
            "lvl 1",
            "Build pulling strength and work towards your first pull-up",
            &["Back muscles", "Lat development", "Grip strength"],
            vec![ExerciseLoop::new(
                vec![
                    reps(BARBELL_ROWS, 15),
                    ExerciseReference {
                        id: PASSIVE_HANG.into(),
                        ..Default::default()
                    },
                ],
                3,
                120.0,
            )],
        ),
        workout(
            "b86c4e67-3993-477d-89e1-d21eadd98736",
            "Squats lvl 1",
            "lvl 1",
            "Perfect your squat form and build powerful legs",
            &["Leg strength", "Glute activation", "Mobility"],
            vec![
                ExerciseLoop::new(vec![reps(DEEP_SQUATS, 12).with_tempo("2010")], 3, 120.0),
                ExerciseLoop::new(vec![reps(NARROW_SQUATS, 12).with_tempo("2010")], 3, 120.0),
                ExerciseLoop::new(vec![reps(BODYWEIGHT_SQUATS, 15).with_tempo("2010")], 3, 120.0),
            ],
        ),
        workout(
            "5f0c1a2e-8d4b-4c6a-9e3f-2b7d1c8a4e60",
            "Push Ups lvl 2",
            "lvl 2",
            "Master the fundamental pushing movement with progressive exercises",
            &["Upper body strength", "Core stability", "Chest & triceps"],
            vec![
                ExerciseLoop::new(vec![reps(PUSH_UPS, 12)], 3, 120.0),
                ExerciseLoop::new(vec![reps(NEGATIVE_PUSH_UPS, 8)], 3, 120.0),
                ExerciseLoop::new(
                    vec![reps(SCAPULA_PUSH_UPS, 8), timed(PLANK_HOLD, 60.0)],
                    4,
                    180.0,
                ),
            ],
        ),
        workout(
            "a3e9b7c1-2f6d-4d8e-b0a4-6c5e9f1d7b32",
            "Squats lvl 2",
            "lvl 2",
            "Master the fundamental pushing movement with progressive exercises",
            &["Upper body strength", "Core stability", "Chest & triceps"],
            vec![
                ExerciseLoop::new(
                    vec![reps(BULGARIAN_SPLIT_SQUATS, 12).with_reps_text("6 each leg")],
                    3,
                    120.0,
                ),
                ExerciseLoop::new(vec![reps(NARROW_SQUATS, 10), timed(DEEP_SQUATS, 10.0)], 3, 180.0),
            ],
        ),
    ]
}
