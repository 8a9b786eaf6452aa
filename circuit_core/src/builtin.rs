//! Built-in demo programs.
//!
//! This module provides the programs shipped with the app, fully
//! structured so every one of them is runnable out of the box.

use crate::library::ProgramLibrary;
use crate::types::{Circuit, Exercise, ProgramStructure};
use once_cell::sync::Lazy;

/// Cached default library - built once and reused across all operations
static DEFAULT_LIBRARY: Lazy<ProgramLibrary> = Lazy::new(build_default_library);

/// Get a reference to the cached default library
pub fn default_library() -> &'static ProgramLibrary {
    &DEFAULT_LIBRARY
}

/// Builds the default library with the built-in demo programs
///
/// **Note**: For production use, prefer `default_library()` which returns a
/// cached reference. This function is retained for testing and for callers
/// that need an owned, mutable library.
pub fn build_default_library() -> ProgramLibrary {
    build_default_library_with_rate(crate::library::DEFAULT_KCAL_PER_ACTIVE_MINUTE)
}

/// Builds the default library with a configured calorie-estimation rate
pub fn build_default_library_with_rate(kcal_per_active_minute: f64) -> ProgramLibrary {
    let mut library = ProgramLibrary::with_kcal_rate(kcal_per_active_minute);

    // Programs are prepended on create, so insert in reverse display order.
    library.create(hiit_express());
    library.create(strength_endurance());
    library.create(cardio_intense());

    library
}

fn cardio_intense() -> ProgramStructure {
    ProgramStructure {
        name: "Cardio Intense".into(),
        warmup: Circuit::new("Warmup", 1).with_exercises(vec![
            Exercise::new("Jog in place", 60, 0),
            Exercise::new("Arm circles", 30, 15),
        ]),
        main: vec![
            Circuit::new("Cardio blast", 3).with_exercises(vec![
                Exercise::new("Jumping jacks", 45, 15),
                Exercise::new("High knees", 45, 15),
                Exercise::new("Burpees", 30, 30),
            ]),
            Circuit::new("Finisher", 2).with_exercises(vec![
                Exercise::new("Mountain climbers", 30, 15),
                Exercise::new("Squat jumps", 30, 30),
            ]),
        ],
        cooldown: Circuit::new("Cooldown", 1).with_exercises(vec![
            Exercise::new("Walking recovery", 60, 0),
            Exercise::new("Quad stretch", 30, 0),
        ]),
    }
}

fn strength_endurance() -> ProgramStructure {
    ProgramStructure {
        name: "Force & Endurance".into(),
        warmup: Circuit::new("Warmup", 1).with_exercises(vec![
            Exercise::new("Shoulder rolls", 30, 0),
            Exercise::new("Bodyweight squats", 45, 15),
        ]),
        main: vec![Circuit::new("Strength block", 4).with_exercises(vec![
            Exercise::new("Push-ups", 40, 20),
            Exercise::new("Lunges", 40, 20),
            Exercise::new("Plank", 45, 30),
        ])],
        cooldown: Circuit::new("Stretching", 1).with_exercises(vec![
            Exercise::new("Hamstring stretch", 40, 0),
            Exercise::new("Chest opener", 40, 0),
        ]),
    }
}

fn hiit_express() -> ProgramStructure {
    ProgramStructure {
        name: "HIIT Express".into(),
        warmup: Circuit::new("Warmup", 1)
            .with_exercises(vec![Exercise::new("Jumping jacks", 45, 0)]),
        main: vec![Circuit::new("Tabata", 8).with_exercises(vec![Exercise::new(
            "Sprint in place",
            20,
            10,
        )])],
        cooldown: Circuit::new("Cooldown", 1)
            .with_exercises(vec![Exercise::new("Deep breathing", 60, 0)]),
    }
}
