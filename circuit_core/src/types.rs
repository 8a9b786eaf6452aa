//! Core domain types for the Circo session builder.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their timing
//! - Circuits (repeated blocks of exercises)
//! - Program structures and their summary cards
//! - Flattened playback steps

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Program Building Blocks
// ============================================================================

/// A single timed exercise within a circuit
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    /// Work interval in seconds
    pub active_secs: u32,
    /// Recovery interval in seconds
    pub rest_secs: u32,
}

impl Exercise {
    pub fn new(name: impl Into<String>, active_secs: u32, rest_secs: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            active_secs,
            rest_secs,
        }
    }
}

/// An ordered group of exercises executed `repetitions` times as a unit
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Circuit {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub repetitions: u32,
}

impl Circuit {
    pub fn new(name: impl Into<String>, repetitions: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            exercises: Vec::new(),
            repetitions,
        }
    }

    pub fn with_exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.exercises = exercises;
        self
    }

    /// Move the exercise at `from` so it ends up at index `to`.
    ///
    /// Splice semantics: the element is removed first, then re-inserted,
    /// shifting everything between the two positions by one. Out-of-range
    /// indices leave the circuit untouched.
    pub fn move_exercise(&mut self, from: usize, to: usize) {
        if from >= self.exercises.len() || to >= self.exercises.len() {
            return;
        }
        let exercise = self.exercises.remove(from);
        self.exercises.insert(to, exercise);
    }
}

/// The three structural sections of a program
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Warmup,
    Main,
    Cooldown,
}

/// Full nested description of a workout program
///
/// Warmup and cooldown are single circuits executed once; the main section
/// is an ordered list of circuits with caller-chosen repetition counts.
/// Immutable once handed to the flattener.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramStructure {
    pub name: String,
    pub warmup: Circuit,
    pub main: Vec<Circuit>,
    pub cooldown: Circuit,
}

// ============================================================================
// Playback Step Types
// ============================================================================

/// Whether a step is a work or a recovery interval
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Active,
    Rest,
}

/// One timed interval of playback, derived from the program structure
///
/// Steps are produced once per session by [`crate::timeline::flatten`] and
/// never mutated afterwards; only the player's position moves across them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseStep {
    pub exercise_name: String,
    /// Always nonzero; zero-duration intervals are never emitted
    pub duration_secs: u32,
    pub kind: StepKind,
    pub phase: Phase,
    pub circuit_name: String,
    /// 1-based repetition counter, set for main-phase steps only
    pub circuit_repetition: Option<u32>,
}

// ============================================================================
// Program Summary Card
// ============================================================================

/// A program as shown on the home screen: summary fields plus the
/// underlying structure (older entries may not carry one)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub name: String,
    /// Human-readable total duration, e.g. "30 min"
    pub duration_label: String,
    /// Number of distinct exercise entries (not weighted by repetitions)
    pub exercise_count: usize,
    /// Estimated calories burned over the active intervals
    pub calories: u32,
    pub structure: Option<ProgramStructure>,
}
