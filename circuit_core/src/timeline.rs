//! Timeline flattening: nested program structure to linear playback steps.
//!
//! [`flatten`] turns a [`ProgramStructure`] into the ordered step sequence
//! the session player counts down over: warmup exercises in order, then each
//! main circuit repeated its configured number of times, then cooldown.
//! The summary helpers at the bottom feed the program cards (duration,
//! active time, exercise count).

use crate::types::{Circuit, ExerciseStep, Phase, ProgramStructure, StepKind};

/// Flatten a program structure into its playback step sequence.
///
/// Total over any well-formed structure: zero-duration intervals are
/// skipped silently, empty circuits contribute nothing, and an all-zero
/// structure yields an empty sequence (which the player refuses to start).
pub fn flatten(structure: &ProgramStructure) -> Vec<ExerciseStep> {
    let mut steps = Vec::new();

    push_circuit_once(&mut steps, &structure.warmup, Phase::Warmup, None);

    for circuit in &structure.main {
        for rep in 1..=circuit.repetitions {
            push_circuit_once(&mut steps, circuit, Phase::Main, Some(rep));
        }
    }

    push_circuit_once(&mut steps, &structure.cooldown, Phase::Cooldown, None);

    tracing::debug!(
        "Flattened '{}' into {} steps ({} seconds)",
        structure.name,
        steps.len(),
        steps.iter().map(|s| s.duration_secs).sum::<u32>()
    );

    steps
}

/// Emit one pass over a circuit: active then rest interval per exercise,
/// skipping whichever of the two is zero.
fn push_circuit_once(
    steps: &mut Vec<ExerciseStep>,
    circuit: &Circuit,
    phase: Phase,
    repetition: Option<u32>,
) {
    for exercise in &circuit.exercises {
        if exercise.active_secs > 0 {
            steps.push(ExerciseStep {
                exercise_name: exercise.name.clone(),
                duration_secs: exercise.active_secs,
                kind: StepKind::Active,
                phase,
                circuit_name: circuit.name.clone(),
                circuit_repetition: repetition,
            });
        }
        if exercise.rest_secs > 0 {
            steps.push(ExerciseStep {
                exercise_name: exercise.name.clone(),
                duration_secs: exercise.rest_secs,
                kind: StepKind::Rest,
                phase,
                circuit_name: circuit.name.clone(),
                circuit_repetition: repetition,
            });
        }
    }
}

// ============================================================================
// Summary Arithmetic
// ============================================================================

/// Total wall-clock seconds of a structure (active + rest, main circuits
/// weighted by their repetitions)
pub fn total_secs(structure: &ProgramStructure) -> u32 {
    circuit_secs(&structure.warmup, |e| e.active_secs + e.rest_secs)
        + structure
            .main
            .iter()
            .map(|c| circuit_secs(c, |e| e.active_secs + e.rest_secs) * c.repetitions)
            .sum::<u32>()
        + circuit_secs(&structure.cooldown, |e| e.active_secs + e.rest_secs)
}

/// Seconds spent working (rest excluded), main circuits weighted by
/// their repetitions
pub fn active_secs(structure: &ProgramStructure) -> u32 {
    circuit_secs(&structure.warmup, |e| e.active_secs)
        + structure
            .main
            .iter()
            .map(|c| circuit_secs(c, |e| e.active_secs) * c.repetitions)
            .sum::<u32>()
        + circuit_secs(&structure.cooldown, |e| e.active_secs)
}

/// Number of exercise entries across all sections.
///
/// Repetitions are deliberately not counted; this is the card's
/// "8 exercises" figure, not the number of playback steps.
pub fn exercise_count(structure: &ProgramStructure) -> usize {
    structure.warmup.exercises.len()
        + structure
            .main
            .iter()
            .map(|c| c.exercises.len())
            .sum::<usize>()
        + structure.cooldown.exercises.len()
}

fn circuit_secs<F: Fn(&crate::types::Exercise) -> u32>(circuit: &Circuit, f: F) -> u32 {
    circuit.exercises.iter().map(f).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Exercise;

    fn circuit(name: &str, reps: u32, exercises: Vec<Exercise>) -> Circuit {
        Circuit::new(name, reps).with_exercises(exercises)
    }

    /// Warmup: 1 exercise (10 active / 5 rest); main: 1 circuit x 2 reps of
    /// 1 exercise (20 active / 0 rest); cooldown: empty.
    fn sample_structure() -> ProgramStructure {
        ProgramStructure {
            name: "Sample".into(),
            warmup: circuit("Warmup", 1, vec![Exercise::new("Jumping jacks", 10, 5)]),
            main: vec![circuit("Block A", 2, vec![Exercise::new("Squats", 20, 0)])],
            cooldown: circuit("Cooldown", 1, vec![]),
        }
    }

    #[test]
    fn test_flatten_sample_structure() {
        let steps = flatten(&sample_structure());

        assert_eq!(steps.len(), 4);

        assert_eq!(steps[0].exercise_name, "Jumping jacks");
        assert_eq!(steps[0].duration_secs, 10);
        assert_eq!(steps[0].kind, StepKind::Active);
        assert_eq!(steps[0].phase, Phase::Warmup);
        assert_eq!(steps[0].circuit_repetition, None);

        assert_eq!(steps[1].kind, StepKind::Rest);
        assert_eq!(steps[1].duration_secs, 5);

        assert_eq!(steps[2].exercise_name, "Squats");
        assert_eq!(steps[2].phase, Phase::Main);
        assert_eq!(steps[2].circuit_name, "Block A");
        assert_eq!(steps[2].circuit_repetition, Some(1));

        assert_eq!(steps[3].circuit_repetition, Some(2));

        let total: u32 = steps.iter().map(|s| s.duration_secs).sum();
        assert_eq!(total, 55);
    }

    #[test]
    fn test_flatten_preserves_source_order() {
        let structure = ProgramStructure {
            name: "Ordered".into(),
            warmup: circuit("W", 1, vec![Exercise::new("w1", 5, 5)]),
            main: vec![
                circuit(
                    "A",
                    2,
                    vec![Exercise::new("a1", 10, 0), Exercise::new("a2", 10, 5)],
                ),
                circuit("B", 1, vec![Exercise::new("b1", 15, 0)]),
            ],
            cooldown: circuit("C", 1, vec![Exercise::new("c1", 20, 0)]),
        };

        let steps = flatten(&structure);
        let order: Vec<(Phase, &str, Option<u32>, StepKind)> = steps
            .iter()
            .map(|s| (s.phase, s.exercise_name.as_str(), s.circuit_repetition, s.kind))
            .collect();

        assert_eq!(
            order,
            vec![
                (Phase::Warmup, "w1", None, StepKind::Active),
                (Phase::Warmup, "w1", None, StepKind::Rest),
                (Phase::Main, "a1", Some(1), StepKind::Active),
                (Phase::Main, "a2", Some(1), StepKind::Active),
                (Phase::Main, "a2", Some(1), StepKind::Rest),
                (Phase::Main, "a1", Some(2), StepKind::Active),
                (Phase::Main, "a2", Some(2), StepKind::Active),
                (Phase::Main, "a2", Some(2), StepKind::Rest),
                (Phase::Main, "b1", Some(1), StepKind::Active),
                (Phase::Cooldown, "c1", None, StepKind::Active),
            ]
        );
    }

    #[test]
    fn test_flatten_skips_zero_durations() {
        let structure = ProgramStructure {
            name: "Zeroes".into(),
            warmup: circuit("W", 1, vec![Exercise::new("silent", 0, 0)]),
            main: vec![circuit("A", 3, vec![Exercise::new("rest-only", 0, 8)])],
            cooldown: circuit("C", 1, vec![]),
        };

        let steps = flatten(&structure);

        // The all-zero exercise vanishes; the rest-only one emits a single
        // rest step per repetition.
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.kind == StepKind::Rest));
        assert!(steps.iter().all(|s| s.duration_secs == 8));
    }

    #[test]
    fn test_flatten_all_zero_structure_is_empty() {
        let structure = ProgramStructure {
            name: "Nothing".into(),
            warmup: circuit("W", 1, vec![Exercise::new("a", 0, 0)]),
            main: vec![circuit("A", 5, vec![Exercise::new("b", 0, 0)])],
            cooldown: circuit("C", 1, vec![Exercise::new("c", 0, 0)]),
        };

        assert!(flatten(&structure).is_empty());
    }

    #[test]
    fn test_flatten_empty_circuit_ignores_repetitions() {
        let structure = ProgramStructure {
            name: "Hollow".into(),
            warmup: circuit("W", 1, vec![]),
            main: vec![circuit("A", 99, vec![])],
            cooldown: circuit("C", 1, vec![]),
        };

        assert!(flatten(&structure).is_empty());
    }

    #[test]
    fn test_step_count_matches_nonzero_intervals() {
        let structure = sample_structure();
        let steps = flatten(&structure);

        // warmup: active + rest = 2; main: 2 reps x (active only) = 2
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_summary_arithmetic() {
        let structure = sample_structure();

        assert_eq!(total_secs(&structure), 55);
        assert_eq!(active_secs(&structure), 50);
        assert_eq!(exercise_count(&structure), 2);
    }
}
