//! Session playback state machine.
//!
//! A [`SessionPlayer`] owns a flattened step sequence and walks it one
//! second at a time: a fixed preparation pre-roll, then each step's
//! countdown, until the last step finishes. The machine is driven entirely
//! by [`SessionPlayer::tick`] calls from an external clock (see
//! [`crate::clock`]), so tests advance logical time without waiting.

use crate::error::{Error, Result};
use crate::types::ExerciseStep;

/// Default pre-roll before the first step begins, in seconds
pub const DEFAULT_PREPARATION_SECS: u32 = 5;

/// Where the player currently is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerPhase {
    /// Pre-roll countdown; run time is not consumed yet
    Preparation,
    /// Counting down the current step
    Running,
    /// Terminal; further ticks are ignored
    Complete,
}

/// Countdown state machine over a fixed step sequence.
///
/// Pause is orthogonal to the phase: a paused player ignores ticks in both
/// `Preparation` and `Running` without losing its position.
pub struct SessionPlayer {
    steps: Vec<ExerciseStep>,
    phase: PlayerPhase,
    current_index: usize,
    time_left: u32,
    prep_left: u32,
    paused: bool,
    on_complete: Option<Box<dyn FnOnce() + Send>>,
}

impl SessionPlayer {
    /// Create a player over a non-empty step sequence.
    ///
    /// Returns [`Error::EmptyTimeline`] if there is nothing to play; the
    /// machine is never constructed in that case, so an unplayable program
    /// cannot start counting down.
    pub fn new(steps: Vec<ExerciseStep>, preparation_secs: u32) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyTimeline);
        }

        let time_left = steps[0].duration_secs;
        let phase = if preparation_secs > 0 {
            PlayerPhase::Preparation
        } else {
            PlayerPhase::Running
        };

        tracing::info!(
            "Session initialized: {} steps, {}s preparation",
            steps.len(),
            preparation_secs
        );

        Ok(Self {
            steps,
            phase,
            current_index: 0,
            time_left,
            prep_left: preparation_secs,
            paused: false,
            on_complete: None,
        })
    }

    /// Register the one-shot completion hook.
    ///
    /// Invoked exactly once, on the tick or skip that first completes the
    /// session. Reading `is_complete` afterwards never re-triggers it.
    pub fn on_complete<F>(&mut self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(hook));
    }

    /// Advance logical time by one second.
    ///
    /// No-op while paused or after completion.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        match self.phase {
            PlayerPhase::Preparation => {
                self.prep_left = self.prep_left.saturating_sub(1);
                if self.prep_left == 0 {
                    // The transition itself consumes no run time; the next
                    // tick is the first second of the first step.
                    self.phase = PlayerPhase::Running;
                    tracing::debug!("Preparation finished, session running");
                }
            }
            PlayerPhase::Running => {
                self.time_left = self.time_left.saturating_sub(1);
                if self.time_left == 0 {
                    self.advance();
                }
            }
            PlayerPhase::Complete => {}
        }
    }

    /// Flip the paused flag; freezes both preparation and run countdowns
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::debug!("Pause toggled: {}", self.paused);
    }

    /// Jump past the remainder of the current step.
    ///
    /// On the final step this completes the session directly, without a
    /// duration having to elapse.
    pub fn skip(&mut self) {
        if self.phase == PlayerPhase::Complete {
            return;
        }
        self.advance();
    }

    /// End the preparation pre-roll early
    pub fn skip_preparation(&mut self) {
        if self.phase == PlayerPhase::Preparation {
            self.prep_left = 0;
            self.phase = PlayerPhase::Running;
        }
    }

    fn advance(&mut self) {
        let next = self.current_index + 1;
        if next >= self.steps.len() {
            self.complete();
        } else {
            self.current_index = next;
            self.time_left = self.steps[next].duration_secs;
        }
    }

    fn complete(&mut self) {
        self.phase = PlayerPhase::Complete;
        self.time_left = 0;
        tracing::info!("Session complete after {} steps", self.steps.len());
        if let Some(hook) = self.on_complete.take() {
            hook();
        }
    }

    // ========================================================================
    // Read-only accessors for display wiring
    // ========================================================================

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PlayerPhase::Complete
    }

    /// Seconds left in the current step
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Seconds left in the preparation pre-roll
    pub fn prep_left(&self) -> u32 {
        self.prep_left
    }

    pub fn current_step(&self) -> &ExerciseStep {
        &self.steps[self.current_index]
    }

    pub fn next_step(&self) -> Option<&ExerciseStep> {
        self.steps.get(self.current_index + 1)
    }

    /// 0-based position in the step sequence
    pub fn step_index(&self) -> usize {
        self.current_index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Progress through the sequence, counting the current step as reached
    pub fn progress_percent(&self) -> f64 {
        (self.current_index + 1) as f64 / self.steps.len() as f64 * 100.0
    }
}
