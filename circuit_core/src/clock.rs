//! Clock abstraction for driving session playback.
//!
//! The player itself is clock-free (tests call `tick()` directly); this
//! module supplies the production tick source. A [`TickSource`] delivers
//! one callback per elapsed second, and the returned [`TickHandle`] stops
//! delivery when dropped, so an abandoned session can never keep mutating
//! a discarded player.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// A source of periodic one-second ticks
pub trait TickSource {
    /// Start delivering ticks to `on_tick`; delivery stops when the
    /// returned handle is dropped or stopped.
    fn subscribe(&self, on_tick: Box<dyn FnMut() + Send>) -> TickHandle;
}

/// Scoped subscription to a tick source.
///
/// Dropping the handle releases the subscription on every exit path,
/// including panics unwinding through the session loop.
pub struct TickHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickHandle {
    /// Stop tick delivery and wait for the delivery thread to finish
    pub fn stop(mut self) {
        self.stop_inner();
    }

    fn stop_inner(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.stop_inner();
    }
}

/// Wall-clock tick source backed by a background thread
pub struct WallClock {
    period: Duration,
}

impl WallClock {
    /// One tick per second, the granularity the player is specified at
    pub fn new() -> Self {
        Self {
            period: Duration::from_secs(1),
        }
    }

    /// Custom period, used by tests to run faster than real time
    pub fn with_period(period: Duration) -> Self {
        Self { period }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn subscribe(&self, mut on_tick: Box<dyn FnMut() + Send>) -> TickHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let period = self.period;

        let thread = std::thread::spawn(move || {
            // Sleep in short slices so a stop request is observed promptly
            // even with a one-second period.
            let slice = period.min(Duration::from_millis(50));
            let mut elapsed = Duration::ZERO;
            loop {
                if stop_flag.load(Ordering::SeqCst) {
                    return;
                }
                std::thread::sleep(slice);
                elapsed += slice;
                if elapsed >= period {
                    elapsed = Duration::ZERO;
                    if stop_flag.load(Ordering::SeqCst) {
                        return;
                    }
                    on_tick();
                }
            }
        });

        tracing::debug!("Tick subscription started ({:?} period)", period);

        TickHandle {
            stop,
            thread: Some(thread),
        }
    }
}
