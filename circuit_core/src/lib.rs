#![forbid(unsafe_code)]

//! Core domain model and business logic for the Circo session builder.
//!
//! This crate provides:
//! - Domain types (exercises, circuits, programs, playback steps)
//! - Timeline flattening (nested structure to linear step sequence)
//! - Session playback state machine with an injected clock seam
//! - In-memory program library and built-in demo programs
//! - Weekly goal tracking

pub mod types;
pub mod error;
pub mod timeline;
pub mod session;
pub mod clock;
pub mod library;
pub mod builtin;
pub mod goals;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use timeline::flatten;
pub use session::{PlayerPhase, SessionPlayer, DEFAULT_PREPARATION_SECS};
pub use clock::{TickHandle, TickSource, WallClock};
pub use library::ProgramLibrary;
pub use builtin::{build_default_library, build_default_library_with_rate, default_library};
pub use goals::WeeklyGoal;
pub use config::Config;
