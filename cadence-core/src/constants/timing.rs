//! Physics / Render Timing Constants
//!
//! Physics ticks run at a fixed rate; render ticks run at whatever rate the
//! display allows. These values describe the fixed side.

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Default physics step (milliseconds).
///
/// 20 ms = 50 Hz, the usual fixed timestep of game physics engines.
pub const DEFAULT_PHYSICS_STEP_MS: u64 = 20;

/// Maximum physics ticks run for a single render frame.
///
/// After a long stall (loading hitch, debugger) the clock drops the
/// remaining backlog instead of replaying seconds of samples in one frame.
pub const DEFAULT_MAX_CATCH_UP_STEPS: u32 = 5;
