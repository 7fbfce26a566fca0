//! Time handling for the physics/render split
//!
//! There is no global clock. The host owns time and hands timestamps in:
//! - [`TimeSource`]: anything that can report "now" in milliseconds
//! - [`FixedTime`]: a settable source for tests and replays
//! - [`FixedStepClock`]: turns frame timestamps into a count of due physics
//!   ticks

use crate::constants::timing::{DEFAULT_MAX_CATCH_UP_STEPS, DEFAULT_PHYSICS_STEP_MS};

/// Timestamp in milliseconds since an arbitrary, monotonic origin
pub type Timestamp = u64;

/// Source of time for the host loop
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Fixed time source for testing
#[derive(Debug, Clone, Default)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Source reporting `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Fixed-timestep accumulator
///
/// Each render frame reports its timestamp; the clock answers how many
/// physics steps have elapsed since the previous frame. Leftover time
/// carries into the next frame. When more than `max_catch_up_steps` are due,
/// only that many run and the rest of the backlog is dropped.
///
/// ```rust
/// use cadence_core::FixedStepClock;
///
/// let mut clock = FixedStepClock::new(20, 5);
/// assert_eq!(clock.advance(1_000), 0); // first frame sets the origin
/// assert_eq!(clock.advance(1_050), 2); // 50 ms = two 20 ms steps, 10 ms carried
/// assert_eq!(clock.advance(1_060), 1); // 10 + 10 ms
/// ```
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step_ms: u64,
    max_catch_up_steps: u32,
    last_frame: Option<Timestamp>,
    accumulator_ms: u64,
    skipped_steps: u64,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(DEFAULT_PHYSICS_STEP_MS, DEFAULT_MAX_CATCH_UP_STEPS)
    }
}

impl FixedStepClock {
    /// Clock with the given step; zero values are raised to 1
    pub fn new(step_ms: u64, max_catch_up_steps: u32) -> Self {
        Self {
            step_ms: step_ms.max(1),
            max_catch_up_steps: max_catch_up_steps.max(1),
            last_frame: None,
            accumulator_ms: 0,
            skipped_steps: 0,
        }
    }

    /// Register a frame at `now`; returns physics steps due
    ///
    /// A timestamp earlier than the previous frame counts as zero elapsed.
    pub fn advance(&mut self, now: Timestamp) -> u32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0;
        };

        self.accumulator_ms = self
            .accumulator_ms
            .saturating_add(now.saturating_sub(last));

        let due = self.accumulator_ms / self.step_ms;
        if due > self.max_catch_up_steps as u64 {
            let skipped = due - self.max_catch_up_steps as u64;
            log_warn!(
                "Frame hitch: {} physics steps due, running {}, skipping {}",
                due,
                self.max_catch_up_steps,
                skipped
            );
            self.skipped_steps = self.skipped_steps.saturating_add(skipped);
            self.accumulator_ms %= self.step_ms;
            return self.max_catch_up_steps;
        }

        self.accumulator_ms -= due * self.step_ms;
        due as u32
    }

    /// Forget the previous frame; the next `advance` sets a new origin
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.accumulator_ms = 0;
    }

    /// Physics step in milliseconds
    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Steps discarded by hitch protection since construction
    pub fn skipped_steps(&self) -> u64 {
        self.skipped_steps
    }
}
