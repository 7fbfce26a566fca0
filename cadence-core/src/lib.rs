//! Cadence-driven locomotion core
//!
//! Infers forward travel speed from the vertical bobbing of a single tracked
//! point (usually the head) and turns it into a propulsion force along the
//! subject's facing direction. No gait gesture or button press is needed:
//! walking in place is the input.
//!
//! The numeric heart is [`CadenceEstimator`], a fixed-window accumulator fed
//! once per physics tick. Everything around it is thin glue:
//!
//! - [`CadencePropulsion`] exposes the two tick entry points
//!   (`on_physics_tick` / `on_render_tick`) and holds the current speed
//! - [`LocomotionDriver`] wires injected capabilities ([`SampleSource`],
//!   [`DirectionSource`], [`ForceSink`]) to those entry points
//! - [`FixedStepClock`] lets a caller-owned loop decide how many physics
//!   ticks are due per frame
//!
//! Key constraints:
//! - Single allocation at configuration time, none per tick
//! - Deterministic: same samples and config give the same speed
//! - `no_std` + `alloc` compatible
//!
//! ```no_run
//! use cadence_core::{CadenceEstimator, EstimatorConfig};
//!
//! let mut estimator = CadenceEstimator::new(EstimatorConfig::default())?;
//!
//! // Once per physics tick, feed the head height
//! estimator.push_sample(1.62);
//!
//! // Once per render tick, pick up a new estimate when a window is complete
//! if estimator.is_ready_to_evaluate() {
//!     let estimate = estimator.evaluate()?;
//!     println!("speed = {}", estimate.speed);
//! }
//! # Ok::<(), cadence_core::EstimatorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod extrema;
pub mod locomotion;
pub mod math;
pub mod time;
pub mod traits;

// Public API
pub use config::{Axis, EstimatorConfig, ExtremumTest, LocomotionConfig};
pub use errors::{EstimatorError, EstimatorResult};
pub use estimator::{CadenceEstimator, Estimate, PushOutcome};
pub use locomotion::{CadencePropulsion, LocomotionDriver};
pub use math::Vec3;
pub use time::{FixedStepClock, Timestamp};
pub use traits::{DirectionSource, ForceSink, SampleSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
