//! Capability traits for the locomotion glue
//!
//! The estimator never sees a scene graph. The host exposes exactly three
//! narrow capabilities, each allowed to be temporarily unavailable:
//!
//! - [`SampleSource`]: where the tracked point is this physics tick
//! - [`DirectionSource`]: which way the subject faces this render tick
//! - [`ForceSink`]: where the resulting propulsion force goes
//!
//! A source returning `None` means "no update this tick"; the driver skips
//! the tick instead of failing.
//!
//! ```rust
//! use cadence_core::{SampleSource, Vec3};
//!
//! struct Headset { pose: Option<Vec3> }
//!
//! impl SampleSource for Headset {
//!     fn current_position(&mut self) -> Option<Vec3> {
//!         self.pose
//!     }
//! }
//! ```

use crate::math::Vec3;

/// Tracked point position, read once per physics tick
pub trait SampleSource {
    /// Current position, or `None` when tracking is lost
    fn current_position(&mut self) -> Option<Vec3>;
}

/// Subject facing, read once per render tick
pub trait DirectionSource {
    /// Current forward vector, or `None` when the subject is absent
    ///
    /// Expected to be unit length; the driver normalizes it anyway.
    fn forward(&self) -> Option<Vec3>;
}

/// Consumer of propulsion forces (usually a rigid body)
pub trait ForceSink {
    /// Add `force` for this render tick
    fn apply_force(&mut self, force: Vec3);

    /// False while the body is missing; the driver then skips the tick
    fn is_available(&self) -> bool {
        true
    }
}
