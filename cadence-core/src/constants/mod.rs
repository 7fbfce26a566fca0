//! Constants for the Cadence Core
//!
//! Centralised tunables and defaults. Every number the estimator or the
//! locomotion glue relies on is named here, with its unit in the name where
//! one applies.
//!
//! ## Organization
//!
//! - **Estimator**: window, neighbourhood and scaling defaults plus the
//!   recommended designer ranges
//! - **Timing**: physics step and frame catch-up limits

/// Estimator defaults and recommended tuning ranges.
pub mod estimator;

/// Fixed-step timing for the physics/render tick split.
pub mod timing;

// Re-export commonly used constants for convenience
pub use estimator::{
    DEFAULT_NEIGHBOURHOOD_RADIUS, DEFAULT_READY_FILL_PERCENT, DEFAULT_SPEED_SCALE,
    DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE, MIN_NEIGHBOURHOOD_RADIUS,
};

pub use timing::{DEFAULT_MAX_CATCH_UP_STEPS, DEFAULT_PHYSICS_STEP_MS, MS_PER_SECOND};
