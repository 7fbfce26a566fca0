//! Error Types for Estimator Configuration and Evaluation
//!
//! ## Design Philosophy
//!
//! The estimator runs inside per-tick callbacks, so its errors follow the
//! same rules as the rest of the hot path:
//!
//! 1. **Small Size**: every variant is a handful of words, no heap data.
//! 2. **Copy Semantics**: errors can be returned, stored and compared freely.
//! 3. **Static Reasons**: human-readable context is `&'static str`.
//!
//! ## Error Categories
//!
//! ### Configuration
//! - `InvalidConfiguration`: window too small for the neighbourhood or too
//!   large to allocate, radius below one, negative or non-finite speed
//!   scale, bad fill threshold.
//!   Fatal to configuration; the estimator keeps its previous settings.
//!
//! ### Evaluation
//! - `NotReady`: `evaluate()` was called before the window reached its fill
//!   threshold. Nothing is consumed; keep pushing samples.
//!
//! Missing inputs (no tracked point this tick, no forward vector, no physics
//! body) are never errors. The locomotion glue skips the tick instead.
//!
//! ```rust
//! use cadence_core::{CadenceEstimator, EstimatorConfig, EstimatorError};
//!
//! let config = EstimatorConfig::default().with_window_size(10).with_neighbourhood_radius(5);
//! match CadenceEstimator::new(config) {
//!     Err(EstimatorError::InvalidConfiguration { reason, .. }) => {
//!         // 10 samples cannot hold a 5-sample neighbourhood on both sides
//!         assert!(!reason.is_empty());
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for estimator operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Estimator errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimatorError {
    /// Configuration rejected; the estimator must not be used with it
    #[error(
        "Invalid configuration (window {window_size}, radius {neighbourhood_radius}): {reason}"
    )]
    InvalidConfiguration {
        /// What was wrong
        reason: &'static str,
        /// Requested window size
        window_size: usize,
        /// Requested neighbourhood radius
        neighbourhood_radius: usize,
    },

    /// Window has not reached its fill threshold yet
    #[error("Window not ready: need {required} samples, have {available}")]
    NotReady {
        /// Samples needed before evaluation
        required: usize,
        /// Samples currently buffered
        available: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for EstimatorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidConfiguration {
                reason,
                window_size,
                neighbourhood_radius,
            } => defmt::write!(
                fmt,
                "Invalid config (N={}, R={}): {}",
                window_size,
                neighbourhood_radius,
                reason
            ),
            Self::NotReady {
                required,
                available,
            } => defmt::write!(fmt, "Need {} samples, have {}", required, available),
        }
    }
}
