//! Estimator and locomotion configuration
//!
//! Three designer-facing tunables drive the estimator: window size,
//! neighbourhood radius and speed scale. Two looser knobs that earlier
//! tuning left implicit are exposed as well:
//!
//! - `ready_fill_percent`: how full the window must be before evaluating
//! - `extremum_test`: whether plateaus count as extrema
//!
//! Configs are plain data. Nothing is checked until [`EstimatorConfig::validate`]
//! runs, which the estimator does on construction and on every `configure`.
//!
//! ```rust
//! use cadence_core::EstimatorConfig;
//!
//! let config = EstimatorConfig::default()
//!     .with_window_size(200)
//!     .with_neighbourhood_radius(8)
//!     .with_speed_scale(12.0);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.ready_threshold(), 180);
//! ```

use crate::{
    constants::{
        estimator::{
            DEFAULT_NEIGHBOURHOOD_RADIUS, DEFAULT_READY_FILL_PERCENT, DEFAULT_SPEED_SCALE,
            DEFAULT_WINDOW_SIZE, MAX_READY_FILL_PERCENT, MAX_WINDOW_SIZE,
            MIN_NEIGHBOURHOOD_RADIUS, RECOMMENDED_NEIGHBOURHOOD_RADIUS, RECOMMENDED_SPEED_SCALE,
            RECOMMENDED_WINDOW_SIZE,
        },
        timing::{DEFAULT_MAX_CATCH_UP_STEPS, DEFAULT_PHYSICS_STEP_MS},
    },
    errors::{EstimatorError, EstimatorResult},
    math::Vec3,
};

/// How a candidate sample is compared against its neighbourhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtremumTest {
    /// `sample <= min || sample >= max`.
    ///
    /// Flat runs count as extrema, which inflates the count on plateaus.
    /// Kept as the default because existing speed scales were tuned with it.
    #[default]
    NonStrict,

    /// `sample < min || sample > max`; plateaus never count
    Strict,
}

impl ExtremumTest {
    /// Classify `value` against the neighbourhood bounds
    #[inline]
    pub fn is_extremum(self, value: f32, min: f32, max: f32) -> bool {
        match self {
            Self::NonStrict => value <= min || value >= max,
            Self::Strict => value < min || value > max,
        }
    }
}

/// Which component of a tracked position feeds the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Lateral
    X,
    /// Vertical (head bob)
    #[default]
    Y,
    /// Depth
    Z,
}

impl Axis {
    /// Extract this axis from a position
    #[inline]
    pub fn component(self, position: Vec3) -> f32 {
        match self {
            Self::X => position.x,
            Self::Y => position.y,
            Self::Z => position.z,
        }
    }
}

/// Cadence estimator tunables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EstimatorConfig {
    /// Samples collected before an estimate is produced (`N`)
    pub window_size: usize,

    /// Samples examined on each side of a candidate (`R`)
    pub neighbourhood_radius: usize,

    /// Linear multiplier from cadence intensity to speed
    pub speed_scale: f32,

    /// Fill percentage of the window required before evaluation
    pub ready_fill_percent: u8,

    /// Extremum classification rule
    pub extremum_test: ExtremumTest,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            neighbourhood_radius: DEFAULT_NEIGHBOURHOOD_RADIUS,
            speed_scale: DEFAULT_SPEED_SCALE,
            ready_fill_percent: DEFAULT_READY_FILL_PERCENT,
            extremum_test: ExtremumTest::NonStrict,
        }
    }
}

impl EstimatorConfig {
    /// Config from the three primary tunables, other knobs at defaults
    pub fn new(window_size: usize, neighbourhood_radius: usize, speed_scale: f32) -> Self {
        Self {
            window_size,
            neighbourhood_radius,
            speed_scale,
            ..Self::default()
        }
    }

    /// Short window: reacts within about a second at 50 Hz
    pub fn responsive() -> Self {
        Self::new(50, 5, 2.0)
    }

    /// Long window: steadier speed, slower to start and stop
    pub fn smooth() -> Self {
        Self::new(250, 10, 1.0)
    }

    /// Set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set neighbourhood radius
    pub fn with_neighbourhood_radius(mut self, radius: usize) -> Self {
        self.neighbourhood_radius = radius;
        self
    }

    /// Set speed scale
    pub fn with_speed_scale(mut self, speed_scale: f32) -> Self {
        self.speed_scale = speed_scale;
        self
    }

    /// Set fill threshold percentage
    pub fn with_ready_fill_percent(mut self, percent: u8) -> Self {
        self.ready_fill_percent = percent;
        self
    }

    /// Set extremum rule
    pub fn with_extremum_test(mut self, test: ExtremumTest) -> Self {
        self.extremum_test = test;
        self
    }

    /// Check structural limits
    ///
    /// Rejects `R < 1`, `N <= 2R`, `N` above [`MAX_WINDOW_SIZE`], a negative
    /// or non-finite speed scale and a fill threshold outside `1..=100`.
    /// Values that are merely outside the recommended ranges pass.
    pub fn validate(&self) -> EstimatorResult<()> {
        if self.neighbourhood_radius < MIN_NEIGHBOURHOOD_RADIUS {
            return Err(self.invalid("neighbourhood radius must be at least 1"));
        }

        // N > 2R, written to stay clear of overflow on absurd radii
        if self.window_size / 2 < self.neighbourhood_radius
            || self.window_size - self.neighbourhood_radius <= self.neighbourhood_radius
        {
            return Err(self.invalid("window size must exceed twice the neighbourhood radius"));
        }

        if self.window_size > MAX_WINDOW_SIZE {
            return Err(self.invalid("window size exceeds the maximum buffer length"));
        }

        if !self.speed_scale.is_finite() || self.speed_scale < 0.0 {
            return Err(self.invalid("speed scale must be finite and non-negative"));
        }

        if self.ready_fill_percent == 0 || self.ready_fill_percent > MAX_READY_FILL_PERCENT {
            return Err(self.invalid("ready fill percent must be in 1..=100"));
        }

        Ok(())
    }

    /// Smallest sample count at which the window is ready
    ///
    /// `ceil(N * percent / 100)` in integer arithmetic, so 90% of 10 is
    /// exactly 9 and 90% of 11 is 10.
    pub fn ready_threshold(&self) -> usize {
        let percent = self.ready_fill_percent as usize;
        self.window_size.saturating_mul(percent).saturating_add(99) / 100
    }

    /// Number of candidate indices in a full window (`N - 2R`)
    pub fn candidate_count(&self) -> usize {
        self.window_size
            .saturating_sub(self.neighbourhood_radius.saturating_mul(2))
    }

    /// Warn about tunables outside the recommended ranges
    pub(crate) fn log_unusual_tuning(&self) {
        if !RECOMMENDED_WINDOW_SIZE.contains(&self.window_size) {
            log_warn!(
                "Window size {} outside recommended {:?}",
                self.window_size,
                RECOMMENDED_WINDOW_SIZE
            );
        }
        if !RECOMMENDED_NEIGHBOURHOOD_RADIUS.contains(&self.neighbourhood_radius) {
            log_warn!(
                "Neighbourhood radius {} outside recommended {:?}",
                self.neighbourhood_radius,
                RECOMMENDED_NEIGHBOURHOOD_RADIUS
            );
        }
        if !RECOMMENDED_SPEED_SCALE.contains(&self.speed_scale) {
            log_warn!(
                "Speed scale {} outside recommended {:?}",
                self.speed_scale,
                RECOMMENDED_SPEED_SCALE
            );
        }
    }

    fn invalid(&self, reason: &'static str) -> EstimatorError {
        EstimatorError::InvalidConfiguration {
            reason,
            window_size: self.window_size,
            neighbourhood_radius: self.neighbourhood_radius,
        }
    }
}

/// Settings for the locomotion glue around the estimator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocomotionConfig {
    /// Estimator tunables
    pub estimator: EstimatorConfig,

    /// Position component fed to the estimator
    pub axis: Axis,

    /// Fixed physics step in milliseconds
    pub physics_step_ms: u64,

    /// Physics ticks allowed per render frame before the backlog is dropped
    pub max_catch_up_steps: u32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig::default(),
            axis: Axis::Y,
            physics_step_ms: DEFAULT_PHYSICS_STEP_MS,
            max_catch_up_steps: DEFAULT_MAX_CATCH_UP_STEPS,
        }
    }
}

impl LocomotionConfig {
    /// Locomotion settings around the given estimator config
    pub fn new(estimator: EstimatorConfig) -> Self {
        Self {
            estimator,
            ..Self::default()
        }
    }

    /// Validate the estimator config and the timing settings
    pub fn validate(&self) -> EstimatorResult<()> {
        self.estimator.validate()?;

        if self.physics_step_ms == 0 {
            return Err(self.estimator.invalid("physics step must be at least 1 ms"));
        }
        if self.max_catch_up_steps == 0 {
            return Err(self.estimator.invalid("max catch-up steps must be at least 1"));
        }

        Ok(())
    }
}
