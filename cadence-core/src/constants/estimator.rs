//! Estimator Defaults and Tuning Ranges
//!
//! Defaults match the values designers start from in the locomotion
//! provider inspector. The recommended ranges are soft: values outside them
//! are accepted and logged, only the structural limits are enforced.

use core::ops::RangeInclusive;

// ===== WINDOW =====

/// Default number of samples collected before an estimate is produced.
///
/// 100 samples at the default 50 Hz physics rate is a 2 second window,
/// long enough to hold a few strides of walking in place.
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Recommended window sizes (samples).
pub const RECOMMENDED_WINDOW_SIZE: RangeInclusive<usize> = 50..=1000;

/// Largest window accepted by validation (samples).
///
/// 65536 samples is over 20 minutes at 50 Hz and 256 KiB of buffer. The
/// buffer is allocated up front, so anything larger is refused rather
/// than handed to the allocator.
pub const MAX_WINDOW_SIZE: usize = 65_536;

// ===== NEIGHBOURHOOD =====

/// Default number of samples examined on each side of a candidate.
pub const DEFAULT_NEIGHBOURHOOD_RADIUS: usize = 5;

/// Smallest radius that still has neighbours to compare against.
pub const MIN_NEIGHBOURHOOD_RADIUS: usize = 1;

/// Recommended neighbourhood radii (samples).
pub const RECOMMENDED_NEIGHBOURHOOD_RADIUS: RangeInclusive<usize> = 5..=20;

// ===== SCALING =====

/// Default linear multiplier from cadence intensity to speed.
pub const DEFAULT_SPEED_SCALE: f32 = 1.0;

/// Recommended speed scale (unitless).
pub const RECOMMENDED_SPEED_SCALE: RangeInclusive<f32> = 1.0..=50.0;

// ===== READINESS =====

/// Percentage of the window that must be filled before evaluation.
///
/// 90% rather than 100% so a single dropped physics tick does not stall
/// the estimate for a whole extra window. Possibly looser than intended:
/// the last 10% of a window can be skipped entirely.
pub const DEFAULT_READY_FILL_PERCENT: u8 = 90;

/// Upper bound for the fill threshold (a completely full window).
pub const MAX_READY_FILL_PERCENT: u8 = 100;
