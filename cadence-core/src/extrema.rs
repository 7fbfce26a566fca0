//! Symmetric Neighbourhood Extremum Scan
//!
//! ## Overview
//!
//! Counting local extrema over a fixed window approximates how often the
//! tracked point changes direction, which is the cadence of the bob. The
//! spread of each neighbourhood measures how big the bob is. Their product
//! is a "how fast and how big" intensity with no spectral transform.
//!
//! ## Algorithm
//!
//! For each candidate `i` in `[R, len - R)`:
//!
//! ```text
//!   samples:  ... s[i-R] .. s[i-1]  s[i]  s[i+1] .. s[i+R] ...
//!                 └──── 2R neighbours, s[i] excluded ────┘
//!
//!   extremum   if s[i] <= min(neighbours) or s[i] >= max(neighbours)
//!   amplitude  = max(neighbours) - min(neighbours)   (always recorded)
//! ```
//!
//! The first and last `R` samples are never candidates. A genuine peak in
//! those slots is missed; the scan never reads out of range.
//!
//! ## Cost
//!
//! O(len * R) comparisons, no allocation. The amplitude mean is accumulated
//! as a running sum rather than a stored sequence.

use crate::config::ExtremumTest;

/// Result of scanning one window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowScan {
    /// Candidates classified as a local minimum or maximum
    pub extremum_count: usize,

    /// Candidates examined (`len - 2R`, or 0)
    pub candidate_count: usize,

    /// Mean neighbourhood span over all candidates, 0 when there were none
    pub mean_amplitude: f32,
}

impl WindowScan {
    /// Unscaled cadence intensity: `extremum_count * mean_amplitude`
    pub fn intensity(&self) -> f32 {
        self.extremum_count as f32 * self.mean_amplitude
    }
}

/// Min and max of the `2 * radius` neighbours around `center`, excluding it
///
/// Returns `None` when the neighbourhood would leave the slice.
pub fn neighbourhood_bounds(samples: &[f32], center: usize, radius: usize) -> Option<(f32, f32)> {
    let end = center.checked_add(radius)?;
    if radius == 0 || center < radius || end >= samples.len() {
        return None;
    }

    let before = &samples[center - radius..center];
    let after = &samples[center + 1..=end];

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &value in before.iter().chain(after) {
        min = min.min(value);
        max = max.max(value);
    }

    Some((min, max))
}

/// Scan `samples` for extrema with the given radius and rule
pub fn scan_window(samples: &[f32], radius: usize, test: ExtremumTest) -> WindowScan {
    if radius == 0 || samples.len() <= radius.saturating_mul(2) {
        return WindowScan::default();
    }

    let mut extremum_count = 0usize;
    let mut amplitude_sum = 0.0f32;
    let mut candidate_count = 0usize;

    for i in radius..samples.len() - radius {
        let Some((min, max)) = neighbourhood_bounds(samples, i, radius) else {
            continue;
        };

        if test.is_extremum(samples[i], min, max) {
            extremum_count += 1;
        }
        amplitude_sum += max - min;
        candidate_count += 1;
    }

    let mean_amplitude = if candidate_count == 0 {
        0.0
    } else {
        amplitude_sum / candidate_count as f32
    };

    WindowScan {
        extremum_count,
        candidate_count,
        mean_amplitude,
    }
}
