//! Synthetic tracked-point traces
//!
//! Head height while walking in place is close to a sinusoid: one up-down
//! cycle per step, a few centimetres of travel, around standing eye height.

use core::f32::consts::TAU;

/// Typical standing eye height in metres
pub const EYE_HEIGHT_M: f32 = 1.62;

/// Parameters of a walking-in-place bob
#[derive(Debug, Clone, Copy)]
pub struct Bob {
    /// Samples per full up-down cycle
    pub period_samples: f32,
    /// Half of the peak-to-trough travel
    pub amplitude: f32,
    /// Height the bob oscillates around
    pub baseline: f32,
    /// Phase offset in radians
    pub phase: f32,
}

impl Bob {
    /// Relaxed walk: ~2 steps per second at 50 Hz, 3 cm each way
    pub fn relaxed() -> Self {
        Self {
            period_samples: 25.0,
            amplitude: 0.03,
            baseline: EYE_HEIGHT_M,
            phase: 0.0,
        }
    }

    /// Same bob with a different period
    pub fn with_period(mut self, period_samples: f32) -> Self {
        self.period_samples = period_samples;
        self
    }

    /// Same bob with a different amplitude
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Height at sample `index`
    pub fn at(&self, index: usize) -> f32 {
        let angle = TAU * index as f32 / self.period_samples + self.phase;
        self.baseline + self.amplitude * libm::sinf(angle)
    }

    /// First `len` samples
    pub fn samples(&self, len: usize) -> Vec<f32> {
        (0..len).map(|i| self.at(i)).collect()
    }
}

/// Pure sine with integer period, peaks landing exactly on samples
pub fn sine(len: usize, period: usize) -> Vec<f32> {
    (0..len)
        .map(|i| libm::sinf(TAU * (i % period) as f32 / period as f32))
        .collect()
}

/// `start, start + step, ...` with integer steps so spans stay exact
pub fn ramp(len: usize, start: i32, step: i32) -> Vec<f32> {
    (0..len as i32).map(|i| (start + i * step) as f32).collect()
}

/// Standing still
pub fn still(len: usize, height: f32) -> Vec<f32> {
    vec![height; len]
}
