//! Cadence Speed Estimator
//!
//! ## Overview
//!
//! A fixed-window accumulator. Physics ticks push one scalar position each;
//! once the window is full enough, a render tick evaluates it into a speed
//! and the window starts over.
//!
//! ```text
//!   push_sample ──► [s0 s1 s2 ... s(w-1) | stale ... ]   w = write_index
//!                                       ▲
//!                    ready when w >= ready_fill_percent% of N
//!
//!   evaluate ──► scan s[0..w] ──► count * mean_amplitude * speed_scale
//!            └─► write_index = 0
//! ```
//!
//! ## Buffer Policy
//!
//! The buffer is allocated once per `configure` and never grows. Unlike a
//! ring buffer, the write index does not wrap: once `N` samples are stored,
//! further pushes are dropped until the next evaluation. Memory stays
//! bounded at the cost of losing samples when the consumer is slow. Drops
//! are counted and reported through [`PushOutcome::DroppedFull`].
//!
//! Slots at or past `write_index` still hold the previous window's data.
//! They are never read, since the scan only covers `[0, write_index)`.
//!
//! ## Thread Safety
//!
//! Not synchronized. Physics and render ticks are expected on the same
//! logical thread. A host that splits them across threads must put the
//! estimator behind a single mutex.

use alloc::vec::Vec;

use crate::{
    config::EstimatorConfig,
    errors::{EstimatorError, EstimatorResult},
    extrema::{scan_window, WindowScan},
};

/// What happened to a pushed sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PushOutcome {
    /// Written at the previous write index
    Stored,
    /// Window already full; sample discarded
    DroppedFull,
    /// NaN or infinite; sample discarded
    RejectedNonFinite,
}

impl PushOutcome {
    /// True if the sample made it into the window
    pub fn is_stored(self) -> bool {
        matches!(self, Self::Stored)
    }
}

/// One completed window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// `extremum_count * mean_amplitude * speed_scale`, never negative
    pub speed: f32,

    /// Local minima and maxima found
    pub extremum_count: usize,

    /// Candidate indices examined
    pub candidate_count: usize,

    /// Mean neighbourhood span
    pub mean_amplitude: f32,

    /// Samples in the window when it was evaluated
    pub samples_used: usize,
}

/// Head-bob cadence to speed estimator
#[derive(Debug, Clone)]
pub struct CadenceEstimator {
    config: EstimatorConfig,
    samples: Vec<f32>,
    write_index: usize,

    // Diagnostics
    dropped_in_window: usize,
    dropped_total: u64,
    windows_evaluated: u64,
}

impl CadenceEstimator {
    /// Create an estimator, validating `config`
    pub fn new(config: EstimatorConfig) -> EstimatorResult<Self> {
        config.validate()?;
        config.log_unusual_tuning();

        Ok(Self {
            config,
            samples: alloc::vec![0.0; config.window_size],
            write_index: 0,
            dropped_in_window: 0,
            dropped_total: 0,
            windows_evaluated: 0,
        })
    }

    /// Replace the configuration
    ///
    /// On success the buffer is resized to the new window, zeroed, and the
    /// write index returns to 0. Calling this twice with the same config is
    /// the same as calling it once. On failure nothing changes.
    pub fn configure(&mut self, config: EstimatorConfig) -> EstimatorResult<()> {
        config.validate()?;
        config.log_unusual_tuning();

        self.samples.clear();
        self.samples.resize(config.window_size, 0.0);
        self.config = config;
        self.write_index = 0;
        self.dropped_in_window = 0;

        log_debug!(
            "Estimator configured: N={}, R={}, scale={}, ready at {}",
            config.window_size,
            config.neighbourhood_radius,
            config.speed_scale,
            config.ready_threshold()
        );

        Ok(())
    }

    /// Append one sample to the current window
    ///
    /// Stored only while the window has room; once full, samples are
    /// dropped until the next [`evaluate`](Self::evaluate). Non-finite
    /// values are rejected so one bad pose cannot poison a window.
    pub fn push_sample(&mut self, value: f32) -> PushOutcome {
        if !value.is_finite() {
            log_trace!("Rejected non-finite sample {}", value);
            return PushOutcome::RejectedNonFinite;
        }

        if self.write_index >= self.samples.len() {
            if self.dropped_in_window == 0 {
                log_warn!(
                    "Sample window full ({} samples), dropping until next evaluation",
                    self.samples.len()
                );
            }
            self.dropped_in_window += 1;
            self.dropped_total += 1;
            return PushOutcome::DroppedFull;
        }

        self.samples[self.write_index] = value;
        self.write_index += 1;
        PushOutcome::Stored
    }

    /// True once the window reaches its fill threshold
    pub fn is_ready_to_evaluate(&self) -> bool {
        self.write_index >= self.config.ready_threshold()
    }

    /// Turn the current window into a speed and start a new window
    ///
    /// Returns [`EstimatorError::NotReady`] without touching state when the
    /// window is below its fill threshold.
    pub fn evaluate(&mut self) -> EstimatorResult<Estimate> {
        let required = self.config.ready_threshold();
        if self.write_index < required {
            return Err(EstimatorError::NotReady {
                required,
                available: self.write_index,
            });
        }

        let estimate = self.peek_estimate();

        log_debug!(
            "Window evaluated: {} samples, {} extrema, mean amplitude {}, speed {}",
            estimate.samples_used,
            estimate.extremum_count,
            estimate.mean_amplitude,
            estimate.speed
        );
        if self.dropped_in_window > 0 {
            log_debug!("{} samples dropped while window was full", self.dropped_in_window);
        }

        self.write_index = 0;
        self.dropped_in_window = 0;
        self.windows_evaluated += 1;

        Ok(estimate)
    }

    /// Estimate for the samples buffered so far, without consuming them
    ///
    /// Ignores the fill threshold. Useful for debug overlays. A speed that
    /// overflows to infinity or NaN is reported as 0.
    pub fn peek_estimate(&self) -> Estimate {
        let WindowScan {
            extremum_count,
            candidate_count,
            mean_amplitude,
        } = scan_window(
            self.samples(),
            self.config.neighbourhood_radius,
            self.config.extremum_test,
        );

        let mut speed = extremum_count as f32 * mean_amplitude * self.config.speed_scale;
        if !speed.is_finite() {
            // Finite samples can still overflow the neighbourhood span
            log_warn!(
                "Window speed overflowed ({} extrema, mean amplitude {}), using 0",
                extremum_count,
                mean_amplitude
            );
            speed = 0.0;
        }

        Estimate {
            speed,
            extremum_count,
            candidate_count,
            mean_amplitude,
            samples_used: self.write_index,
        }
    }

    /// Discard the current window without evaluating it
    pub fn reset(&mut self) {
        self.write_index = 0;
        self.dropped_in_window = 0;
    }

    /// Active configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Samples in the current window, oldest first
    pub fn samples(&self) -> &[f32] {
        &self.samples[..self.write_index]
    }

    /// Next write position (`0..=N`)
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Window size `N`
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// True when further pushes will be dropped
    pub fn is_full(&self) -> bool {
        self.write_index >= self.samples.len()
    }

    /// Samples dropped since construction because the window was full
    pub fn dropped_samples(&self) -> u64 {
        self.dropped_total
    }

    /// Windows turned into estimates since construction
    pub fn windows_evaluated(&self) -> u64 {
        self.windows_evaluated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> CadenceEstimator {
        CadenceEstimator::new(EstimatorConfig::new(10, 2, 2.0)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(CadenceEstimator::new(EstimatorConfig::new(4, 2, 1.0)).is_err());
        assert!(CadenceEstimator::new(EstimatorConfig::new(10, 0, 1.0)).is_err());
    }

    #[test]
    fn oversized_window_is_a_config_error() {
        let huge = EstimatorConfig::new(usize::MAX / 8, 5, 1.0);
        assert!(matches!(
            CadenceEstimator::new(huge),
            Err(EstimatorError::InvalidConfiguration { .. })
        ));

        let mut est = small();
        assert!(est.configure(huge).is_err());
        assert_eq!(est.capacity(), 10);
    }

    #[test]
    fn overflowing_span_reports_zero_speed() {
        let mut est = small();
        let window = [3e38, -3e38, 3e38, 3e38, 3e38, -3e38, 0.0, 1.0, 2.0, 3.0];
        for &v in &window {
            assert!(est.push_sample(v).is_stored());
        }

        let estimate = est.evaluate().unwrap();
        assert_eq!(estimate.speed, 0.0);
        assert_eq!(estimate.samples_used, 10);
        assert_eq!(est.windows_evaluated(), 1);
    }

    #[test]
    fn failed_configure_keeps_previous_state() {
        let mut est = small();
        let _ = est.push_sample(1.0);
        let err = est.configure(EstimatorConfig::new(4, 2, 1.0));
        assert!(matches!(err, Err(EstimatorError::InvalidConfiguration { .. })));
        assert_eq!(est.write_index(), 1);
        assert_eq!(est.capacity(), 10);
    }

    #[test]
    fn one_oscillation_scenario() {
        let mut est = small();
        let wave = [0.0, 1.0, 2.0, 1.0, 0.0, -1.0, -2.0, -1.0, 0.0, 1.0];

        for (pushed, &v) in wave.iter().enumerate() {
            assert_eq!(est.is_ready_to_evaluate(), pushed >= 9);
            assert!(est.push_sample(v).is_stored());
        }
        assert!(est.is_ready_to_evaluate());

        let estimate = est.evaluate().unwrap();
        // Peak at index 2 and trough at index 6
        assert_eq!(estimate.extremum_count, 2);
        assert_eq!(estimate.candidate_count, 6);
        assert!(estimate.speed.is_finite());
        assert!(estimate.speed > 0.0);

        assert!(!est.is_ready_to_evaluate());
        assert_eq!(est.write_index(), 0);
        assert!(est.push_sample(5.0).is_stored());
        assert_eq!(est.samples(), &[5.0]);
    }

    #[test]
    fn evaluate_at_ninety_percent() {
        let mut est = small();
        for &v in &[0.0, 1.0, 2.0, 1.0, 0.0, -1.0, -2.0, -1.0, 0.0] {
            let _ = est.push_sample(v);
        }
        let estimate = est.evaluate().unwrap();
        // Candidates 2..7: extrema at 2 and 6, spans 1, 3, 4, 3, 1
        assert_eq!(estimate.samples_used, 9);
        assert_eq!(estimate.extremum_count, 2);
        assert!((estimate.mean_amplitude - 2.4).abs() < 1e-6);
        assert!((estimate.speed - 9.6).abs() < 1e-5);
    }

    #[test]
    fn not_ready_leaves_state_alone() {
        let mut est = small();
        for _ in 0..8 {
            let _ = est.push_sample(1.0);
        }
        assert_eq!(
            est.evaluate(),
            Err(EstimatorError::NotReady { required: 9, available: 8 })
        );
        assert_eq!(est.write_index(), 8);
    }

    #[test]
    fn overflow_drops_without_wrapping() {
        let mut est = small();
        for i in 0..15 {
            let outcome = est.push_sample(i as f32);
            if i < 10 {
                assert_eq!(outcome, PushOutcome::Stored);
            } else {
                assert_eq!(outcome, PushOutcome::DroppedFull);
            }
        }
        assert!(est.is_full());
        assert_eq!(est.write_index(), 10);
        assert_eq!(est.dropped_samples(), 5);
        assert_eq!(est.samples()[9], 9.0);
        assert_eq!(est.samples()[0], 0.0);
    }

    #[test]
    fn non_finite_rejected() {
        let mut est = small();
        assert_eq!(est.push_sample(f32::NAN), PushOutcome::RejectedNonFinite);
        assert_eq!(est.push_sample(f32::INFINITY), PushOutcome::RejectedNonFinite);
        assert_eq!(est.write_index(), 0);
    }

    #[test]
    fn reconfigure_clears_window() {
        let mut est = small();
        for i in 0..7 {
            let _ = est.push_sample(i as f32);
        }
        let config = *est.config();
        est.configure(config).unwrap();
        est.configure(config).unwrap();
        assert_eq!(est.write_index(), 0);
        assert!(est.samples().is_empty());
        assert_eq!(est.capacity(), 10);
    }

    #[test]
    fn configure_resizes() {
        let mut est = small();
        est.configure(EstimatorConfig::new(64, 4, 1.0)).unwrap();
        assert_eq!(est.capacity(), 64);
        assert_eq!(est.config().ready_threshold(), 58);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut est = small();
        for &v in &[0.0, 1.0, 2.0, 1.0, 0.0, -1.0] {
            let _ = est.push_sample(v);
        }
        let peeked = est.peek_estimate();
        assert_eq!(peeked.samples_used, 6);
        assert_eq!(est.write_index(), 6);
        assert_eq!(est.windows_evaluated(), 0);
    }

    #[test]
    fn reset_discards_window() {
        let mut est = small();
        for _ in 0..9 {
            let _ = est.push_sample(0.3);
        }
        est.reset();
        assert!(!est.is_ready_to_evaluate());
        assert!(est.samples().is_empty());
    }
}
