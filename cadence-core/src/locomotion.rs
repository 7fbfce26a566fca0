//! Propulsion from head-bob cadence
//!
//! ## Layers
//!
//! ```text
//!   host loop ──frame(now)──► LocomotionDriver ──► SampleSource / DirectionSource / ForceSink
//!                                   │
//!                     on_physics_tick / on_render_tick
//!                                   ▼
//!                           CadencePropulsion ──► CadenceEstimator
//! ```
//!
//! [`CadencePropulsion`] is the numeric side: two explicit entry points and
//! the current speed. [`LocomotionDriver`] is the wiring side: it pulls from
//! injected capabilities, skips ticks when any of them is unavailable, and
//! pushes the force into the sink.
//!
//! ## Speed Hold
//!
//! Speed changes only when a window completes. Between evaluations the last
//! speed is reapplied every render tick with no decay or interpolation,
//! so a user who stops bobbing keeps moving until the next window closes.

use crate::{
    config::{Axis, EstimatorConfig, LocomotionConfig},
    errors::EstimatorResult,
    estimator::{CadenceEstimator, Estimate, PushOutcome},
    math::Vec3,
    time::{FixedStepClock, Timestamp},
    traits::{DirectionSource, ForceSink, SampleSource},
};

/// Estimator plus the speed it last produced
#[derive(Debug, Clone)]
pub struct CadencePropulsion {
    estimator: CadenceEstimator,
    speed: f32,
    last_estimate: Option<Estimate>,
    render_ticks: u64,
}

impl CadencePropulsion {
    /// Propulsion at rest with a freshly configured estimator
    pub fn new(config: EstimatorConfig) -> EstimatorResult<Self> {
        Ok(Self {
            estimator: CadenceEstimator::new(config)?,
            speed: 0.0,
            last_estimate: None,
            render_ticks: 0,
        })
    }

    /// Physics tick: feed one scalar sample
    pub fn on_physics_tick(&mut self, sample: f32) -> PushOutcome {
        self.estimator.push_sample(sample)
    }

    /// Render tick: refresh the speed if a window is ready, then build a force
    ///
    /// The speed is refreshed even when `forward` is `None`, so windows
    /// keep cycling while the subject is briefly missing. Returns `None`
    /// when there is no usable forward vector.
    pub fn on_render_tick(&mut self, forward: Option<Vec3>) -> Option<Vec3> {
        self.render_ticks += 1;

        if self.estimator.is_ready_to_evaluate() {
            if let Ok(estimate) = self.estimator.evaluate() {
                self.speed = estimate.speed;
                self.last_estimate = Some(estimate);
            }
        }

        let forward = forward.filter(|f| f.is_finite())?.normalize();
        let force = forward * self.speed;

        log_trace!(
            "tick {} - forward {:?} - write index {} - speed {} - force {:?}",
            self.render_ticks,
            forward,
            self.estimator.write_index(),
            self.speed,
            force
        );

        Some(force)
    }

    /// Replace the estimator config; the held speed is kept
    pub fn configure(&mut self, config: EstimatorConfig) -> EstimatorResult<()> {
        self.estimator.configure(config)
    }

    /// Stop: zero the speed and discard the current window
    pub fn reset(&mut self) {
        self.estimator.reset();
        self.speed = 0.0;
        self.last_estimate = None;
    }

    /// Speed applied on every render tick
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Diagnostics of the window that produced the current speed
    pub fn last_estimate(&self) -> Option<&Estimate> {
        self.last_estimate.as_ref()
    }

    /// Underlying estimator
    pub fn estimator(&self) -> &CadenceEstimator {
        &self.estimator
    }
}

/// Host-facing driver wiring capabilities to [`CadencePropulsion`]
pub struct LocomotionDriver<S, D, K> {
    propulsion: CadencePropulsion,
    clock: FixedStepClock,
    axis: Axis,
    source: S,
    direction: D,
    sink: K,
}

impl<S, D, K> LocomotionDriver<S, D, K>
where
    S: SampleSource,
    D: DirectionSource,
    K: ForceSink,
{
    /// Driver for `config` over the given capabilities
    pub fn new(
        config: LocomotionConfig,
        source: S,
        direction: D,
        sink: K,
    ) -> EstimatorResult<Self> {
        config.validate()?;

        Ok(Self {
            propulsion: CadencePropulsion::new(config.estimator)?,
            clock: FixedStepClock::new(config.physics_step_ms, config.max_catch_up_steps),
            axis: config.axis,
            source,
            direction,
            sink,
        })
    }

    /// One physics tick; `None` when the source had no position
    pub fn physics_tick(&mut self) -> Option<PushOutcome> {
        let position = self.source.current_position()?;
        Some(self.propulsion.on_physics_tick(self.axis.component(position)))
    }

    /// One render tick; returns the force applied, if any
    pub fn render_tick(&mut self) -> Option<Vec3> {
        let forward = if self.sink.is_available() {
            self.direction.forward()
        } else {
            None
        };

        let force = self.propulsion.on_render_tick(forward)?;
        self.sink.apply_force(force);
        Some(force)
    }

    /// Run every physics tick due at `now`, then one render tick
    pub fn frame(&mut self, now: Timestamp) -> Option<Vec3> {
        let due = self.clock.advance(now);
        for _ in 0..due {
            self.physics_tick();
        }
        self.render_tick()
    }

    /// Numeric state
    pub fn propulsion(&self) -> &CadencePropulsion {
        &self.propulsion
    }

    /// Mutable numeric state, for `configure` / `reset`
    pub fn propulsion_mut(&mut self) -> &mut CadencePropulsion {
        &mut self.propulsion
    }

    /// Frame clock
    pub fn clock(&self) -> &FixedStepClock {
        &self.clock
    }

    /// Sample source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Direction source
    pub fn direction_mut(&mut self) -> &mut D {
        &mut self.direction
    }

    /// Force sink
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Mutable force sink
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Give the capabilities back
    pub fn into_parts(self) -> (S, D, K) {
        (self.source, self.direction, self.sink)
    }
}
