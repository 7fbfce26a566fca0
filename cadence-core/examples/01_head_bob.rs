//! Head-Bob Locomotion Example
//!
//! Simulates a user who stands, walks in place slowly, speeds up, then stops,
//! and prints the propulsion force the driver applies along the way.
//!
//! ## What You'll Learn
//!
//! - Implementing the three capability traits for your own scene
//! - Driving physics and render ticks from a caller-owned loop
//! - How speed holds between windows and drops once a still window closes
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_head_bob
//! ```

use core::f32::consts::TAU;

use cadence_core::{
    constants::MS_PER_SECOND, DirectionSource, EstimatorConfig, ForceSink, LocomotionConfig,
    LocomotionDriver, SampleSource, Timestamp, Vec3,
};

/// Physics ticks per phase (50 Hz, so 4 seconds each)
const PHASE_TICKS: u32 = 200;

/// Simulated headset: still, slow walk, brisk walk, still
struct SimulatedHead {
    tick: u32,
}

impl SampleSource for SimulatedHead {
    fn current_position(&mut self) -> Option<Vec3> {
        let tick = self.tick;
        self.tick += 1;

        // (period in ticks, amplitude in metres)
        let (period, amplitude) = match tick / PHASE_TICKS {
            0 => (1.0, 0.0),
            1 => (30.0, 0.02),
            2 => (16.0, 0.04),
            _ => (1.0, 0.0),
        };

        let bob = amplitude * (TAU * tick as f32 / period).sin();
        Some(Vec3::new(0.0, 1.65 + bob, 0.0))
    }
}

/// Facing slightly to the right of +Z
struct Rig;

impl DirectionSource for Rig {
    fn forward(&self) -> Option<Vec3> {
        Some(Vec3::new(0.2, 0.0, 1.0))
    }
}

/// Integrates force into velocity with unit mass and light drag
struct Body {
    velocity: Vec3,
    dt: f32,
}

impl ForceSink for Body {
    fn apply_force(&mut self, force: Vec3) {
        self.velocity = self.velocity * 0.98 + force * self.dt;
    }
}

fn main() {
    println!("Cadence Head-Bob Locomotion Example");
    println!("===================================\n");

    let estimator = EstimatorConfig::default().with_speed_scale(15.0);
    let config = LocomotionConfig::new(estimator);

    println!("Estimator:");
    println!("  Window size: {} samples", estimator.window_size);
    println!("  Neighbourhood radius: {} samples", estimator.neighbourhood_radius);
    println!("  Speed scale: {}", estimator.speed_scale);
    println!("  Ready after: {} samples", estimator.ready_threshold());
    println!();

    let frame_ms: Timestamp = 11; // ~90 Hz display
    let mut driver = match LocomotionDriver::new(
        config,
        SimulatedHead { tick: 0 },
        Rig,
        Body {
            velocity: Vec3::ZERO,
            dt: frame_ms as f32 / MS_PER_SECOND as f32,
        },
    ) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let mut last_windows = 0;
    let mut now: Timestamp = 0;

    println!(
        "{:>8} {:>8} {:>10} {:>10} {:>10}",
        "t (ms)",
        "window",
        "extrema",
        "speed",
        "|v|"
    );
    while now < 17 * MS_PER_SECOND {
        driver.frame(now);
        now += frame_ms;

        let propulsion = driver.propulsion();
        let windows = propulsion.estimator().windows_evaluated();
        if windows != last_windows {
            last_windows = windows;
            let extrema = propulsion.last_estimate().map_or(0, |e| e.extremum_count);
            println!(
                "{:>8} {:>8} {:>10} {:>10.3} {:>10.3}",
                now,
                windows,
                extrema,
                propulsion.speed(),
                driver.sink().velocity.length()
            );
        }
    }

    println!();
    println!(
        "Dropped samples: {}, skipped physics steps: {}",
        driver.propulsion().estimator().dropped_samples(),
        driver.clock().skipped_steps()
    );
}
