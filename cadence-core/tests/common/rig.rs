//! Scripted capabilities standing in for a headset, a rig and a rigid body

use cadence_core::{DirectionSource, ForceSink, SampleSource, Vec3};

/// Plays back a vertical trace, optionally with tracking gaps
pub struct ScriptedHeadset {
    heights: Vec<f32>,
    next: usize,
    lost: Vec<bool>,
}

impl ScriptedHeadset {
    /// Headset replaying `heights`, then repeating the last value
    pub fn new(heights: Vec<f32>) -> Self {
        Self {
            heights,
            next: 0,
            lost: Vec::new(),
        }
    }

    /// Mark ticks (by index) where tracking is lost
    pub fn with_gaps(mut self, lost: Vec<bool>) -> Self {
        self.lost = lost;
        self
    }

    /// Replace the rest of the script
    pub fn continue_with(&mut self, heights: Vec<f32>) {
        self.heights.truncate(self.next);
        self.heights.extend(heights);
    }

    /// Ticks read so far
    pub fn reads(&self) -> usize {
        self.next
    }
}

impl SampleSource for ScriptedHeadset {
    fn current_position(&mut self) -> Option<Vec3> {
        let tick = self.next;
        self.next += 1;

        if self.lost.get(tick).copied().unwrap_or(false) {
            return None;
        }

        let y = self
            .heights
            .get(tick)
            .or_else(|| self.heights.last())
            .copied()?;
        Some(Vec3::new(0.1, y, -0.2))
    }
}

/// Fixed facing
pub struct Facing(pub Option<Vec3>);

impl DirectionSource for Facing {
    fn forward(&self) -> Option<Vec3> {
        self.0
    }
}

/// Records every force it receives
#[derive(Default)]
pub struct RecordingBody {
    pub forces: Vec<Vec3>,
    pub missing: bool,
}

impl RecordingBody {
    /// Sum of all applied forces
    pub fn total(&self) -> Vec3 {
        self.forces.iter().fold(Vec3::ZERO, |acc, &f| acc + f)
    }

    /// Most recent force
    pub fn last(&self) -> Option<Vec3> {
        self.forces.last().copied()
    }
}

impl ForceSink for RecordingBody {
    fn apply_force(&mut self, force: Vec3) {
        self.forces.push(force);
    }

    fn is_available(&self) -> bool {
        !self.missing
    }
}
