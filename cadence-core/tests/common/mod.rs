//! Common test utilities for integration tests
//!
//! - Synthetic head-bob generators (sinusoidal walk, ramps, plateaus)
//! - Scripted capabilities for driving `LocomotionDriver` end to end

#![allow(dead_code)]

pub mod generators;
pub mod rig;
