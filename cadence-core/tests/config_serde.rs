//! Configuration loading through serde
//!
//! Designers keep tuning presets as JSON next to the scene; missing fields
//! fall back to the defaults and loaded configs still have to validate.

#![cfg(feature = "serde")]

use cadence_core::{
    Axis, CadenceEstimator, EstimatorConfig, EstimatorError, ExtremumTest, LocomotionConfig,
};

#[test]
fn test_partial_estimator_config_uses_defaults() {
    let config: EstimatorConfig =
        serde_json::from_str(r#"{ "window_size": 200, "neighbourhood_radius": 8 }"#).unwrap();

    assert_eq!(config.window_size, 200);
    assert_eq!(config.neighbourhood_radius, 8);
    assert_eq!(config.speed_scale, 1.0);
    assert_eq!(config.ready_fill_percent, 90);
    assert_eq!(config.extremum_test, ExtremumTest::NonStrict);
    assert!(CadenceEstimator::new(config).is_ok());
}

#[test]
fn test_locomotion_config_from_json() {
    let json = r#"{
        "estimator": { "speed_scale": 12.5, "extremum_test": "Strict" },
        "axis": "Z",
        "physics_step_ms": 10
    }"#;
    let config: LocomotionConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.axis, Axis::Z);
    assert_eq!(config.physics_step_ms, 10);
    assert_eq!(config.max_catch_up_steps, 5);
    assert_eq!(config.estimator.speed_scale, 12.5);
    assert_eq!(config.estimator.extremum_test, ExtremumTest::Strict);
    assert_eq!(config.estimator.window_size, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_loaded_config_still_validated() {
    let config: EstimatorConfig =
        serde_json::from_str(r#"{ "window_size": 10, "neighbourhood_radius": 5 }"#).unwrap();

    assert!(matches!(
        CadenceEstimator::new(config),
        Err(EstimatorError::InvalidConfiguration { window_size: 10, neighbourhood_radius: 5, .. })
    ));
}

#[test]
fn test_oversized_window_from_json_rejected() {
    let config: EstimatorConfig =
        serde_json::from_str(r#"{ "window_size": 2305843009213693951 }"#).unwrap();

    assert!(matches!(
        CadenceEstimator::new(config),
        Err(EstimatorError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_preset_round_trip() {
    let preset = EstimatorConfig::smooth().with_extremum_test(ExtremumTest::Strict);
    let text = serde_json::to_string(&preset).unwrap();
    let back: EstimatorConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, preset);
}
