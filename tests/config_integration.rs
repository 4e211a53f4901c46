//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use tesseract4d::config::AppConfig;
use tesseract_core::RotationPlane;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TESSERACT_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("TESSERACT_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_selects_plane() {
    std::env::set_var("TESSERACT_ANIMATION__DEFAULT_PLANE", "zw");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("TESSERACT_ANIMATION__DEFAULT_PLANE");

    assert_eq!(config.animation.default_plane, RotationPlane::ZW);
    assert_eq!(config.hypercube().plane(), RotationPlane::ZW);
}

#[test]
#[serial]
fn test_env_rejects_unknown_plane() {
    std::env::set_var("TESSERACT_ANIMATION__DEFAULT_PLANE", "xq");
    let result = AppConfig::load();
    std::env::remove_var("TESSERACT_ANIMATION__DEFAULT_PLANE");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.window.title, builtin.window.title);
    assert_eq!(config.animation.idle_speed, builtin.animation.idle_speed);
    assert_eq!(config.animation.drag_sensitivity, builtin.animation.drag_sensitivity);
    assert_eq!(config.projection.distance, builtin.projection.distance);
    assert_eq!(config.projection.scale, builtin.projection.scale);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.camera.distance, 5.0);
}
