//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let cfg = GenerationConfig::default();
/// assert!(cfg.tile_multiplier > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GenerationConfig::default();
    assert!(cfg.tile_multiplier > 0.0);
    assert!(cfg.extrusion_axis <= 2);
    assert_eq!(cfg.smoothing_radius, DEFAULT_SMOOTHING_RADIUS);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GenerationConfig::new(3, 5, 1.0).unwrap_err(),
        ConfigError::InvalidAxis(5)
    );
    assert_eq!(
        GenerationConfig::new(3, 2, 0.0).unwrap_err(),
        ConfigError::InvalidTileMultiplier(0.0)
    );
    assert!(GenerationConfig::new(3, 2, f32::NAN).is_err());
    assert!(GenerationConfig::new(0, 0, 2.0).is_ok());
}

#[test]
fn config_error_messages_name_the_field() {
    assert!(ConfigError::InvalidAxis(7).to_string().contains("extrusion_axis"));
    assert!(ConfigError::InvalidTileMultiplier(-1.0)
        .to_string()
        .contains("tile_multiplier"));
}
