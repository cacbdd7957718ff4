//! Centralized configuration values shared across the park geometry pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-4);
/// ```
pub const EPSILON: f32 = 1.0e-5;

// =============================================================================
// WORLD SCALE CONSTANTS
// =============================================================================

/// Number of engine coordinate units along one tile edge.
///
/// # Examples
/// ```
/// use config::constants::COORDS_PER_TILE;
/// assert_eq!(COORDS_PER_TILE, 32);
/// ```
pub const COORDS_PER_TILE: i32 = 32;

/// Size of one tile in world units.
pub const TILE_SIZE: f32 = 1.0;

/// Multiplier converting engine coordinates into world units.
///
/// # Examples
/// ```
/// use config::constants::{COORDS_TO_UNITS, COORDS_PER_TILE, TILE_SIZE};
/// assert_eq!(COORDS_TO_UNITS * COORDS_PER_TILE as f32, TILE_SIZE);
/// ```
pub const COORDS_TO_UNITS: f32 = TILE_SIZE / COORDS_PER_TILE as f32;

/// Multiplier converting tile base heights into world units.
pub const TILE_HEIGHT_MULTIPLIER: f32 = 0.25;

/// Offset applied to track node coordinates so that nodes are relative to the
/// center of the first tile of the track element.
///
/// # Examples
/// ```
/// use config::constants::{COORDS_PER_TILE, TRACK_NODE_ORIGIN_OFFSET};
/// assert_eq!(TRACK_NODE_ORIGIN_OFFSET, -(COORDS_PER_TILE / 2));
/// ```
pub const TRACK_NODE_ORIGIN_OFFSET: i32 = -(COORDS_PER_TILE / 2);

/// Yaw applied per quarter turn of a tile element rotation, in degrees.
pub const QUARTER_TURN_DEGREES: f32 = 90.0;

// =============================================================================
// ORIENTATION ENCODING CONSTANTS
// =============================================================================

/// Number of discrete compass directions encoded in a path node.
///
/// # Examples
/// ```
/// use config::constants::DIRECTION_STEPS;
/// assert_eq!(360.0 / DIRECTION_STEPS as f32, 11.25);
/// ```
pub const DIRECTION_STEPS: u32 = 32;

/// Yaw basis added to every decoded direction, matching the engine axes.
pub const DIRECTION_BASIS_DEGREES: f32 = 270.0;

/// Roll applied per banking step, in degrees.
///
/// # Examples
/// ```
/// use config::constants::BANKING_STEP_DEGREES;
/// assert_eq!(BANKING_STEP_DEGREES * 4.0, 90.0);
/// ```
pub const BANKING_STEP_DEGREES: f32 = 22.5;

// =============================================================================
// GENERATION CONSTANTS
// =============================================================================

/// Default window radius used when averaging node positions.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SMOOTHING_RADIUS;
/// assert!(DEFAULT_SMOOTHING_RADIUS > 0);
/// ```
pub const DEFAULT_SMOOTHING_RADIUS: usize = 3;

/// Default tiling multiplier applied to extruded template meshes.
pub const DEFAULT_TILE_MULTIPLIER: f32 = 1.0;

/// Default longitudinal axis of extrusion templates (0 = X, 1 = Y, 2 = Z).
pub const DEFAULT_EXTRUSION_AXIS: usize = 2;

/// Half the width of a footpath tile surface in world units.
pub const FOOTPATH_SURFACE_EXTENTS: f32 = TILE_SIZE / 2.0;

/// Height of a footpath tile surface above the tile base.
pub const FOOTPATH_SURFACE_HEIGHT: f32 = 0.01;

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Tunable parameters of one generation session.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert_eq!(config.smoothing_radius, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Window radius used when averaging node positions.
    pub smoothing_radius: usize,
    /// Longitudinal axis of the extrusion template (0 = X, 1 = Y, 2 = Z).
    pub extrusion_axis: usize,
    /// Tiling multiplier applied to the extrusion template. Values above 1
    /// leave the start of each extruded segment uncovered.
    pub tile_multiplier: f32,
}

impl GenerationConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(2, 2, 0.5).expect("valid config");
    /// assert_eq!(cfg.tile_multiplier, 0.5);
    /// assert!(GenerationConfig::new(2, 3, 1.0).is_err());
    /// ```
    pub fn new(
        smoothing_radius: usize,
        extrusion_axis: usize,
        tile_multiplier: f32,
    ) -> Result<Self, ConfigError> {
        if extrusion_axis > 2 {
            return Err(ConfigError::InvalidAxis(extrusion_axis));
        }
        if !(tile_multiplier.is_finite() && tile_multiplier > 0.0) {
            return Err(ConfigError::InvalidTileMultiplier(tile_multiplier));
        }
        Ok(Self {
            smoothing_radius,
            extrusion_axis,
            tile_multiplier,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            smoothing_radius: DEFAULT_SMOOTHING_RADIUS,
            extrusion_axis: DEFAULT_EXTRUSION_AXIS,
            tile_multiplier: DEFAULT_TILE_MULTIPLIER,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the extrusion axis is not one of X, Y or Z.
    InvalidAxis(usize),
    /// Raised when the tile multiplier is zero, negative or not finite.
    InvalidTileMultiplier(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAxis(value) => {
                write!(f, "extrusion_axis must be 0, 1 or 2: {value}")
            }
            ConfigError::InvalidTileMultiplier(value) => {
                write!(f, "tile_multiplier must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
