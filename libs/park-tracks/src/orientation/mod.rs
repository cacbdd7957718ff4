//! # Orientation Decoding
//!
//! Converts the encoded direction, banking and pitch bytes of a track node
//! into a rotation.
//!
//! ## Encoding
//!
//! - **Direction**: 32 compass steps of 11.25 degrees, where 0 faces the
//!   negative X axis
//! - **Banking**: roll in steps of 22.5 degrees, with separate code ranges for
//!   regular banks, barrel rolls and inverted barrel rolls
//! - **Pitch**: one code per slope category; corkscrew codes also turn and
//!   roll the node
//!
//! Slope angles come from the engine's sprite layout. They are kept as an
//! opaque table.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use park_tracks::orientation::{banking_angle, OrientationDecoder};
//!
//! assert_eq!(banking_angle(2), Some(45.0));
//!
//! let mut decoder = OrientationDecoder::new();
//! let rotation = decoder.convert_rotation(8, 0, 0);
//! assert!((rotation * Vec3::Z).abs_diff_eq(Vec3::Z, 1e-5));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use config::constants::{BANKING_STEP_DEGREES, DIRECTION_BASIS_DEGREES, DIRECTION_STEPS};
use glam::Quat;
use park_mesh::transform::euler_degrees;

use crate::node::RawPathNode;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

// Regular slopes
const SLOPE_GENTLE: f32 = 22.2052;
const SLOPE_FLAT_TO_GENTLE: f32 = SLOPE_GENTLE / 2.0;
const SLOPE_STEEP: f32 = 58.5148;
const SLOPE_GENTLE_TO_STEEP: f32 = (SLOPE_GENTLE + SLOPE_STEEP) / 2.0;
const SLOPE_VERTICAL: f32 = 90.0;
const SLOPE_STEEP_TO_VERTICAL: f32 = (SLOPE_STEEP + SLOPE_VERTICAL) / 2.0;

// Past vertical, for loops
const SLOPE_INVERTED_FULL: f32 = 180.0;
const SLOPE_INVERTED_STEPS: [f32; 5] = [
    SLOPE_VERTICAL + SLOPE_FLAT_TO_GENTLE,
    SLOPE_VERTICAL + SLOPE_GENTLE,
    SLOPE_VERTICAL + SLOPE_GENTLE_TO_STEEP,
    SLOPE_VERTICAL + SLOPE_STEEP,
    SLOPE_VERTICAL + SLOPE_STEEP_TO_VERTICAL,
];

// Spirals
const SLOPE_SPIRAL_SMALL: f32 = 5.5266;
const SLOPE_SPIRAL_BIG: f32 = 3.2933;
const SLOPE_SPIRAL_QUARTER: f32 = 6.5366;
const SLOPE_SPIRAL_LIFTHILL: f32 = 10.8737;

// Diagonals
const SLOPE_DIAGONAL_GENTLE: f32 = 16.1005;
const SLOPE_DIAGONAL_FLAT_TO_GENTLE: f32 = SLOPE_DIAGONAL_GENTLE / 2.0;
const SLOPE_DIAGONAL_STEEP: f32 = 49.1035;

// Corkscrews, one entry per sprite of the roll
const CORKSCREW_SLOPES: [f32; 5] = [16.4, 43.3, 45.0, 43.3, 16.4];
const CORKSCREW_ROTATIONS: [f32; 5] = [2.3, 14.0, 45.0, 90.0 - 14.0, 90.0 - 2.3];
const CORKSCREW_BANKING: [f32; 5] = [15.8, 34.4, 90.0, 180.0 - 34.4, 180.0 - 15.8];

// =============================================================================
// LOOKUP TABLES
// =============================================================================

/// Yaw in degrees for an encoded compass direction.
///
/// # Example
///
/// ```rust
/// use park_tracks::orientation::direction_angle;
///
/// assert_eq!(direction_angle(0), 270.0);
/// assert_eq!(direction_angle(8), 360.0);
/// ```
pub fn direction_angle(direction: u8) -> f32 {
    (360.0 / DIRECTION_STEPS as f32) * f32::from(direction) + DIRECTION_BASIS_DEGREES
}

/// Roll in degrees for a banking code, or `None` for an unknown code.
///
/// Positive values bank to the right.
pub fn banking_angle(code: u8) -> Option<f32> {
    let steps = f32::from(code);
    let angle = match code {
        // Flat
        0 => 0.0,
        // Right bank, 1x and 2x
        1 | 2 => steps,
        // Left bank, 1x and 2x
        3 | 4 => 2.0 - steps,
        // Right barrel roll, 3x to 7x
        5..=9 => steps - 2.0,
        // Left barrel roll, 3x to 7x
        10..=14 => 7.0 - steps,
        // Right inverted barrel roll, 2x and 1x
        16 | 17 => 18.0 - steps,
        // Left inverted barrel roll, 2x and 1x
        18 | 19 => steps - 20.0,
        _ => return None,
    };
    Some(angle * BANKING_STEP_DEGREES)
}

/// Rotation encoded by a pitch code.
///
/// `pitch` replaces the pitch of the node. `yaw_offset` and `roll_offset` are
/// added to the direction and banking angles; only corkscrews set them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PitchAngles {
    /// Pitch in degrees. Positive values point downwards.
    pub pitch: f32,
    /// Degrees added to the direction yaw.
    pub yaw_offset: f32,
    /// Degrees added to the banking roll.
    pub roll_offset: f32,
}

impl PitchAngles {
    fn slope(pitch: f32) -> Self {
        Self {
            pitch,
            ..Self::default()
        }
    }

    fn corkscrew(sprite: u8, pitch_sign: f32, yaw_sign: f32, roll_sign: f32) -> Self {
        let i = usize::from(sprite);
        Self {
            pitch: pitch_sign * CORKSCREW_SLOPES[i],
            yaw_offset: yaw_sign * CORKSCREW_ROTATIONS[i],
            roll_offset: roll_sign * CORKSCREW_BANKING[i],
        }
    }
}

/// Rotation for a pitch code, or `None` for an unknown code.
pub fn pitch_angles(code: u8) -> Option<PitchAngles> {
    let angles = match code {
        0 => PitchAngles::default(),

        // Up
        1 => PitchAngles::slope(-SLOPE_FLAT_TO_GENTLE),
        2 => PitchAngles::slope(-SLOPE_GENTLE),
        3 => PitchAngles::slope(-SLOPE_GENTLE_TO_STEEP),
        4 => PitchAngles::slope(-SLOPE_STEEP),

        // Down
        5 => PitchAngles::slope(SLOPE_FLAT_TO_GENTLE),
        6 => PitchAngles::slope(SLOPE_GENTLE),
        7 => PitchAngles::slope(SLOPE_GENTLE_TO_STEEP),
        8 => PitchAngles::slope(SLOPE_STEEP),

        // Steep to vertical, up
        9 => PitchAngles::slope(-SLOPE_STEEP_TO_VERTICAL),
        10 => PitchAngles::slope(-SLOPE_VERTICAL),

        // Vertical to inverted, up
        11..=15 => PitchAngles::slope(-SLOPE_INVERTED_STEPS[usize::from(code - 11)]),

        16 => PitchAngles::slope(SLOPE_INVERTED_FULL),

        // Steep to vertical, down
        17 => PitchAngles::slope(SLOPE_STEEP_TO_VERTICAL),
        18 => PitchAngles::slope(SLOPE_VERTICAL),

        // Vertical to inverted, down
        19..=23 => PitchAngles::slope(SLOPE_INVERTED_STEPS[usize::from(code - 19)]),

        // Corkscrews: right start, right end, left start, left end
        24..=28 => PitchAngles::corkscrew(code - 24, -1.0, 1.0, -1.0),
        29..=33 => PitchAngles::corkscrew(code - 29, 1.0, 1.0, 1.0),
        34..=38 => PitchAngles::corkscrew(code - 34, -1.0, -1.0, 1.0),
        39..=43 => PitchAngles::corkscrew(code - 39, 1.0, -1.0, -1.0),

        // Spirals
        44 => PitchAngles::slope(-SLOPE_SPIRAL_BIG),
        45 => PitchAngles::slope(-SLOPE_SPIRAL_SMALL),
        46 => PitchAngles::slope(SLOPE_SPIRAL_BIG),
        47 => PitchAngles::slope(SLOPE_SPIRAL_SMALL),
        48 => PitchAngles::slope(-SLOPE_SPIRAL_QUARTER),
        49 => PitchAngles::slope(SLOPE_SPIRAL_QUARTER),

        // Diagonal up
        50 => PitchAngles::slope(-SLOPE_DIAGONAL_FLAT_TO_GENTLE),
        51 => PitchAngles::slope(-SLOPE_DIAGONAL_GENTLE),
        52 => PitchAngles::slope(-SLOPE_DIAGONAL_STEEP),

        // Diagonal down
        53 => PitchAngles::slope(SLOPE_DIAGONAL_FLAT_TO_GENTLE),
        54 => PitchAngles::slope(SLOPE_DIAGONAL_GENTLE),
        55 => PitchAngles::slope(SLOPE_DIAGONAL_STEEP),

        // Bottom half of an inverted half loop
        56 => PitchAngles::slope(SLOPE_GENTLE),
        57 => PitchAngles::slope(SLOPE_GENTLE_TO_STEEP),
        58 => PitchAngles::slope(SLOPE_STEEP),

        // Circular lift hill
        59 => PitchAngles::slope(-SLOPE_SPIRAL_LIFTHILL),

        _ => return None,
    };
    Some(angles)
}

// =============================================================================
// DECODER
// =============================================================================

/// An orientation byte the decoder did not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrientationCode {
    /// Unknown banking code.
    Banking(u8),
    /// Unknown pitch code.
    Pitch(u8),
}

impl fmt::Display for OrientationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationCode::Banking(code) => write!(f, "banking code {code}"),
            OrientationCode::Pitch(code) => write!(f, "pitch code {code}"),
        }
    }
}

/// Decodes node orientations, falling back to zero for unknown codes.
///
/// Each distinct unknown code is logged once. Later occurrences are only
/// counted.
#[derive(Debug, Clone, Default)]
pub struct OrientationDecoder {
    unknown: BTreeMap<OrientationCode, usize>,
}

impl OrientationDecoder {
    /// Creates a decoder that has not seen any unknown code yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll in degrees for a banking code, 0 if unknown.
    pub fn banking_angle(&mut self, code: u8) -> f32 {
        banking_angle(code).unwrap_or_else(|| {
            self.report(OrientationCode::Banking(code));
            0.0
        })
    }

    /// Pitch angles for a pitch code, all zero if unknown.
    pub fn pitch_angles(&mut self, code: u8) -> PitchAngles {
        pitch_angles(code).unwrap_or_else(|| {
            self.report(OrientationCode::Pitch(code));
            PitchAngles::default()
        })
    }

    /// Rotation for an encoded direction, banking and pitch.
    pub fn convert_rotation(&mut self, direction: u8, banking: u8, pitch: u8) -> Quat {
        let yaw = direction_angle(direction);
        let roll = self.banking_angle(banking);
        let angles = self.pitch_angles(pitch);
        euler_degrees(angles.pitch, yaw + angles.yaw_offset, roll + angles.roll_offset)
    }

    /// Rotation of a raw node.
    #[inline]
    pub fn node_rotation(&mut self, node: &RawPathNode) -> Quat {
        self.convert_rotation(node.direction, node.banking, node.pitch)
    }

    /// Unknown codes seen so far, with how often each occurred.
    pub fn unknown_codes(&self) -> &BTreeMap<OrientationCode, usize> {
        &self.unknown
    }

    fn report(&mut self, code: OrientationCode) {
        let count = self.unknown.entry(code).or_insert(0);
        if *count == 0 {
            log::warn!("Unknown {code}, using 0 degrees");
        }
        *count += 1;
    }
}
