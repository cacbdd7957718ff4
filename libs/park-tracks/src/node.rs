//! Raw track nodes as delivered by the engine.

use config::constants::{COORDS_TO_UNITS, TRACK_NODE_ORIGIN_OFFSET};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One sampled point of a track piece.
///
/// The position is in world units relative to the center of the first tile
/// of the track element. The orientation is still encoded as engine bytes;
/// see [`OrientationDecoder`](crate::OrientationDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPathNode {
    /// Local position in world units.
    pub position: Vec3,
    /// Compass direction, 0..32.
    pub direction: u8,
    /// Banking code.
    pub banking: u8,
    /// Pitch code, or the corkscrew sprite for corkscrew pieces.
    pub pitch: u8,
}

impl RawPathNode {
    /// Creates a node from a local position and encoded orientation.
    #[must_use]
    pub const fn new(position: Vec3, direction: u8, banking: u8, pitch: u8) -> Self {
        Self {
            position,
            direction,
            banking,
            pitch,
        }
    }

    /// Creates a node from engine coordinates.
    ///
    /// Engine `x`/`y` span the ground plane with 32 units per tile and `z` is
    /// the height. They map to world X, Z and Y respectively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::Vec3;
    /// use park_tracks::RawPathNode;
    ///
    /// let node = RawPathNode::from_engine(16, 48, 8, 0, 0, 0);
    /// assert_eq!(node.position, Vec3::new(0.0, 0.25, 1.0));
    /// ```
    #[must_use]
    pub fn from_engine(x: i16, y: i16, z: i16, direction: u8, banking: u8, pitch: u8) -> Self {
        let offset = TRACK_NODE_ORIGIN_OFFSET;
        let position = Vec3::new(
            (i32::from(x) + offset) as f32,
            f32::from(z),
            (i32::from(y) + offset) as f32,
        ) * COORDS_TO_UNITS;
        Self::new(position, direction, banking, pitch)
    }

    /// Returns true if both nodes have bit-identical encoded orientations.
    #[inline]
    pub fn has_equal_rotation(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.banking == other.banking
            && self.pitch == other.pitch
    }
}
