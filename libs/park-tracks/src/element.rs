//! # Tile Elements
//!
//! Map elements that produce geometry, and where their meshes are placed.
//!
//! ## Placement
//!
//! ```text
//! tile (x, y, base height) → world (x + 0.5, base * 0.25, y + 0.5)
//! ```
//!
//! Track meshes are raised by the track height and turned by the element
//! rotation in quarter turns. Footpath tiles are always turned half a turn.

use std::f32::consts::PI;

use config::constants::{
    COORDS_TO_UNITS, FOOTPATH_SURFACE_EXTENTS, FOOTPATH_SURFACE_HEIGHT, QUARTER_TURN_DEGREES,
    TILE_HEIGHT_MULTIPLIER, TILE_SIZE,
};
use glam::{Quat, Vec2, Vec3};
use park_mesh::{IndexedMesh, IndexedMeshBuilder, TransformPoint, Vertex};
use serde::{Deserialize, Serialize};

use crate::key::PathShapeKey;

// =============================================================================
// LOCATION
// =============================================================================

/// Position of an element on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileLocation {
    /// Tile column.
    pub x: i32,
    /// Tile row.
    pub y: i32,
    /// Base height in height steps.
    pub base_height: u8,
    /// Rotation in quarter turns.
    pub rotation: u8,
}

impl TileLocation {
    /// Creates a tile location.
    #[must_use]
    pub const fn new(x: i32, y: i32, base_height: u8, rotation: u8) -> Self {
        Self {
            x,
            y,
            base_height,
            rotation,
        }
    }

    /// World position of the center of the tile at its base height.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::Vec3;
    /// use park_tracks::TileLocation;
    ///
    /// let location = TileLocation::new(2, 3, 8, 0);
    /// assert_eq!(location.world_position(), Vec3::new(2.5, 2.0, 3.5));
    /// ```
    pub fn world_position(&self) -> Vec3 {
        let half_tile = TILE_SIZE / 2.0;
        Vec3::new(
            self.x as f32 * TILE_SIZE + half_tile,
            f32::from(self.base_height) * TILE_HEIGHT_MULTIPLIER,
            self.y as f32 * TILE_SIZE + half_tile,
        )
    }

    /// Yaw rotation of the element.
    pub fn yaw(&self) -> Quat {
        let degrees = f32::from(self.rotation) * QUARTER_TURN_DEGREES;
        Quat::from_rotation_y(degrees.to_radians())
    }
}

// =============================================================================
// TRACK ELEMENTS
// =============================================================================

/// One tile of a track piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackElement {
    /// Track type id.
    pub type_id: u16,
    /// Index of this tile within the multi-tile track piece.
    pub sequence_index: u8,
    /// Height of the track above the base height, in engine coordinates.
    pub height: u16,
    /// The track hangs below its supports.
    pub inverted: bool,
    /// The track has a chain lift.
    pub chainlift: bool,
    /// The track is a cable lift.
    pub cablelift: bool,
    /// The piece turns regular track into inverted track.
    pub normal_to_inverted: bool,
    /// The piece turns inverted track into regular track.
    pub inverted_to_normal: bool,
}

impl TrackElement {
    /// Creates a plain element of a track type, on the first tile of its
    /// piece.
    #[must_use]
    pub fn new(type_id: u16) -> Self {
        Self {
            type_id,
            ..Self::default()
        }
    }

    /// Key of the mesh this element uses.
    pub fn shape_key(&self) -> PathShapeKey {
        PathShapeKey::new(self.type_id, self.cablelift, self.chainlift, self.inverted)
    }

    /// Only the first tile of a piece carries its mesh.
    #[inline]
    pub fn produces_geometry(&self) -> bool {
        self.sequence_index == 0
    }

    /// Inverted inversion pieces are rolled upside down around the path.
    #[inline]
    pub fn flips_inversion(&self) -> bool {
        self.inverted && (self.normal_to_inverted || self.inverted_to_normal)
    }

    /// World placement of the element's mesh.
    ///
    /// The track height is doubled for inverted track.
    pub fn placement(&self, location: &TileLocation) -> TransformPoint {
        let mut offset = f32::from(self.height) * COORDS_TO_UNITS;
        if self.inverted {
            offset *= 2.0;
        }
        let position = location.world_position() + Vec3::Y * offset;
        TransformPoint::new(position, location.yaw())
    }
}

/// Rotation added to each path point of a flipped inversion.
pub(crate) fn inversion_roll() -> Quat {
    Quat::from_rotation_z(PI)
}

// =============================================================================
// FOOTPATH ELEMENTS
// =============================================================================

/// One footpath tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FootpathElement {
    /// Surface texture index, passed on to the renderer.
    pub surface: u32,
}

impl FootpathElement {
    /// World placement of the footpath mesh.
    pub fn placement(&self, location: &TileLocation) -> TransformPoint {
        TransformPoint::new(location.world_position(), Quat::from_rotation_y(PI))
    }
}

/// Flat quad covering one tile, slightly above the ground.
pub fn footpath_mesh() -> IndexedMesh {
    let e = FOOTPATH_SURFACE_EXTENTS;
    let h = FOOTPATH_SURFACE_HEIGHT;

    let mut builder = IndexedMeshBuilder::new();
    builder.add_quad(
        Vertex::new(Vec3::new(e, h, e), Vec3::Y, Vec2::ONE),
        Vertex::new(Vec3::new(e, h, -e), Vec3::Y, Vec2::X),
        Vertex::new(Vec3::new(-e, h, -e), Vec3::Y, Vec2::ZERO),
        Vertex::new(Vec3::new(-e, h, e), Vec3::Y, Vec2::Y),
        0,
    );
    builder.into_mesh()
}

// =============================================================================
// ELEMENT KIND
// =============================================================================

/// Every kind of element that produces geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// A track tile.
    Track(TrackElement),
    /// A footpath tile.
    Footpath(FootpathElement),
}

impl ElementKind {
    /// World placement of the element's mesh.
    pub fn placement(&self, location: &TileLocation) -> TransformPoint {
        match self {
            ElementKind::Track(track) => track.placement(location),
            ElementKind::Footpath(path) => path.placement(location),
        }
    }
}

impl From<TrackElement> for ElementKind {
    fn from(track: TrackElement) -> Self {
        ElementKind::Track(track)
    }
}

impl From<FootpathElement> for ElementKind {
    fn from(path: FootpathElement) -> Self {
        ElementKind::Footpath(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn track_height_is_doubled_when_inverted() {
        let location = TileLocation::new(0, 0, 4, 0);
        let mut track = TrackElement::new(1);
        track.height = 16;
        assert_abs_diff_eq!(track.placement(&location).position.y, 1.5);

        track.inverted = true;
        assert_abs_diff_eq!(track.placement(&location).position.y, 2.0);
    }

    #[test]
    fn track_rotation_is_quarter_turns() {
        let location = TileLocation::new(1, 1, 0, 1);
        let placement = TrackElement::new(0).placement(&location);
        assert!(placement.forward().abs_diff_eq(Vec3::X, 1e-6));
        assert_eq!(placement.position, Vec3::new(1.5, 0.0, 1.5));
    }

    #[test]
    fn only_first_tile_produces_geometry() {
        let mut track = TrackElement::new(3);
        assert!(track.produces_geometry());
        track.sequence_index = 2;
        assert!(!track.produces_geometry());
    }

    #[test]
    fn inversion_flip_needs_inverted_transition() {
        let mut track = TrackElement::new(3);
        track.normal_to_inverted = true;
        assert!(!track.flips_inversion());
        track.inverted = true;
        assert!(track.flips_inversion());
        track.normal_to_inverted = false;
        assert!(!track.flips_inversion());
        track.inverted_to_normal = true;
        assert!(track.flips_inversion());
    }

    #[test]
    fn shape_key_uses_mesh_flags() {
        let track = TrackElement {
            type_id: 7,
            sequence_index: 3,
            height: 40,
            inverted: true,
            chainlift: true,
            ..TrackElement::default()
        };
        assert_eq!(track.shape_key(), PathShapeKey::new(7, false, true, true));
    }

    #[test]
    fn footpath_quad_faces_up() {
        let mesh = footpath_mesh();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices().iter().all(|v| v.normal == Vec3::Y));

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-0.5, 0.01, -0.5));
        assert_eq!(bounds.max, Vec3::new(0.5, 0.01, 0.5));
    }

    #[test]
    fn footpath_is_turned_half_a_turn() {
        let location = TileLocation::new(0, 0, 2, 3);
        let placement = ElementKind::from(FootpathElement::default()).placement(&location);
        assert!(placement.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert_abs_diff_eq!(placement.position.y, 0.5);
    }
}
