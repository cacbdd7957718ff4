//! Mesh vertex with position, normal and texture coordinate.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A single mesh vertex.
///
/// Two vertices are the same vertex when all their components are equal, which
/// is what [`IndexedMeshBuilder`](crate::IndexedMeshBuilder) uses to
/// deduplicate them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Position of the vertex.
    pub position: Vec3,
    /// Normal of the vertex.
    pub normal: Vec3,
    /// Texture coordinate of the vertex.
    pub uv: Vec2,
}

impl Vertex {
    /// Creates a vertex from a position, normal and texture coordinate.
    #[must_use]
    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Creates a vertex with a normal but without a texture coordinate.
    #[must_use]
    pub const fn with_normal(position: Vec3, normal: Vec3) -> Self {
        Self::new(position, normal, Vec2::ZERO)
    }

    /// Hashable key identifying the vertex by value.
    pub(crate) fn key(&self) -> VertexKey {
        let p = self.position;
        let n = self.normal;
        let t = self.uv;
        VertexKey([
            canonical_bits(p.x),
            canonical_bits(p.y),
            canonical_bits(p.z),
            canonical_bits(n.x),
            canonical_bits(n.y),
            canonical_bits(n.z),
            canonical_bits(t.x),
            canonical_bits(t.y),
        ])
    }
}

/// Bit pattern of every vertex component, used as a hash map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VertexKey([u32; 8]);

/// Positive and negative zero compare equal, so they share one bit pattern.
fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_vertices_share_a_key() {
        let a = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::ONE);
        let b = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::ONE);
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn negative_zero_matches_positive_zero() {
        let a = Vertex::with_normal(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let b = Vertex::with_normal(Vec3::new(-0.0, 1.0, 0.0), Vec3::Y);
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn uv_difference_changes_key() {
        let a = Vertex::new(Vec3::ZERO, Vec3::Y, Vec2::ZERO);
        let b = Vertex::new(Vec3::ZERO, Vec3::Y, Vec2::X);
        assert_ne!(a.key(), b.key());
    }
}
