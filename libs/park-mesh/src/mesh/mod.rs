//! # Indexed Mesh
//!
//! Renderable output of the mesh builder: one shared vertex list and an
//! ordered list of submesh triangle lists.
//!
//! ## Invariants
//!
//! - Every index in every submesh is `< vertices.len()`
//! - Every submesh index list length is a multiple of 3
//! - Vertex order is the order in which vertices were first inserted

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::vertex::Vertex;

// =============================================================================
// INDEXED MESH
// =============================================================================

/// A mesh with shared vertices and per-submesh triangle index lists.
///
/// # Example
///
/// ```rust
/// use park_mesh::IndexedMesh;
///
/// let mesh = IndexedMesh::new();
/// assert!(mesh.is_empty());
/// assert_eq!(mesh.submesh_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedMesh {
    vertices: Vec<Vertex>,
    submeshes: Vec<Vec<u32>>,
}

impl IndexedMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from raw parts, validating the index invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IncompleteTriangle`] when a submesh length is not
    /// a multiple of 3 and [`MeshError::IndexOutOfRange`] when an index points
    /// past the vertex list.
    pub fn from_parts(vertices: Vec<Vertex>, submeshes: Vec<Vec<u32>>) -> MeshResult<Self> {
        for (submesh, indices) in submeshes.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(MeshError::IncompleteTriangle {
                    submesh,
                    len: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
                return Err(MeshError::IndexOutOfRange {
                    submesh,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
        Ok(Self {
            vertices,
            submeshes,
        })
    }

    /// Creates a mesh from parts the builder has already validated.
    pub(crate) fn from_parts_unchecked(vertices: Vec<Vertex>, submeshes: Vec<Vec<u32>>) -> Self {
        Self {
            vertices,
            submeshes,
        }
    }

    /// Returns the vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns all submesh index lists.
    #[inline]
    pub fn submeshes(&self) -> &[Vec<u32>] {
        &self.submeshes
    }

    /// Returns the index list of one submesh.
    #[inline]
    pub fn submesh(&self, index: usize) -> Option<&[u32]> {
        self.submeshes.get(index).map(Vec::as_slice)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of submeshes.
    #[inline]
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Returns the number of triangles across all submeshes.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.len() / 3).sum()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the triangles of all submeshes in submesh order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes
            .iter()
            .flat_map(|s| s.chunks_exact(3).map(|t| [t[0], t[1], t[2]]))
    }

    /// Returns the axis-aligned bounds of all vertices, or `None` for an
    /// empty mesh.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| v.position))
    }
}

// =============================================================================
// BOUNDS
// =============================================================================

/// Axis-aligned bounding box.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use park_mesh::Bounds;
///
/// let bounds = Bounds::from_points([Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 4.0, 3.0)])
///     .unwrap();
/// assert_eq!(bounds.center(), Vec3::new(0.0, 2.0, 2.5));
/// assert_eq!(bounds.extents(), Vec3::new(1.0, 2.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Creates bounds from two corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Computes the bounds of a set of points, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |bounds, p| {
            Self::new(bounds.min.min(p), bounds.max.max(p))
        }))
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size of the box.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half the size of the box.
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }
}

#[cfg(test)]
mod tests;
