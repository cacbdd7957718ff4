//! # Indexed Mesh Builder
//!
//! Accumulates triangles one at a time, deduplicating vertices by value and
//! grouping indices into ordered submesh buckets.
//!
//! ## Example
//!
//! ```rust
//! use glam::{Vec2, Vec3};
//! use park_mesh::{IndexedMeshBuilder, Vertex};
//!
//! let mut builder = IndexedMeshBuilder::new();
//! let a = Vertex::new(Vec3::ZERO, Vec3::Y, Vec2::ZERO);
//! let b = Vertex::new(Vec3::X, Vec3::Y, Vec2::X);
//! let c = Vertex::new(Vec3::Z, Vec3::Y, Vec2::Y);
//!
//! builder.add_triangle(a, b, c, 1);
//! let mesh = builder.to_mesh();
//! assert_eq!(mesh.submesh_count(), 2);
//! assert_eq!(mesh.submesh(1), Some(&[0, 1, 2][..]));
//! ```

use std::collections::HashMap;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Bounds, IndexedMesh};
use crate::vertex::{Vertex, VertexKey};

/// Initial vertex capacity of a new builder.
const INITIAL_VERTEX_CAPACITY: usize = 64;

/// Initial index capacity of a newly created submesh.
const INITIAL_SUBMESH_CAPACITY: usize = 16;

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Builds an [`IndexedMesh`] from individual triangles and quads.
///
/// Vertices are stored once per distinct value, in the order they were first
/// seen, so identical input produces identical output.
#[derive(Debug, Clone)]
pub struct IndexedMeshBuilder {
    /// Index of every distinct vertex.
    lookup: HashMap<VertexKey, u32>,
    /// Distinct vertices in first-seen order.
    vertices: Vec<Vertex>,
    /// Triangle indices per submesh.
    submeshes: Vec<Vec<u32>>,
}

impl Default for IndexedMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexedMeshBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lookup: HashMap::with_capacity(INITIAL_VERTEX_CAPACITY),
            vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            submeshes: Vec::with_capacity(1),
        }
    }

    /// Creates a builder seeded with the contents of an existing mesh.
    ///
    /// Duplicate vertices in the source mesh are merged and its indices are
    /// remapped accordingly.
    pub fn from_mesh(mesh: &IndexedMesh) -> Self {
        let mut builder = Self::new();
        let remap: Vec<u32> = mesh
            .vertices()
            .iter()
            .map(|vertex| builder.add_vertex(*vertex))
            .collect();

        builder.submeshes = mesh
            .submeshes()
            .iter()
            .map(|indices| indices.iter().map(|&i| remap[i as usize]).collect())
            .collect();
        builder
    }

    /// Returns the distinct vertices added so far.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of submeshes created so far.
    #[inline]
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Returns true if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the bounds of all vertices added so far.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| v.position))
    }

    /// Adds a vertex and returns its index, reusing an equal vertex if present.
    fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let next = self.vertices.len() as u32;
        let vertices = &mut self.vertices;
        *self.lookup.entry(vertex.key()).or_insert_with(|| {
            vertices.push(vertex);
            next
        })
    }

    /// Adds a triangle to `submesh`. Order: clockwise.
    ///
    /// Triangles where two vertices share the same position have no area and
    /// are dropped. Submeshes up to `submesh` are created when missing.
    pub fn add_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex, submesh: usize) {
        if a.position == b.position || b.position == c.position || a.position == c.position {
            return;
        }

        if submesh >= self.submeshes.len() {
            self.submeshes
                .resize_with(submesh + 1, || Vec::with_capacity(INITIAL_SUBMESH_CAPACITY));
        }

        let indices = [self.add_vertex(a), self.add_vertex(b), self.add_vertex(c)];
        self.submeshes[submesh].extend_from_slice(&indices);
    }

    /// Adds two triangles in the shape of a quad. Order: top left, top right,
    /// bottom right, bottom left (clockwise).
    pub fn add_quad(&mut self, a: Vertex, b: Vertex, c: Vertex, d: Vertex, submesh: usize) {
        self.add_triangle(a, b, c, submesh);
        self.add_triangle(c, d, a, submesh);
    }

    /// Adds a convex polygon with clockwise vertices using fan triangulation.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidConvexPolygon`] if fewer than three
    /// vertices are given.
    pub fn add_convex_polygon(&mut self, vertices: &[Vertex], submesh: usize) -> MeshResult<()> {
        let [root, rest @ ..] = vertices else {
            return Err(MeshError::InvalidConvexPolygon { count: 0 });
        };
        if rest.len() < 2 {
            return Err(MeshError::InvalidConvexPolygon {
                count: vertices.len(),
            });
        }

        for pair in rest.windows(2) {
            self.add_triangle(*root, pair[0], pair[1], submesh);
        }
        Ok(())
    }

    /// Removes all vertices and submeshes. The builder stays usable.
    pub fn clear(&mut self) {
        self.lookup.clear();
        self.vertices.clear();
        self.submeshes.clear();
    }

    /// Builds a snapshot of the current contents.
    ///
    /// A builder without vertices yields an empty mesh with no submeshes.
    pub fn to_mesh(&self) -> IndexedMesh {
        if self.vertices.is_empty() {
            return IndexedMesh::new();
        }
        IndexedMesh::from_parts_unchecked(self.vertices.clone(), self.submeshes.clone())
    }

    /// Consumes the builder and returns its contents.
    pub fn into_mesh(self) -> IndexedMesh {
        if self.vertices.is_empty() {
            return IndexedMesh::new();
        }
        IndexedMesh::from_parts_unchecked(self.vertices, self.submeshes)
    }
}
