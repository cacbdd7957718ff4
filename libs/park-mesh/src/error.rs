//! # Mesh Errors
//!
//! Error types for mesh building and extrusion. Degenerate triangles are not
//! errors; they are dropped by the builder.

use thiserror::Error;

use crate::extrude::Axis;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or extruding meshes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// The extrusion template has no extent along its tiling axis, so it
    /// cannot be repeated along a path.
    #[error("Template has zero extent along the {axis} axis")]
    ZeroExtentTemplate {
        /// Tiling axis of the template.
        axis: Axis,
    },

    /// The extrusion template has no vertices.
    #[error("Template has no vertices")]
    EmptyTemplate,

    /// A convex polygon was given fewer than three vertices.
    #[error("A convex polygon needs at least 3 vertices, got {count}")]
    InvalidConvexPolygon {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A triangle index points past the end of the vertex list.
    #[error("Index {index} in submesh {submesh} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Submesh holding the index.
        submesh: usize,
        /// Offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A submesh index list does not describe whole triangles.
    #[error("Submesh {submesh} has {len} indices, which is not a multiple of 3")]
    IncompleteTriangle {
        /// Submesh holding the indices.
        submesh: usize,
        /// Length of the index list.
        len: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
