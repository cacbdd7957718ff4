//! # Track Errors
//!
//! Error types for track piece and track mesh generation. Unknown orientation
//! codes are not errors; they decode to zero and are counted by the
//! [`OrientationDecoder`](crate::OrientationDecoder).

use park_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating track pieces or meshes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackError {
    /// The path type id is not known to the node source.
    #[error("Invalid track type: {type_id} / {type_count}")]
    InvalidPathType {
        /// Requested path type id.
        type_id: u16,
        /// Number of path types known to the source.
        type_count: u16,
    },

    /// The node source has no nodes for this path type.
    #[error("Track type {type_id} has no nodes")]
    EmptyPath {
        /// Requested path type id.
        type_id: u16,
    },

    /// The extrusion template was rejected.
    #[error("Invalid track template: {0}")]
    Template(#[from] MeshError),
}

/// Result type alias for track operations.
pub type TrackResult<T> = Result<T, TrackError>;
