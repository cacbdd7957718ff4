//! # Park Mesh
//!
//! Procedural mesh building for park geometry.
//!
//! ## Architecture
//!
//! ```text
//! TransformPoint[] ─┐
//!                   ├→ PathExtruder → IndexedMeshBuilder → IndexedMesh
//! template mesh ────┘
//! ```
//!
//! ## Components
//!
//! - [`IndexedMeshBuilder`]: deduplicates vertices and groups triangles into
//!   submeshes
//! - [`PathExtruder`]: tiles a template cross-section along oriented segments
//! - [`TransformPoint`]: a position and a rotation in one
//!
//! ## Usage
//!
//! ```rust
//! use glam::{Vec2, Vec3};
//! use park_mesh::{IndexedMeshBuilder, Vertex};
//!
//! let mut builder = IndexedMeshBuilder::new();
//! let a = Vertex::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Y, Vec2::ZERO);
//! let b = Vertex::new(Vec3::new(1.0, 0.0, 1.0), Vec3::Y, Vec2::X);
//! let c = Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Y, Vec2::ONE);
//! let d = Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, Vec2::Y);
//! builder.add_quad(a, b, c, d, 0);
//!
//! let mesh = builder.to_mesh();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod extrude;
pub mod mesh;
pub mod transform;
mod vertex;

pub use builder::IndexedMeshBuilder;
pub use error::{MeshError, MeshResult};
pub use extrude::{Axis, PathExtruder};
pub use mesh::{Bounds, IndexedMesh};
pub use transform::TransformPoint;
pub use vertex::Vertex;
