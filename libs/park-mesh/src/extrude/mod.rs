//! # Path Extruder
//!
//! Repeats a template mesh along oriented path segments.
//!
//! The template is tiled along one of its axes. Every copy is cut to the
//! segment by clamping its axial coordinates into `[0, length]`, and each
//! vertex is then warped by the start and end transforms of the segment,
//! interpolated by how far along the segment the vertex lies.
//!
//! ## Phase
//!
//! The `offset` argument of [`PathExtruder::add_segment`] is the distance
//! already covered by previous segments. Passing the running total keeps tile
//! boundaries continuous across segments.
//!
//! ## Tile Multiplier
//!
//! The multiplier scales both the tile length and the axial coordinates of
//! the template, but the phase start is only shifted by the scaled extent.
//! With a multiplier above 1 the first tile starts at
//! `(extent * (multiplier - 1) - phase) * multiplier` instead of 0, leaving
//! the start of the segment uncovered. Multipliers up to 1 cover the whole
//! segment.
//!
//! ## Example
//!
//! ```rust
//! use glam::{Quat, Vec2, Vec3};
//! use park_mesh::{IndexedMeshBuilder, PathExtruder, Vertex};
//!
//! // A flat strip, one unit long along Z.
//! let mut template = IndexedMeshBuilder::new();
//! template.add_quad(
//!     Vertex::new(Vec3::new(-0.5, 0.0, 0.5), Vec3::Y, Vec2::new(0.0, 1.0)),
//!     Vertex::new(Vec3::new(0.5, 0.0, 0.5), Vec3::Y, Vec2::new(1.0, 1.0)),
//!     Vertex::new(Vec3::new(0.5, 0.0, -0.5), Vec3::Y, Vec2::new(1.0, 0.0)),
//!     Vertex::new(Vec3::new(-0.5, 0.0, -0.5), Vec3::Y, Vec2::new(0.0, 0.0)),
//!     0,
//! );
//!
//! let mut extruder = PathExtruder::new(&template.to_mesh()).unwrap();
//! let length = extruder.add_segment(
//!     Vec3::ZERO, Quat::IDENTITY,
//!     Vec3::new(0.0, 0.0, 3.0), Quat::IDENTITY,
//!     0.0, 1.0, 0,
//! );
//! assert_eq!(length, 3.0);
//! assert_eq!(extruder.to_mesh().triangle_count(), 6);
//! ```

use std::fmt;

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::builder::IndexedMeshBuilder;
use crate::error::{MeshError, MeshResult};
use crate::mesh::IndexedMesh;
use crate::transform::{lerp_matrix, TransformPoint};
use crate::vertex::Vertex;

// =============================================================================
// AXIS
// =============================================================================

/// Template axis along which an extrusion is tiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis, the forward axis of path points.
    #[default]
    Z,
}

impl Axis {
    /// Component index of the axis in a vector.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis for a component index, or `None` if the index is not 0, 1 or 2.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

// =============================================================================
// PATH EXTRUDER
// =============================================================================

/// Builds extruded meshes out of one or more warped segments.
#[derive(Debug, Clone)]
pub struct PathExtruder {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    triangles: Vec<[u32; 3]>,
    axis: Axis,
    /// Template center along the axis.
    center: f32,
    /// Half the template size along the axis.
    extent: f32,
    builder: IndexedMeshBuilder,
}

impl PathExtruder {
    /// Creates an extruder tiling `template` along its Z axis.
    ///
    /// # Errors
    ///
    /// See [`PathExtruder::with_axis`].
    pub fn new(template: &IndexedMesh) -> MeshResult<Self> {
        Self::with_axis(template, Axis::Z)
    }

    /// Creates an extruder tiling `template` along `axis`.
    ///
    /// Triangles of every template submesh are extruded.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyTemplate`] if the template has no vertices
    /// and [`MeshError::ZeroExtentTemplate`] if it is flat along `axis`.
    pub fn with_axis(template: &IndexedMesh, axis: Axis) -> MeshResult<Self> {
        let bounds = template.bounds().ok_or(MeshError::EmptyTemplate)?;
        let center = bounds.center()[axis.index()];
        let extent = bounds.extents()[axis.index()];
        if !extent.is_finite() || extent <= 0.0 {
            return Err(MeshError::ZeroExtentTemplate { axis });
        }

        let vertices = template.vertices();
        Ok(Self {
            positions: vertices.iter().map(|v| v.position).collect(),
            normals: vertices.iter().map(|v| v.normal).collect(),
            uvs: vertices.iter().map(|v| v.uv).collect(),
            triangles: template.triangles().collect(),
            axis,
            center,
            extent,
            builder: IndexedMeshBuilder::new(),
        })
    }

    /// Tiling axis of the template.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Length of one template tile at the given multiplier.
    #[inline]
    pub fn tile_length(&self, multiplier: f32) -> f32 {
        2.0 * self.extent * multiplier
    }

    /// Adds an extruded segment and returns its length.
    ///
    /// `offset` shifts the tiling phase, `multiplier` scales the tile length
    /// and `submesh` selects the output submesh. A zero-length segment emits
    /// nothing and returns 0. A multiplier that is not positive and finite
    /// is logged and also emits nothing. A multiplier above 1 leaves a gap at
    /// the segment start; see the module docs.
    #[allow(clippy::too_many_arguments)]
    pub fn add_segment(
        &mut self,
        start_position: Vec3,
        start_rotation: Quat,
        end_position: Vec3,
        end_rotation: Quat,
        offset: f32,
        multiplier: f32,
        submesh: usize,
    ) -> f32 {
        let length = start_position.distance(end_position);
        if length.is_nan() || length <= 0.0 {
            return 0.0;
        }
        if !multiplier.is_finite() || multiplier <= 0.0 {
            log::error!("Cannot extrude segment with tile multiplier {multiplier}");
            return 0.0;
        }

        let axis = self.axis.index();
        let mesh_extent = self.extent * multiplier;
        let segment_length = mesh_extent * 2.0;

        let start_matrix = Mat4::from_rotation_translation(start_rotation, start_position);
        let end_matrix = Mat4::from_rotation_translation(end_rotation, end_position);

        // Move the template start to 0, then shift it back by the phase.
        let start_mesh = self.center - mesh_extent + offset.rem_euclid(segment_length);

        for &[i1, i2, i3] in &self.triangles {
            let (i1, i2, i3) = (i1 as usize, i2 as usize, i3 as usize);
            let units = [
                (self.positions[i1][axis] - start_mesh) * multiplier,
                (self.positions[i2][axis] - start_mesh) * multiplier,
                (self.positions[i3][axis] - start_mesh) * multiplier,
            ];
            let triangle_start = units[0].min(units[1]).min(units[2]);
            let triangle_end = units[0].max(units[1]).max(units[2]);

            let step_count = ((length - triangle_start) / segment_length).ceil() as i64;
            // A triangle ending before the segment start only shows up from
            // the next tile on.
            let first_step = i64::from(triangle_end < 0.0);

            for step in first_step..step_count {
                let step_position = step as f32 * segment_length;
                let warp = |index: usize, unit: f32| {
                    let axial = (unit + step_position).clamp(0.0, length);
                    let matrix = lerp_matrix(&start_matrix, &end_matrix, axial / length);
                    let mut position = self.positions[index];
                    position[axis] = 0.0;
                    Vertex::new(
                        matrix.transform_point3(position),
                        matrix.transform_vector3(self.normals[index]),
                        self.uvs[index],
                    )
                };

                let a = warp(i1, units[0]);
                let b = warp(i2, units[1]);
                let c = warp(i3, units[2]);
                self.builder.add_triangle(a, b, c, submesh);
            }
        }

        length
    }

    /// Adds an extruded segment between two transform points and returns its
    /// length. See [`PathExtruder::add_segment`].
    pub fn add_segment_between(
        &mut self,
        start: &TransformPoint,
        end: &TransformPoint,
        offset: f32,
        multiplier: f32,
        submesh: usize,
    ) -> f32 {
        self.add_segment(
            start.position,
            start.rotation,
            end.position,
            end.rotation,
            offset,
            multiplier,
            submesh,
        )
    }

    /// Exports all extrusions as a mesh.
    pub fn to_mesh(&self) -> IndexedMesh {
        self.builder.to_mesh()
    }

    /// Clears all extruded geometry but keeps the template.
    pub fn clear(&mut self) {
        self.builder.clear();
    }
}
