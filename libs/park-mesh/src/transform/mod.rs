//! # Transforms
//!
//! Oriented path points and the matrix helpers used to warp template
//! vertices between them.
//!
//! Conventions follow the engine axes: Y is up, Z is forward. Euler angles
//! are in degrees and applied roll first, then pitch, then yaw.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// TRANSFORM POINT
// =============================================================================

/// A position with an orientation along a path.
///
/// # Example
///
/// ```rust
/// use glam::{Quat, Vec3};
/// use park_mesh::TransformPoint;
///
/// let point = TransformPoint::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
/// assert_eq!(point.forward(), Vec3::Z);
/// assert_eq!(point.to_matrix().transform_point3(Vec3::ZERO), point.position);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformPoint {
    /// Position of the point.
    pub position: Vec3,
    /// Orientation of the point.
    pub rotation: Quat,
}

impl Default for TransformPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformPoint {
    /// Point at the origin without rotation.
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Quat::IDENTITY);

    /// Creates a transform point.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Direction the point faces.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Up vector of the point.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translation-rotation matrix with unit scale.
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

// =============================================================================
// MATRIX HELPERS
// =============================================================================

/// Interpolates two matrices component by component.
///
/// `time` is clamped to `[0, 1]`. This is not a rigid interpolation: the
/// rotation part of the result is not orthonormal in between, so geometry
/// shrinks where the two rotations differ a lot, and collapses entirely
/// halfway between two rotations that are 180 degrees apart. Consecutive
/// path points are close enough in practice.
pub fn lerp_matrix(left: &Mat4, right: &Mat4, time: f32) -> Mat4 {
    let time = time.clamp(0.0, 1.0);
    *left + (*right - *left) * time
}

/// Builds a rotation from Euler angles in degrees.
///
/// Rotates around Z (`roll`), then X (`pitch`), then Y (`yaw`).
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use park_mesh::transform::euler_degrees;
///
/// let rotation = euler_degrees(0.0, 90.0, 0.0);
/// assert!((rotation * Vec3::Z).abs_diff_eq(Vec3::X, 1e-6));
/// ```
pub fn euler_degrees(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_rotation_y(yaw.to_radians())
        * Quat::from_rotation_x(pitch.to_radians())
        * Quat::from_rotation_z(roll.to_radians())
}
