//! Smoothed track pieces.

use config::constants::QUARTER_TURN_DEGREES;
use glam::Quat;
use park_mesh::TransformPoint;
use serde::{Deserialize, Serialize};

use crate::node::RawPathNode;
use crate::orientation::OrientationDecoder;
use crate::smoothing::smooth_path;

/// A complete track piece with smoothed positions and rotations.
///
/// Points are relative to the first tile of the track element, before the
/// element's own rotation is applied.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use park_tracks::{OrientationDecoder, RawPathNode, TrackPiece};
///
/// let nodes: Vec<_> = (0..4)
///     .map(|i| RawPathNode::new(Vec3::new(0.0, 0.0, i as f32), 8, 0, 0))
///     .collect();
/// let piece = TrackPiece::from_nodes(&nodes, 3, &mut OrientationDecoder::new());
/// assert_eq!(piece.len(), 4);
/// assert_eq!(piece.length(), 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackPiece {
    points: Vec<TransformPoint>,
    length: f32,
}

impl TrackPiece {
    /// Creates a piece from already smoothed points.
    pub fn new(points: Vec<TransformPoint>) -> Self {
        let length = points
            .windows(2)
            .map(|pair| pair[0].position.distance(pair[1].position))
            .sum();
        Self { points, length }
    }

    /// Creates a piece by smoothing raw nodes.
    pub fn from_nodes(
        nodes: &[RawPathNode],
        window_radius: usize,
        decoder: &mut OrientationDecoder,
    ) -> Self {
        Self::new(smooth_path(nodes, window_radius, decoder))
    }

    /// All points of the piece, in path order.
    #[inline]
    pub fn points(&self) -> &[TransformPoint] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the piece has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance along the path from the first to the last point.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Point at `progress`, clamped to the last point.
    pub fn transform_at(&self, progress: usize) -> Option<TransformPoint> {
        let last = self.points.len().checked_sub(1)?;
        self.points.get(progress.min(last)).copied()
    }

    /// Vehicle rotation at `progress` on an element rotated by
    /// `track_rotation` quarter turns.
    ///
    /// Progress past the end uses the last point. An empty piece yields no
    /// rotation.
    pub fn vehicle_rotation(&self, track_rotation: u8, progress: usize) -> Quat {
        let Some(point) = self.transform_at(progress) else {
            return Quat::IDENTITY;
        };
        if track_rotation == 0 {
            return point.rotation;
        }
        let yaw = f32::from(track_rotation) * QUARTER_TURN_DEGREES;
        Quat::from_rotation_y(yaw.to_radians()) * point.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    fn straight_piece() -> TrackPiece {
        TrackPiece::new(
            (0..5)
                .map(|i| TransformPoint::new(Vec3::new(0.0, 0.0, i as f32 * 0.5), Quat::IDENTITY))
                .collect(),
        )
    }

    #[test]
    fn length_sums_point_distances() {
        assert_abs_diff_eq!(straight_piece().length(), 2.0);
        assert_eq!(TrackPiece::default().length(), 0.0);
    }

    #[test]
    fn transform_at_clamps_progress() {
        let piece = straight_piece();
        assert_eq!(piece.transform_at(2).map(|p| p.position.z), Some(1.0));
        assert_eq!(piece.transform_at(400), piece.points().last().copied());
        assert_eq!(TrackPiece::default().transform_at(0), None);
    }

    #[test]
    fn vehicle_rotation_applies_quarter_turns() {
        let piece = straight_piece();
        assert_eq!(piece.vehicle_rotation(0, 1), Quat::IDENTITY);

        let forward = piece.vehicle_rotation(1, 1) * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-6));

        let forward = piece.vehicle_rotation(2, 9999) * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn empty_piece_has_identity_rotation() {
        assert_eq!(TrackPiece::default().vehicle_rotation(3, 0), Quat::IDENTITY);
    }
}
