//! # Path Smoothing
//!
//! Turns raw track nodes into smooth oriented path points.
//!
//! Raw nodes are snapped to the engine's coordinate grid and their encoded
//! orientations change in discrete jumps. Positions are smoothed with a
//! moving average. Rotations are interpolated between anchor nodes: one at
//! the middle of every run of nodes sharing the same encoded orientation, plus
//! both path ends.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use park_tracks::smoothing::lerp_nodes;
//! use park_tracks::RawPathNode;
//!
//! let nodes = [
//!     RawPathNode::new(Vec3::ZERO, 0, 0, 0),
//!     RawPathNode::new(Vec3::X, 0, 0, 0),
//! ];
//! assert_eq!(lerp_nodes(&nodes), vec![0, 1]);
//! ```

use glam::{Quat, Vec3};
use park_mesh::TransformPoint;

use crate::node::RawPathNode;
use crate::orientation::OrientationDecoder;

// =============================================================================
// POSITIONS
// =============================================================================

/// Averages the position of a node with its neighbours.
///
/// The window spans `window_radius` nodes on both sides. Near the path ends
/// it is shifted to stay inside the path and keeps its width; it only shrinks
/// when the path is shorter than the window. The first and last node are
/// returned unchanged so pieces keep connecting to their neighbours.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn smooth_position(nodes: &[RawPathNode], index: usize, window_radius: usize) -> Vec3 {
    let upper = nodes.len().saturating_sub(1);
    if index == 0 || index >= upper {
        return nodes[index].position;
    }

    let width = window_radius.saturating_mul(2);
    let start = index.saturating_sub(window_radius);
    let end = start.saturating_add(width).min(upper);
    let start = end.saturating_sub(width);

    let window = &nodes[start..=end];
    let sum: Vec3 = window.iter().map(|node| node.position).sum();
    sum / window.len() as f32
}

// =============================================================================
// ROTATIONS
// =============================================================================

/// Indices of the nodes whose rotation is used as-is.
///
/// Contains the middle node of every run of equal encoded orientations that
/// is followed by another run, and always the first and last index. The list
/// is strictly ascending. An empty path has no anchors.
pub fn lerp_nodes(nodes: &[RawPathNode]) -> Vec<usize> {
    let Some(last) = nodes.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut anchors = vec![0];
    let mut chunk_start = 0;
    for (index, node) in nodes.iter().enumerate() {
        if node.has_equal_rotation(&nodes[chunk_start]) {
            continue;
        }
        push_anchor(&mut anchors, chunk_start + (index - chunk_start) / 2);
        chunk_start = index;
    }
    push_anchor(&mut anchors, last);
    anchors
}

/// A single-node first run puts its middle on index 0.
fn push_anchor(anchors: &mut Vec<usize>, index: usize) {
    if anchors.last() != Some(&index) {
        anchors.push(index);
    }
}

/// Rotation of a node, interpolated between the surrounding anchors.
///
/// Anchor nodes return their own decoded rotation. Other nodes slerp between
/// the previous and next anchor, by their relative position between them.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn smooth_rotation(
    nodes: &[RawPathNode],
    index: usize,
    lerp_nodes: &[usize],
    decoder: &mut OrientationDecoder,
) -> Quat {
    let insert_at = match lerp_nodes.binary_search(&index) {
        Ok(_) => return decoder.node_rotation(&nodes[index]),
        Err(insert_at) => insert_at,
    };

    let previous = insert_at.checked_sub(1).and_then(|i| lerp_nodes.get(i));
    let (Some(&previous), Some(&next)) = (previous, lerp_nodes.get(insert_at)) else {
        // Not bracketed, which only happens with anchors that do not come
        // from `lerp_nodes`.
        return decoder.node_rotation(&nodes[index]);
    };

    let t = (index - previous) as f32 / (next - previous) as f32;
    let from = decoder.node_rotation(&nodes[previous]);
    let to = decoder.node_rotation(&nodes[next]);
    from.slerp(to, t)
}

// =============================================================================
// PATHS
// =============================================================================

/// Smooths every node of a path into an oriented path point.
pub fn smooth_path(
    nodes: &[RawPathNode],
    window_radius: usize,
    decoder: &mut OrientationDecoder,
) -> Vec<TransformPoint> {
    let anchors = lerp_nodes(nodes);
    (0..nodes.len())
        .map(|index| {
            TransformPoint::new(
                smooth_position(nodes, index, window_radius),
                smooth_rotation(nodes, index, &anchors, decoder),
            )
        })
        .collect()
}
