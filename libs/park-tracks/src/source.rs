//! Boundary to the engine's track node catalog.

use crate::node::RawPathNode;

/// Supplies the raw nodes of every track type.
///
/// The catalog is static for the lifetime of a generation session, so
/// implementations may be queried repeatedly and must return the same nodes
/// each time.
pub trait PathNodeSource {
    /// Number of track types. Valid type ids are `0..type_count()`.
    fn type_count(&self) -> u16;

    /// Number of nodes of a track type, 0 for unknown types.
    fn node_count(&self, type_id: u16) -> usize;

    /// Nodes of a track type, empty for unknown types.
    fn nodes(&self, type_id: u16) -> Vec<RawPathNode>;
}

/// An in-memory node catalog.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use park_tracks::{PathNodeSource, RawPathNode, StaticNodeSource};
///
/// let mut source = StaticNodeSource::new();
/// let flat = source.push(vec![RawPathNode::new(Vec3::ZERO, 0, 0, 0)]);
/// assert_eq!(flat, 0);
/// assert_eq!(source.type_count(), 1);
/// assert_eq!(source.node_count(flat), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticNodeSource {
    paths: Vec<Vec<RawPathNode>>,
}

impl StaticNodeSource {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the nodes of a new track type and returns its type id.
    ///
    /// Type ids are assigned in order. Types past `u16::MAX` are not
    /// addressable.
    pub fn push(&mut self, nodes: Vec<RawPathNode>) -> u16 {
        let type_id = u16::try_from(self.paths.len()).unwrap_or(u16::MAX);
        self.paths.push(nodes);
        type_id
    }

    fn path(&self, type_id: u16) -> &[RawPathNode] {
        self.paths
            .get(usize::from(type_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl FromIterator<Vec<RawPathNode>> for StaticNodeSource {
    fn from_iter<I: IntoIterator<Item = Vec<RawPathNode>>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl PathNodeSource for StaticNodeSource {
    fn type_count(&self) -> u16 {
        u16::try_from(self.paths.len()).unwrap_or(u16::MAX)
    }

    fn node_count(&self, type_id: u16) -> usize {
        self.path(type_id).len()
    }

    fn nodes(&self, type_id: u16) -> Vec<RawPathNode> {
        self.path(type_id).to_vec()
    }
}
