//! # Generation Session
//!
//! Owns every cache of one map generation run.
//!
//! ## Caches
//!
//! ```text
//! type id ─→ raw nodes ─→ TrackPiece
//!                              │
//! (PathShapeKey, flipped) ─────┴→ extruded IndexedMesh
//! ```
//!
//! Inversion transitions are extruded rolled upside down, so their meshes are
//! cached apart from plain elements with the same shape key.
//!
//! Entries are created on first request and kept until [`GenerationSession::clear`].
//! Meshes are handed out as `Arc`s so placed elements can share them across
//! threads once generation is done.
//!
//! ## Faults
//!
//! An unknown track type or an unusable extrusion template fails only the
//! request for that track type. The error is logged with the track type and
//! template id and returned. Other track types and footpaths keep working.

use std::collections::HashMap;
use std::sync::Arc;

use config::constants::GenerationConfig;
use park_mesh::{Axis, IndexedMesh, MeshError, PathExtruder, TransformPoint};
use serde::{Deserialize, Serialize};

use crate::element::{footpath_mesh, inversion_roll, ElementKind, TileLocation, TrackElement};
use crate::error::{TrackError, TrackResult};
use crate::key::PathShapeKey;
use crate::node::RawPathNode;
use crate::orientation::OrientationDecoder;
use crate::piece::TrackPiece;
use crate::source::PathNodeSource;

// =============================================================================
// STATISTICS
// =============================================================================

/// Hit and miss counts of one cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Requests served from the cache.
    pub hits: usize,
    /// Requests that generated a new entry.
    pub misses: usize,
    /// Entries currently cached.
    pub entries: usize,
}

/// Cache statistics of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Raw node arrays per track type.
    pub nodes: CacheStats,
    /// Smoothed track pieces per track type.
    pub pieces: CacheStats,
    /// Extruded meshes per shape key and inversion flip.
    pub meshes: CacheStats,
}

// =============================================================================
// MESH KEY
// =============================================================================

/// Cache key of an extruded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeshKey {
    shape: PathShapeKey,
    flipped: bool,
}

impl MeshKey {
    fn of(track: &TrackElement) -> Self {
        Self {
            shape: track.shape_key(),
            flipped: track.flips_inversion(),
        }
    }
}

// =============================================================================
// GENERATED ELEMENT
// =============================================================================

/// A mesh with its world placement.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedElement {
    /// Shared mesh of the element.
    pub mesh: Arc<IndexedMesh>,
    /// World position and rotation of the mesh.
    pub placement: TransformPoint,
    /// Shape key of track meshes.
    pub key: Option<PathShapeKey>,
}

// =============================================================================
// SESSION
// =============================================================================

/// Generates and caches track pieces and meshes from a node source.
///
/// # Example
///
/// ```rust
/// use config::constants::GenerationConfig;
/// use glam::{Vec2, Vec3};
/// use park_mesh::{IndexedMeshBuilder, Vertex};
/// use park_tracks::{GenerationSession, RawPathNode, StaticNodeSource, TrackElement};
///
/// let mut template = IndexedMeshBuilder::new();
/// template.add_quad(
///     Vertex::new(Vec3::new(-0.4, 0.0, 0.5), Vec3::Y, Vec2::Y),
///     Vertex::new(Vec3::new(0.4, 0.0, 0.5), Vec3::Y, Vec2::ONE),
///     Vertex::new(Vec3::new(0.4, 0.0, -0.5), Vec3::Y, Vec2::X),
///     Vertex::new(Vec3::new(-0.4, 0.0, -0.5), Vec3::Y, Vec2::ZERO),
///     0,
/// );
///
/// let mut source = StaticNodeSource::new();
/// let straight = source.push(
///     (0..32).map(|i| RawPathNode::from_engine(16, i, 0, 8, 0, 0)).collect(),
/// );
///
/// let mut session = GenerationSession::new(
///     source, "rails", &template.to_mesh(), GenerationConfig::default(),
/// );
/// let mesh = session.track_mesh(&TrackElement::new(straight)).unwrap();
/// assert!(!mesh.is_empty());
/// ```
#[derive(Debug)]
pub struct GenerationSession<S> {
    source: S,
    config: GenerationConfig,
    template_id: String,
    extruder: Result<PathExtruder, MeshError>,
    decoder: OrientationDecoder,
    nodes: HashMap<u16, Arc<[RawPathNode]>>,
    pieces: HashMap<u16, Arc<TrackPiece>>,
    meshes: HashMap<MeshKey, Arc<IndexedMesh>>,
    footpath: Option<Arc<IndexedMesh>>,
    stats: SessionStats,
}

impl<S: PathNodeSource> GenerationSession<S> {
    /// Creates a session extruding `template` for every track type.
    ///
    /// An invalid template is reported when a track mesh is requested, so
    /// that sessions without track elements still work.
    pub fn new(
        source: S,
        template_id: impl Into<String>,
        template: &IndexedMesh,
        config: GenerationConfig,
    ) -> Self {
        let template_id = template_id.into();
        let axis = Axis::from_index(config.extrusion_axis).unwrap_or_else(|| {
            log::warn!(
                "Invalid extrusion axis {} for template '{}', using {}",
                config.extrusion_axis,
                template_id,
                Axis::default()
            );
            Axis::default()
        });
        if config.tile_multiplier > 1.0 {
            log::warn!(
                "Tile multiplier {} leaves the start of each segment uncovered",
                config.tile_multiplier
            );
        }
        Self {
            source,
            config,
            template_id,
            extruder: PathExtruder::with_axis(template, axis),
            decoder: OrientationDecoder::new(),
            nodes: HashMap::new(),
            pieces: HashMap::new(),
            meshes: HashMap::new(),
            footpath: None,
            stats: SessionStats::default(),
        }
    }

    /// The node source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The session configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The orientation decoder, with the unknown codes seen so far.
    pub fn decoder(&self) -> &OrientationDecoder {
        &self.decoder
    }

    /// Cache statistics.
    pub fn stats(&self) -> SessionStats {
        let mut stats = self.stats;
        stats.nodes.entries = self.nodes.len();
        stats.pieces.entries = self.pieces.len();
        stats.meshes.entries = self.meshes.len();
        stats
    }

    /// Drops every cached entry and resets the statistics and decoder.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.pieces.clear();
        self.meshes.clear();
        self.footpath = None;
        self.stats = SessionStats::default();
        self.decoder = OrientationDecoder::new();
        if let Ok(extruder) = &mut self.extruder {
            extruder.clear();
        }
    }

    /// Raw nodes of a track type.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidPathType`] for a type id outside the
    /// source catalog and [`TrackError::EmptyPath`] for a type without nodes.
    pub fn nodes(&mut self, type_id: u16) -> TrackResult<Arc<[RawPathNode]>> {
        if let Some(nodes) = self.nodes.get(&type_id) {
            self.stats.nodes.hits += 1;
            return Ok(Arc::clone(nodes));
        }

        let type_count = self.source.type_count();
        if type_id >= type_count {
            log::error!(
                "Invalid track type: {type_id} / {type_count} (template '{}')",
                self.template_id
            );
            return Err(TrackError::InvalidPathType {
                type_id,
                type_count,
            });
        }

        // Empty types are rejected without copying nodes out of the source.
        let nodes: Arc<[RawPathNode]> = match self.source.node_count(type_id) {
            0 => Vec::new().into(),
            _ => self.source.nodes(type_id).into(),
        };
        if nodes.is_empty() {
            log::error!(
                "Track type {type_id} has no nodes (template '{}')",
                self.template_id
            );
            return Err(TrackError::EmptyPath { type_id });
        }

        log::debug!("Loaded {} nodes for track type {type_id}", nodes.len());
        self.stats.nodes.misses += 1;
        self.nodes.insert(type_id, Arc::clone(&nodes));
        Ok(nodes)
    }

    /// Smoothed track piece of a track type.
    ///
    /// # Errors
    ///
    /// See [`GenerationSession::nodes`].
    pub fn piece(&mut self, type_id: u16) -> TrackResult<Arc<TrackPiece>> {
        if let Some(piece) = self.pieces.get(&type_id) {
            self.stats.pieces.hits += 1;
            return Ok(Arc::clone(piece));
        }

        let nodes = self.nodes(type_id)?;
        let piece = Arc::new(TrackPiece::from_nodes(
            &nodes,
            self.config.smoothing_radius,
            &mut self.decoder,
        ));

        log::debug!(
            "Smoothed track type {type_id}: {} points, length {:.3}",
            piece.len(),
            piece.length()
        );
        self.stats.pieces.misses += 1;
        self.pieces.insert(type_id, Arc::clone(&piece));
        Ok(piece)
    }

    /// Extruded mesh of a track element, shared by all elements with the
    /// same shape key and inversion flip.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Template`] if the extrusion template is
    /// unusable, otherwise see [`GenerationSession::nodes`].
    pub fn track_mesh(&mut self, track: &TrackElement) -> TrackResult<Arc<IndexedMesh>> {
        let key = MeshKey::of(track);
        if let Some(mesh) = self.meshes.get(&key) {
            log::trace!("Reusing mesh {} for track type {}", key.shape, track.type_id);
            self.stats.meshes.hits += 1;
            return Ok(Arc::clone(mesh));
        }

        let piece = self.piece(track.type_id)?;
        let extruder = match &mut self.extruder {
            Ok(extruder) => extruder,
            Err(err) => {
                log::error!(
                    "Cannot extrude track type {} with template '{}': {err}",
                    track.type_id,
                    self.template_id
                );
                return Err(TrackError::Template(err.clone()));
            }
        };

        let mesh = Arc::new(extrude_piece(
            extruder,
            &piece,
            key.flipped,
            self.config.tile_multiplier,
        ));

        log::debug!(
            "Extruded track type {} (key {}, flipped {}): {} vertices, {} triangles",
            track.type_id,
            key.shape,
            key.flipped,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.stats.meshes.misses += 1;
        self.meshes.insert(key, Arc::clone(&mesh));
        Ok(mesh)
    }

    /// Shared footpath tile mesh.
    pub fn footpath_mesh(&mut self) -> Arc<IndexedMesh> {
        Arc::clone(self.footpath.get_or_insert_with(|| Arc::new(footpath_mesh())))
    }

    /// Mesh and placement of a map element.
    ///
    /// Returns `None` for track tiles that are not the first tile of their
    /// piece; the first tile carries the mesh of the whole piece.
    ///
    /// # Errors
    ///
    /// See [`GenerationSession::track_mesh`].
    pub fn generate(
        &mut self,
        element: &ElementKind,
        location: &TileLocation,
    ) -> TrackResult<Option<GeneratedElement>> {
        let (mesh, key) = match element {
            ElementKind::Track(track) => {
                if !track.produces_geometry() {
                    return Ok(None);
                }
                (self.track_mesh(track)?, Some(track.shape_key()))
            }
            ElementKind::Footpath(_) => (self.footpath_mesh(), None),
        };

        Ok(Some(GeneratedElement {
            mesh,
            placement: element.placement(location),
            key,
        }))
    }
}

/// Extrudes the template along every segment of a piece.
fn extrude_piece(
    extruder: &mut PathExtruder,
    piece: &TrackPiece,
    flip: bool,
    multiplier: f32,
) -> IndexedMesh {
    extruder.clear();
    let roll = inversion_roll();

    let mut offset = 0.0;
    for pair in piece.points().windows(2) {
        let (mut start, mut end) = (pair[0], pair[1]);
        if flip {
            start.rotation *= roll;
            end.rotation *= roll;
        }
        extruder.add_segment_between(&start, &end, offset, multiplier, 0);
        offset += start.position.distance(end.position);
    }
    extruder.to_mesh()
}

#[cfg(test)]
mod tests;
