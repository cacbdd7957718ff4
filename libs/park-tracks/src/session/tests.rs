//! Tests for the generation session caches.

use super::*;
use approx::assert_abs_diff_eq;
use config::constants::EPSILON;
use glam::{Quat, Vec2, Vec3};
use park_mesh::{IndexedMeshBuilder, Vertex};
use std::cell::Cell;

use crate::element::FootpathElement;
use crate::source::{PathNodeSource, StaticNodeSource};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rail cross-section: a strip 0.2 wide with a raised left edge, one unit long.
fn rail_template() -> IndexedMesh {
    let mut builder = IndexedMeshBuilder::new();
    builder.add_quad(
        Vertex::new(Vec3::new(-0.1, 0.1, 0.5), Vec3::X, Vec2::new(0.0, 1.0)),
        Vertex::new(Vec3::new(0.1, 0.0, 0.5), Vec3::Y, Vec2::new(1.0, 1.0)),
        Vertex::new(Vec3::new(0.1, 0.0, -0.5), Vec3::Y, Vec2::new(1.0, 0.0)),
        Vertex::new(Vec3::new(-0.1, 0.1, -0.5), Vec3::X, Vec2::new(0.0, 0.0)),
        0,
    );
    builder.into_mesh()
}

/// A straight, flat piece along +Z and a gentle slope up along +Z.
fn catalog() -> StaticNodeSource {
    let straight: Vec<RawPathNode> = (0..32).map(|i| RawPathNode::from_engine(16, i, 0, 8, 0, 0)).collect();
    let slope: Vec<RawPathNode> = (0..32)
        .map(|i| {
            let pitch = if i < 8 { 1 } else { 2 };
            RawPathNode::from_engine(16, i, i / 2, 8, 0, pitch)
        })
        .collect();
    [straight, slope].into_iter().collect()
}

fn session() -> GenerationSession<StaticNodeSource> {
    init_logger();
    GenerationSession::new(catalog(), "rail", &rail_template(), GenerationConfig::default())
}

// =============================================================================
// NODE AND PIECE CACHES
// =============================================================================

#[test]
fn nodes_are_loaded_once() {
    let mut session = session();
    let first = session.nodes(0).unwrap();
    let second = session.nodes(0).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let stats = session.stats();
    assert_eq!(stats.nodes, CacheStats { hits: 1, misses: 1, entries: 1 });
}

#[test]
fn invalid_type_is_rejected_and_not_cached() {
    let mut session = session();
    let err = session.piece(9).unwrap_err();
    assert_eq!(err, TrackError::InvalidPathType { type_id: 9, type_count: 2 });
    assert_eq!(session.stats().nodes.entries, 0);

    // Other types are unaffected.
    assert!(session.piece(1).is_ok());
}

#[test]
fn empty_type_is_rejected() {
    let mut source = catalog();
    let empty = source.push(Vec::new());
    let mut session = GenerationSession::new(source, "rail", &rail_template(), GenerationConfig::default());

    assert_eq!(session.nodes(empty).unwrap_err(), TrackError::EmptyPath { type_id: empty });
}

#[test]
fn piece_is_smoothed_and_cached() {
    let mut session = session();
    let piece = session.piece(0).unwrap();
    assert_eq!(piece.len(), 32);
    assert_abs_diff_eq!(piece.length(), 31.0 / 32.0, epsilon = EPSILON);

    let again = session.piece(0).unwrap();
    assert!(Arc::ptr_eq(&piece, &again));
    assert_eq!(session.stats().pieces, CacheStats { hits: 1, misses: 1, entries: 1 });
}

// =============================================================================
// MESH CACHE
// =============================================================================

#[test]
fn meshes_are_shared_per_shape_key() {
    let mut session = session();
    let mut track = TrackElement::new(0);
    let first = session.track_mesh(&track).unwrap();

    // Height and sequence do not change the shape.
    track.height = 24;
    let second = session.track_mesh(&track).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // The chain lift does.
    track.chainlift = true;
    let third = session.track_mesh(&track).unwrap();
    assert!(!Arc::ptr_eq(&first, &third));

    let stats = session.stats();
    assert_eq!(stats.meshes, CacheStats { hits: 1, misses: 2, entries: 2 });
    // Both shapes reuse one smoothed piece.
    assert_eq!(stats.pieces.misses, 1);
}

#[test]
fn straight_track_mesh_spans_the_piece() {
    let mut session = session();
    let mesh = session.track_mesh(&TrackElement::new(0)).unwrap();

    let bounds = mesh.bounds().unwrap();
    assert_abs_diff_eq!(bounds.min.z, -0.5, epsilon = EPSILON);
    assert_abs_diff_eq!(bounds.max.z, 15.0 / 32.0, epsilon = EPSILON);
    assert_abs_diff_eq!(bounds.min.x, -0.1, epsilon = EPSILON);
    assert_abs_diff_eq!(bounds.max.x, 0.1, epsilon = EPSILON);
    assert_abs_diff_eq!(bounds.max.y, 0.1, epsilon = EPSILON);

    for indices in mesh.submeshes() {
        assert!(indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }
}

#[test]
fn sloped_track_mesh_climbs() {
    let mut session = session();
    let mesh = session.track_mesh(&TrackElement::new(1)).unwrap();
    let bounds = mesh.bounds().unwrap();
    assert!(bounds.max.y > 0.4);
    assert!(session.decoder().unknown_codes().is_empty());
}

#[test]
fn inverted_transition_is_rolled_upside_down() {
    let mut session = session();
    let regular = session.track_mesh(&TrackElement::new(0)).unwrap();

    let flipped_track = TrackElement {
        type_id: 0,
        inverted: true,
        normal_to_inverted: true,
        ..TrackElement::default()
    };
    let flipped = session.track_mesh(&flipped_track).unwrap();

    let regular_bounds = regular.bounds().unwrap();
    let flipped_bounds = flipped.bounds().unwrap();
    assert_abs_diff_eq!(flipped_bounds.min.y, -regular_bounds.max.y, epsilon = EPSILON);
    assert_abs_diff_eq!(flipped_bounds.max.y, 0.0, epsilon = EPSILON);

    // Plain inverted track keeps its orientation.
    let inverted = TrackElement {
        type_id: 0,
        inverted: true,
        ..TrackElement::default()
    };
    let inverted = session.track_mesh(&inverted).unwrap();
    assert_eq!(inverted.bounds(), regular.bounds());
}

#[test]
fn inversion_variants_are_cached_apart_in_either_order() {
    let plain = TrackElement {
        type_id: 0,
        inverted: true,
        ..TrackElement::default()
    };
    let transition = TrackElement {
        normal_to_inverted: true,
        ..plain
    };
    assert_eq!(plain.shape_key(), transition.shape_key());

    let mut plain_first = session();
    let a_plain = plain_first.track_mesh(&plain).unwrap();
    let a_transition = plain_first.track_mesh(&transition).unwrap();

    let mut transition_first = session();
    let b_transition = transition_first.track_mesh(&transition).unwrap();
    let b_plain = transition_first.track_mesh(&plain).unwrap();

    assert_eq!(a_plain, b_plain);
    assert_eq!(a_transition, b_transition);
    assert_ne!(a_plain, a_transition);

    let plain_bounds = a_plain.bounds().unwrap();
    assert_abs_diff_eq!(plain_bounds.min.y, 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(plain_bounds.max.y, 0.1, epsilon = EPSILON);
    let transition_bounds = a_transition.bounds().unwrap();
    assert_abs_diff_eq!(transition_bounds.min.y, -0.1, epsilon = EPSILON);
    assert_abs_diff_eq!(transition_bounds.max.y, 0.0, epsilon = EPSILON);

    assert_eq!(plain_first.stats().meshes.entries, 2);
    assert_eq!(transition_first.stats().meshes.entries, 2);
}

/// Catalog that counts how often nodes are copied out of it.
struct CountingSource {
    inner: StaticNodeSource,
    copies: Cell<usize>,
}

impl PathNodeSource for CountingSource {
    fn type_count(&self) -> u16 {
        self.inner.type_count()
    }

    fn node_count(&self, type_id: u16) -> usize {
        self.inner.node_count(type_id)
    }

    fn nodes(&self, type_id: u16) -> Vec<RawPathNode> {
        self.copies.set(self.copies.get() + 1);
        self.inner.nodes(type_id)
    }
}

#[test]
fn empty_type_is_rejected_by_node_count() {
    init_logger();
    let mut inner = catalog();
    let empty = inner.push(Vec::new());
    let source = CountingSource {
        inner,
        copies: Cell::new(0),
    };
    let mut session = GenerationSession::new(source, "rail", &rail_template(), GenerationConfig::default());

    assert_eq!(session.nodes(empty).unwrap_err(), TrackError::EmptyPath { type_id: empty });
    assert_eq!(session.source().copies.get(), 0);

    assert!(session.nodes(0).is_ok());
    assert_eq!(session.source().copies.get(), 1);
}

#[test]
fn invalid_axis_falls_back_to_z() {
    init_logger();
    let config = GenerationConfig {
        extrusion_axis: 7,
        ..GenerationConfig::default()
    };
    let mut fallback = GenerationSession::new(catalog(), "rail", &rail_template(), config);
    let mut regular = session();

    let track = TrackElement::new(0);
    assert_eq!(
        fallback.track_mesh(&track).unwrap(),
        regular.track_mesh(&track).unwrap()
    );
}

#[test]
fn bad_template_only_fails_track_meshes() {
    init_logger();
    let flat = IndexedMeshBuilder::new().into_mesh();
    let mut session = GenerationSession::new(catalog(), "missing", &flat, GenerationConfig::default());

    let err = session.track_mesh(&TrackElement::new(0)).unwrap_err();
    assert_eq!(err, TrackError::Template(MeshError::EmptyTemplate));
    assert_eq!(session.stats().meshes.entries, 0);

    let footpath = ElementKind::Footpath(FootpathElement::default());
    let generated = session.generate(&footpath, &TileLocation::default()).unwrap();
    assert!(generated.is_some());
}

// =============================================================================
// ELEMENT DISPATCH
// =============================================================================

#[test]
fn generate_places_track_elements() {
    let mut session = session();
    let mut track = TrackElement::new(0);
    track.height = 32;
    let location = TileLocation::new(3, 4, 8, 1);

    let generated = session.generate(&track.into(), &location).unwrap().unwrap();
    assert_eq!(generated.key, Some(track.shape_key()));
    assert_abs_diff_eq!(generated.placement.position.x, 3.5);
    assert_abs_diff_eq!(generated.placement.position.y, 3.0);
    assert_abs_diff_eq!(generated.placement.position.z, 4.5);
    assert!(generated
        .placement
        .rotation
        .abs_diff_eq(Quat::from_rotation_y(90f32.to_radians()), 1e-6));
}

#[test]
fn trailing_track_tiles_produce_nothing() {
    let mut session = session();
    let mut track = TrackElement::new(0);
    track.sequence_index = 1;

    let generated = session.generate(&track.into(), &TileLocation::default()).unwrap();
    assert!(generated.is_none());
    assert_eq!(session.stats(), SessionStats::default());
}

#[test]
fn footpaths_share_one_mesh() {
    let mut session = session();
    let footpath = ElementKind::Footpath(FootpathElement { surface: 4 });
    let a = session.generate(&footpath, &TileLocation::new(0, 0, 2, 0)).unwrap().unwrap();
    let b = session.generate(&footpath, &TileLocation::new(5, 1, 2, 0)).unwrap().unwrap();

    assert!(Arc::ptr_eq(&a.mesh, &b.mesh));
    assert_eq!(a.key, None);
    assert_eq!(a.mesh.triangle_count(), 2);
}

#[test]
fn clear_drops_caches_and_counters() {
    let mut session = session();
    let first = session.track_mesh(&TrackElement::new(0)).unwrap();
    session.clear();
    assert_eq!(session.stats(), SessionStats::default());

    let second = session.track_mesh(&TrackElement::new(0)).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}
