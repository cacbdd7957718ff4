//! Tests for the indexed mesh and bounds.

use super::*;
use glam::Vec2;

fn vertex(x: f32, y: f32, z: f32) -> Vertex {
    Vertex::new(Vec3::new(x, y, z), Vec3::Y, Vec2::ZERO)
}

#[test]
fn from_parts_accepts_valid_mesh() {
    let vertices = vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0), vertex(0.0, 0.0, 1.0)];
    let mesh = IndexedMesh::from_parts(vertices, vec![vec![0, 1, 2], vec![]]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.submesh_count(), 2);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.submesh(1), Some(&[][..]));
    assert_eq!(mesh.submesh(2), None);
}

#[test]
fn from_parts_rejects_incomplete_triangle() {
    let vertices = vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0)];
    let err = IndexedMesh::from_parts(vertices, vec![vec![0, 1]]).unwrap_err();
    assert_eq!(err, MeshError::IncompleteTriangle { submesh: 0, len: 2 });
}

#[test]
fn from_parts_rejects_out_of_range_index() {
    let vertices = vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0), vertex(0.0, 1.0, 0.0)];
    let err = IndexedMesh::from_parts(vertices, vec![vec![0, 1, 2], vec![0, 1, 3]]).unwrap_err();
    assert_eq!(
        err,
        MeshError::IndexOutOfRange {
            submesh: 1,
            index: 3,
            vertex_count: 3
        }
    );
}

#[test]
fn triangles_iterate_all_submeshes_in_order() {
    let vertices = vec![
        vertex(0.0, 0.0, 0.0),
        vertex(1.0, 0.0, 0.0),
        vertex(0.0, 0.0, 1.0),
        vertex(1.0, 0.0, 1.0),
    ];
    let mesh = IndexedMesh::from_parts(vertices, vec![vec![0, 1, 2], vec![2, 1, 3]]).unwrap();
    let triangles: Vec<_> = mesh.triangles().collect();
    assert_eq!(triangles, vec![[0, 1, 2], [2, 1, 3]]);
}

#[test]
fn empty_mesh_has_no_bounds() {
    assert!(IndexedMesh::new().bounds().is_none());
}

#[test]
fn bounds_cover_every_axis() {
    let vertices = vec![vertex(-1.0, 2.0, 5.0), vertex(3.0, -2.0, 1.0), vertex(0.0, 0.0, -3.0)];
    let mesh = IndexedMesh::from_parts(vertices, vec![vec![0, 1, 2]]).unwrap();
    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(bounds.max, Vec3::new(3.0, 2.0, 5.0));
    assert_eq!(bounds.center(), Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(bounds.extents(), Vec3::new(2.0, 2.0, 4.0));
}
