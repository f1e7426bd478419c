//! Cross-cutting mesh property tests shared by every generator:
//! index validity, outward winding, and watertightness.

use std::collections::HashMap;

use crate::math::Vec3;

use super::data::MeshData;


/// Positions closer than this are treated as the same physical point when
/// building edge identity (seam and pole vertices are duplicated records).
const MERGE_EPS: f32 = 1e-5;

/// Assign each vertex a canonical class id, merging vertices whose
/// positions coincide within [`MERGE_EPS`].
fn position_classes(mesh: &MeshData) -> Vec<usize> {
    let mut representatives: Vec<Vec3> = Vec::new();
    let mut classes = Vec::with_capacity(mesh.vertex_count());
    for vertex in mesh.vertices() {
        let position = vertex.position();
        let class = representatives
            .iter()
            .position(|rep| (rep - position).norm() < MERGE_EPS)
            .unwrap_or_else(|| {
                representatives.push(position);
                representatives.len() - 1
            });
        classes.push(class);
    }
    classes
}

/// Every index in bounds and the index count a multiple of 3.
fn assert_indices_valid(mesh: &MeshData) {
    assert_eq!(mesh.index_count() % 3, 0, "index count not a multiple of 3");
    let vertex_count = mesh.vertex_count() as u32;
    for &index in mesh.indices() {
        assert!(
            index < vertex_count,
            "index {index} out of bounds for {vertex_count} vertices"
        );
    }
}

/// The face normal implied by the right-hand rule must lie in the same
/// hemisphere as every stored vertex normal of the triangle.
fn assert_outward_winding(mesh: &MeshData) {
    for (triangle, chunk) in mesh.indices().chunks(3).enumerate() {
        let p0 = mesh.vertices()[chunk[0] as usize].position();
        let p1 = mesh.vertices()[chunk[1] as usize].position();
        let p2 = mesh.vertices()[chunk[2] as usize].position();
        let face = (p1 - p0).cross(&(p2 - p0));
        assert!(
            face.norm() > 0.0,
            "triangle {triangle} has zero area"
        );
        for &index in chunk {
            let stored = mesh.vertices()[index as usize].normal();
            assert!(
                face.dot(&stored) > 0.0,
                "triangle {triangle} winds against the normal of vertex {index}"
            );
        }
    }
}

/// Every physical edge must be shared by exactly two triangles. Edge
/// identity is position-based and winding-independent, so duplicated
/// seam/pole/ring vertices still map onto the same edge.
fn assert_watertight(mesh: &MeshData) {
    let classes = position_classes(mesh);
    let mut edge_uses: HashMap<(usize, usize), u32> = HashMap::new();
    for chunk in mesh.indices().chunks(3) {
        for (a, b) in [
            (chunk[0], chunk[1]),
            (chunk[1], chunk[2]),
            (chunk[2], chunk[0]),
        ] {
            let ca = classes[a as usize];
            let cb = classes[b as usize];
            let key = (ca.min(cb), ca.max(cb));
            *edge_uses.entry(key).or_insert(0) += 1;
        }
    }
    for (edge, uses) in &edge_uses {
        assert_eq!(
            *uses, 2,
            "edge {edge:?} is used by {uses} triangles, expected 2"
        );
    }
}
