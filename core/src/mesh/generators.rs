//! Mesh generators for common shapes.
//!
//! Every generator validates its arguments up front, then returns a fully
//! populated [`MeshData`] with unit per-vertex normals and triangles wound
//! counter-clockwise when viewed from outside the shape. Generation is
//! pure: identical arguments produce bit-identical vertex and index
//! buffers, and calls share no state.

use std::f32::consts::{PI, TAU};

use crate::math::{Vec2, Vec3};

use super::data::{MeshData, Vertex};
use super::error::GenError;

fn check_positive(name: &'static str, value: f32) -> Result<(), GenError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GenError::NonPositiveDimension { name, value })
    }
}

fn check_subdivisions(minimum: u32, actual: u32) -> Result<(), GenError> {
    if actual >= minimum {
        Ok(())
    } else {
        Err(GenError::TooFewSubdivisions { minimum, actual })
    }
}

/// Generate an axis-aligned cube of uniform size centered at the origin.
///
/// Each face gets four vertices of its own so it can carry a flat normal,
/// for 24 vertices and 36 indices total. Face UVs run (0,0) to (1,1).
pub fn generate_cube(size: f32) -> Result<MeshData, GenError> {
    check_positive("size", size)?;

    let mut mesh = MeshData::with_capacity(24, 36).with_label("cube");
    let faces = [
        Vec3::new(0.0, 0.0, 1.0),  // front
        Vec3::new(1.0, 0.0, 0.0),  // right
        Vec3::new(0.0, 1.0, 0.0),  // top
        Vec3::new(-1.0, 0.0, 0.0), // left
        Vec3::new(0.0, -1.0, 0.0), // bottom
        Vec3::new(0.0, 0.0, -1.0), // back
    ];
    for normal in faces {
        cube_face(&mut mesh, normal, size);
    }
    Ok(mesh)
}

/// Append one cube face. `normal` must be a unit axis direction.
fn cube_face(mesh: &mut MeshData, normal: Vec3, size: f32) {
    let start = mesh.vertex_count() as u32;

    // In-plane axes: the component rotation keeps `u` off the normal for
    // every axis direction, and the cross product makes (u, v, normal)
    // right-handed.
    let u = Vec3::new(normal.z, normal.x, normal.y);
    let v = normal.cross(&u);

    for i in 0..4u32 {
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        let position =
            normal * (size * 0.5) - (u + v) * (size * 0.5) + (u * col + v * row) * size;
        mesh.push_vertex(Vertex::new(position, normal, Vec2::new(col, row)));
    }

    mesh.push_triangle(start, start + 1, start + 3);
    mesh.push_triangle(start + 3, start + 2, start);
}

/// Generate a subdivided rectangle on the XZ plane, centered at the origin
/// with normal +Y.
///
/// Produces a `(subdivisions + 1)` by `(subdivisions + 1)` vertex grid with
/// UVs interpolated across [0, 1] on each axis, and two triangles per grid
/// cell wound counter-clockwise seen from above. At least one subdivision
/// is required.
pub fn generate_plane(width: f32, height: f32, subdivisions: u32) -> Result<MeshData, GenError> {
    check_positive("width", width)?;
    check_positive("height", height)?;
    check_subdivisions(1, subdivisions)?;

    let columns = subdivisions + 1;
    let vertex_count = (columns * columns) as usize;
    let index_count = (subdivisions * subdivisions * 6) as usize;
    let mut mesh = MeshData::with_capacity(vertex_count, index_count).with_label("plane");

    for row in 0..=subdivisions {
        for col in 0..=subdivisions {
            let u = col as f32 / subdivisions as f32;
            let v = row as f32 / subdivisions as f32;
            let position = Vec3::new(
                -width * 0.5 + width * u,
                0.0,
                height * 0.5 - height * v,
            );
            mesh.push_vertex(Vertex::new(position, Vec3::y(), Vec2::new(u, v)));
        }
    }

    for row in 0..subdivisions {
        for col in 0..subdivisions {
            let start = row * columns + col;
            mesh.push_triangle(start, start + 1, start + columns + 1);
            mesh.push_triangle(start + columns + 1, start + columns, start);
        }
    }
    Ok(mesh)
}

/// Generate a UV sphere.
///
/// Vertices are laid out row-major over `(subdivisions + 1)` latitude rows
/// by `(subdivisions + 1)` longitude columns. The seam column and the pole
/// rows carry duplicated positions so UVs stay continuous; that duplication
/// is by construction, not an error. Indices split into a fan connecting
/// the top pole row to the first ring, quad bands for the interior rows,
/// and a mirrored fan at the bottom. At least two subdivisions are needed
/// to close the shape with distinct poles.
pub fn generate_sphere(radius: f32, subdivisions: u32) -> Result<MeshData, GenError> {
    check_positive("radius", radius)?;
    check_subdivisions(2, subdivisions)?;

    let columns = subdivisions + 1;
    let vertex_count = (columns * columns) as usize;
    let index_count = (6 * subdivisions * (subdivisions - 1)) as usize;
    let mut mesh = MeshData::with_capacity(vertex_count, index_count).with_label("sphere");

    let theta_step = TAU / subdivisions as f32;
    let phi_step = PI / subdivisions as f32;
    for row in 0..=subdivisions {
        let phi = row as f32 * phi_step;
        for col in 0..=subdivisions {
            let theta = col as f32 * theta_step;
            let normal = Vec3::new(
                theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            );
            let uv = Vec2::new(
                col as f32 / subdivisions as f32,
                1.0 - row as f32 / subdivisions as f32,
            );
            mesh.push_vertex(Vertex::new(normal * radius, normal, uv));
        }
    }

    // Top cap: fan between the pole row and the first ring.
    let pole_start = 0;
    let side_start = columns;
    for i in 0..subdivisions {
        mesh.push_triangle(side_start + i, pole_start + i, side_start + i + 1);
    }

    // Interior bands: one quad per cell, split like the planar grid.
    for row in 1..subdivisions - 1 {
        for col in 0..subdivisions {
            let start = row * columns + col;
            mesh.push_triangle(start, start + 1, start + columns);
            mesh.push_triangle(start + columns, start + 1, start + columns + 1);
        }
    }

    // Bottom cap: mirrored fan against the last ring.
    let pole_start = columns * columns - columns;
    let side_start = pole_start - columns;
    for i in 0..subdivisions {
        mesh.push_triangle(side_start + i, side_start + i + 1, pole_start + i);
    }
    Ok(mesh)
}

/// Ring flavor for [`cylinder_ring`].
#[derive(Clone, Copy, PartialEq)]
enum RingKind {
    /// Normals along ±Y, disc UV mapping.
    Cap,
    /// Normals radially outward, cylindrical UV mapping.
    Side,
}

/// Append one ring of `subdivisions + 1` vertices at height `y`. The seam
/// vertex is emitted twice so UVs can wrap.
fn cylinder_ring(mesh: &mut MeshData, radius: f32, subdivisions: u32, y: f32, kind: RingKind) {
    let theta_step = TAU / subdivisions as f32;
    for i in 0..=subdivisions {
        let theta = i as f32 * theta_step;
        let (sin, cos) = theta.sin_cos();
        let position = Vec3::new(cos * radius, y, sin * radius);
        let (normal, uv) = match kind {
            RingKind::Side => (
                Vec3::new(cos, 0.0, sin),
                Vec2::new(
                    i as f32 / subdivisions as f32,
                    if y > 0.0 { 1.0 } else { 0.0 },
                ),
            ),
            RingKind::Cap => (
                Vec3::new(0.0, y.signum(), 0.0),
                Vec2::new(cos * 0.5 + 0.5, sin * 0.5 + 0.5),
            ),
        };
        mesh.push_vertex(Vertex::new(position, normal, uv));
    }
}

/// Generate a closed cylinder along the Y axis, centered at the origin.
///
/// A physical ring edge is recorded twice whenever the cap and the side
/// need different normals at the same position: each end carries one
/// cap-facing ring and one side-facing ring, plus a center vertex for the
/// cap fan. Vertex order is top center, top cap ring, top side ring,
/// bottom side ring, bottom cap ring, bottom center. At least three
/// subdivisions are required.
pub fn generate_cylinder(
    radius: f32,
    height: f32,
    subdivisions: u32,
) -> Result<MeshData, GenError> {
    check_positive("radius", radius)?;
    check_positive("height", height)?;
    check_subdivisions(3, subdivisions)?;

    let columns = subdivisions + 1;
    let vertex_count = (4 * columns + 2) as usize;
    let index_count = (12 * subdivisions) as usize;
    let mut mesh = MeshData::with_capacity(vertex_count, index_count).with_label("cylinder");

    let top_y = height * 0.5;
    let bottom_y = -top_y;

    mesh.push_vertex(Vertex::new(
        Vec3::new(0.0, top_y, 0.0),
        Vec3::y(),
        Vec2::new(0.5, 0.5),
    ));
    cylinder_ring(&mut mesh, radius, subdivisions, top_y, RingKind::Cap);
    cylinder_ring(&mut mesh, radius, subdivisions, top_y, RingKind::Side);
    cylinder_ring(&mut mesh, radius, subdivisions, bottom_y, RingKind::Side);
    cylinder_ring(&mut mesh, radius, subdivisions, bottom_y, RingKind::Cap);
    mesh.push_vertex(Vertex::new(
        Vec3::new(0.0, bottom_y, 0.0),
        -Vec3::y(),
        Vec2::new(0.5, 0.5),
    ));

    // Top cap: fan from the center vertex across the cap-facing ring.
    let cap_start = 1;
    for i in 0..subdivisions {
        mesh.push_triangle(0, cap_start + i + 1, cap_start + i);
    }

    // Sides: two triangles per segment between the side-facing rings.
    let side_start = 1 + columns;
    for i in 0..subdivisions {
        let start = side_start + i;
        mesh.push_triangle(start, start + 1, start + columns);
        mesh.push_triangle(start + columns, start + 1, start + columns + 1);
    }

    // Bottom cap: fan from the bottom center, wound for a -Y facing.
    let bottom_center = mesh.vertex_count() as u32 - 1;
    let cap_start = bottom_center - columns;
    for i in 0..subdivisions {
        mesh.push_triangle(bottom_center, cap_start + i, cap_start + i + 1);
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_cube_counts() {
        let mesh = generate_cube(1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.label(), Some("cube"));
    }

    #[test]
    fn test_generate_cube_face_normals_are_flat() {
        let mesh = generate_cube(2.0).unwrap();
        for face in mesh.vertices().chunks(4) {
            let normal = face[0].normal;
            assert!(face.iter().all(|v| v.normal == normal));
        }
    }

    #[test]
    fn test_generate_cube_rejects_non_positive_size() {
        let err = generate_cube(0.0).unwrap_err();
        assert_eq!(
            err,
            GenError::NonPositiveDimension {
                name: "size",
                value: 0.0
            }
        );
        assert!(generate_cube(-2.0).is_err());
    }

    #[test]
    fn test_generate_plane_counts() {
        let mesh = generate_plane(4.0, 2.0, 3).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.index_count(), 54);
    }

    #[test]
    fn test_generate_plane_unit_quad() {
        let mesh = generate_plane(2.0, 2.0, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);

        let uvs: Vec<[f32; 2]> = mesh.vertices().iter().map(|v| v.uv).collect();
        for corner in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]] {
            assert!(uvs.contains(&corner), "missing uv corner {corner:?}");
        }

        // Both triangles should face +Y.
        for tri in mesh.indices().chunks(3) {
            let p0 = mesh.vertices()[tri[0] as usize].position();
            let p1 = mesh.vertices()[tri[1] as usize].position();
            let p2 = mesh.vertices()[tri[2] as usize].position();
            let face = (p1 - p0).cross(&(p2 - p0));
            assert!(face.y > 0.0);
        }
    }

    #[test]
    fn test_generate_plane_rejects_bad_arguments() {
        let err = generate_plane(1.0, 1.0, 0).unwrap_err();
        assert_eq!(
            err,
            GenError::TooFewSubdivisions {
                minimum: 1,
                actual: 0
            }
        );
        assert!(generate_plane(0.0, 1.0, 1).is_err());
        assert!(generate_plane(1.0, -3.0, 1).is_err());
    }

    #[test]
    fn test_generate_sphere_counts() {
        let mesh = generate_sphere(1.0, 4).unwrap();
        assert_eq!(mesh.vertex_count(), 25);
        // 6n for the two caps plus 6n(n-2) for the interior bands.
        assert_eq!(mesh.index_count(), 72);
    }

    #[test]
    fn test_generate_sphere_minimum_subdivisions() {
        let mesh = generate_sphere(1.0, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.index_count(), 12);

        let err = generate_sphere(1.0, 1).unwrap_err();
        assert_eq!(
            err,
            GenError::TooFewSubdivisions {
                minimum: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_generate_sphere_normals_are_unit_and_radial() {
        let radius = 2.5;
        let mesh = generate_sphere(radius, 8).unwrap();
        for vertex in mesh.vertices() {
            let normal = vertex.normal();
            assert!((normal.norm() - 1.0).abs() < 1e-5);
            assert!((vertex.position() - normal * radius).norm() < 1e-5);
        }
    }

    #[test]
    fn test_generate_sphere_rejects_non_positive_radius() {
        assert!(generate_sphere(0.0, 8).is_err());
        assert!(generate_sphere(-1.0, 8).is_err());
    }

    #[test]
    fn test_generate_cylinder_counts() {
        let mesh = generate_cylinder(1.0, 2.0, 8).unwrap();
        // Four rings of subdivisions + 1 vertices plus two centers.
        assert_eq!(mesh.vertex_count(), 38);
        assert_eq!(mesh.index_count(), 96);
    }

    #[test]
    fn test_generate_cylinder_cap_and_side_normals_decoupled() {
        let mesh = generate_cylinder(1.0, 2.0, 8).unwrap();
        let top: Vec<&Vertex> = mesh
            .vertices()
            .iter()
            .filter(|v| v.position[1] > 0.0 && v.position[0].hypot(v.position[2]) > 0.5)
            .collect();

        // Every top ring position must be recorded once with the cap normal
        // and once with a radial normal.
        let cap_count = top.iter().filter(|v| v.normal == [0.0, 1.0, 0.0]).count();
        let side_count = top.iter().filter(|v| v.normal[1] == 0.0).count();
        assert_eq!(cap_count, 9);
        assert_eq!(side_count, 9);
        for vertex in top.iter().filter(|v| v.normal[1] == 0.0) {
            let radial = Vec3::new(vertex.position[0], 0.0, vertex.position[2]).normalize();
            assert!((vertex.normal() - radial).norm() < 1e-5);
        }
    }

    #[test]
    fn test_generate_cylinder_rejects_bad_arguments() {
        let err = generate_cylinder(1.0, 2.0, 2).unwrap_err();
        assert_eq!(
            err,
            GenError::TooFewSubdivisions {
                minimum: 3,
                actual: 2
            }
        );
        assert!(generate_cylinder(0.0, 2.0, 8).is_err());
        assert!(generate_cylinder(1.0, 0.0, 8).is_err());
    }

    #[test]
    fn test_generators_are_deterministic() {
        let a = generate_cube(1.5).unwrap();
        let b = generate_cube(1.5).unwrap();
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());

        let a = generate_plane(3.0, 2.0, 7).unwrap();
        let b = generate_plane(3.0, 2.0, 7).unwrap();
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());

        let a = generate_sphere(1.0, 16).unwrap();
        let b = generate_sphere(1.0, 16).unwrap();
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());

        let a = generate_cylinder(0.5, 3.0, 12).unwrap();
        let b = generate_cylinder(0.5, 3.0, 12).unwrap();
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());
    }
}
