//! CPU-side mesh data structures.

use crate::math::{Vec2, Vec3};

/// A single mesh vertex: position, normal, and texture coordinate.
///
/// Plain `f32` arrays with `#[repr(C)]` so a vertex slice can be cast
/// directly to bytes for upload. 32 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Surface normal, unit length by construction.
    pub normal: [f32; 3],
    /// Texture coordinate, conventionally in [0, 1].
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a vertex from math types.
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            uv: uv.into(),
        }
    }

    /// Position as a vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Normal as a vector.
    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// A CPU-side triangle mesh: ordered vertices plus u32 indices grouped in
/// triples, each triple naming one counter-clockwise triangle.
///
/// A `MeshData` is constructed fresh per generator call, fully populated
/// before it is returned, and then owned by the caller - typically uploaded
/// once to vertex/index buffers and never mutated again. Invariants upheld
/// by the generators: every index is less than the vertex count, the index
/// count is a multiple of 3, and winding is counter-clockwise viewed from
/// outside the shape.
#[derive(Clone, Default)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    label: Option<String>,
}

impl MeshData {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with pre-allocated buffers.
    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(index_capacity),
            label: None,
        }
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a vertex.
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Append one triangle as three vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All indices, grouped in triples.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Raw vertex bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl std::fmt::Debug for MeshData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshData")
            .field("label", &self.label)
            .field("vertex_count", &self.vertices.len())
            .field("index_count", &self.indices.len())
            .finish()
    }
}
