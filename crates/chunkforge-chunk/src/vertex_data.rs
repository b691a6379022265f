use chunkforge_geom::{Aabb, Vec3, Vec4};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("attribute `{attribute}` has {len} entries but there are {vertices} vertices")]
    AttributeLength {
        attribute: &'static str,
        len: usize,
        vertices: usize,
    },
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("index {value} at position {at} references a vertex past the end ({vertices})")]
    DanglingIndex { at: usize, value: u32, vertices: usize },
}

/// Geometry produced for one chunk, ready to hand to a renderer.
///
/// Five parallel sequences: `normals`, `tangents` and `uv0` always have one
/// entry per vertex. `uv0.z` carries the face's material index. Indices are
/// `u32` because a single chunk can exceed the 16-bit range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexData {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec4>,
    pub uv0: Vec<Vec3>,
}

impl VertexData {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            normals: Vec::with_capacity(vertices),
            tangents: Vec::with_capacity(vertices),
            uv0: Vec::with_capacity(vertices),
        }
    }

    /// Clears all arrays but retains capacity for the next rebuild.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.normals.clear();
        self.tangents.clear();
        self.uv0.clear();
    }

    /// Ensures room for at least `vertices` / `indices` entries in total.
    pub fn reserve_total(&mut self, vertices: usize, indices: usize) {
        let extra_v = vertices.saturating_sub(self.vertices.len());
        let extra_i = indices.saturating_sub(self.indices.len());
        self.vertices.reserve(extra_v);
        self.normals.reserve(extra_v);
        self.tangents.reserve(extra_v);
        self.uv0.reserve(extra_v);
        self.indices.reserve(extra_i);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Vertex capacity currently held by the position buffer.
    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Bounds of all vertex positions, `None` when there is no geometry.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Checks the buffer layout invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let vertices = self.vertices.len();
        for (attribute, len) in [
            ("normals", self.normals.len()),
            ("tangents", self.tangents.len()),
            ("uv0", self.uv0.len()),
        ] {
            if len != vertices {
                return Err(LayoutError::AttributeLength {
                    attribute,
                    len,
                    vertices,
                });
            }
        }
        if self.indices.len() % 3 != 0 {
            return Err(LayoutError::PartialTriangle(self.indices.len()));
        }
        if let Some((at, &value)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &ix)| ix as usize >= vertices)
        {
            return Err(LayoutError::DanglingIndex {
                at,
                value,
                vertices,
            });
        }
        Ok(())
    }
}
