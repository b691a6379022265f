use chunkforge_blocks::{Block, MaterialTable};
use chunkforge_chunk::VertexData;
use chunkforge_geom::{Direction, IVec3, Vec3, Vec4};

use crate::face::FaceSet;

pub const FACE_VERTICES: usize = 4;
pub const FACE_INDICES: usize = 6;

const H: f32 = 0.5;

/// Corner offsets around the block centre, four per face, indexed by
/// `Direction::index()`. The per-face order fixes winding and UV placement.
pub const CUBE_VERTICES: [[Vec3; FACE_VERTICES]; Direction::COUNT] = [
    // Forward (+z)
    [
        Vec3::new(H, -H, H),
        Vec3::new(-H, -H, H),
        Vec3::new(-H, H, H),
        Vec3::new(H, H, H),
    ],
    // Backward (-z)
    [
        Vec3::new(-H, -H, -H),
        Vec3::new(H, -H, -H),
        Vec3::new(H, H, -H),
        Vec3::new(-H, H, -H),
    ],
    // Left (-x)
    [
        Vec3::new(-H, -H, H),
        Vec3::new(-H, -H, -H),
        Vec3::new(-H, H, -H),
        Vec3::new(-H, H, H),
    ],
    // Right (+x)
    [
        Vec3::new(H, -H, -H),
        Vec3::new(H, -H, H),
        Vec3::new(H, H, H),
        Vec3::new(H, H, -H),
    ],
    // Up (+y)
    [
        Vec3::new(-H, H, -H),
        Vec3::new(H, H, -H),
        Vec3::new(H, H, H),
        Vec3::new(-H, H, H),
    ],
    // Down (-y)
    [
        Vec3::new(-H, -H, H),
        Vec3::new(H, -H, H),
        Vec3::new(H, -H, -H),
        Vec3::new(-H, -H, -H),
    ],
];

/// Two triangles per face, relative to the face's first vertex.
pub const FACE_TRIANGLES: [u32; FACE_INDICES] = [0, 2, 1, 0, 3, 2];

pub const FACE_UVS: [(f32, f32); FACE_VERTICES] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Geometry for a single face, before it is appended to a buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceQuad {
    pub vertices: [Vec3; FACE_VERTICES],
    /// Relative to this quad; add the buffer's running vertex offset when appending.
    pub indices: [u32; FACE_INDICES],
    pub normals: [Vec3; FACE_VERTICES],
    pub tangents: [Vec4; FACE_VERTICES],
    pub uvs: [Vec3; FACE_VERTICES],
}

impl FaceQuad {
    /// Appends this face with its indices shifted by `base`.
    pub fn append_to(&self, out: &mut VertexData, base: u32) {
        out.vertices.extend_from_slice(&self.vertices);
        out.normals.extend_from_slice(&self.normals);
        out.tangents.extend_from_slice(&self.tangents);
        out.uv0.extend_from_slice(&self.uvs);
        out.indices.extend(self.indices.iter().map(|i| base + i));
    }
}

pub fn build_face(direction: Direction, position: IVec3, material_index: u32) -> FaceQuad {
    let origin = Vec3::from(position);
    let corners = &CUBE_VERTICES[direction.index()];
    let material = material_index as f32;
    FaceQuad {
        vertices: corners.map(|c| c + origin),
        indices: FACE_TRIANGLES,
        normals: [direction.normal(); FACE_VERTICES],
        tangents: [direction.tangent(); FACE_VERTICES],
        uvs: FACE_UVS.map(|(u, v)| Vec3::new(u, v, material)),
    }
}

/// Emits the faces in `faces` for `block`, in canonical face order, and
/// advances `vertex_offset` by four per face. An empty set writes nothing.
pub fn build_cube(
    out: &mut VertexData,
    vertex_offset: &mut u32,
    block: &Block,
    table: &MaterialTable,
    faces: FaceSet,
) {
    if faces.is_empty() {
        return;
    }
    let mapping = table.lookup(block.block_type);
    for direction in faces.iter() {
        let quad = build_face(direction, block.position, mapping.material_index(direction));
        quad.append_to(out, *vertex_offset);
        *vertex_offset += FACE_VERTICES as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_corners_lie_on_their_plane() {
        for d in Direction::ALL {
            let n = d.normal();
            for c in CUBE_VERTICES[d.index()] {
                assert_eq!(c.dot(n), H, "{d:?}");
            }
        }
    }

    #[test]
    fn triangle_cross_products_point_outward() {
        for d in Direction::ALL {
            let q = build_face(d, IVec3::ZERO, 0);
            for tri in q.indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|k| q.vertices[k as usize]);
                let n = (b - a).cross(c - a);
                assert!(n.dot(d.normal()) > 0.0, "{d:?}");
            }
        }
    }

    #[test]
    fn build_face_translates_and_tags_material() {
        let q = build_face(Direction::Up, IVec3::new(2, 3, 4), 27);
        assert_eq!(q.vertices[0], Vec3::new(1.5, 3.5, 3.5));
        assert!(q.uvs.iter().all(|uv| uv.z == 27.0));
        assert_eq!(q.uvs[2], Vec3::new(1.0, 1.0, 27.0));
        assert_eq!(q.normals, [Vec3::UP; 4]);
    }
}
