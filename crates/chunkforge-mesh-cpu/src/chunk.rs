use std::ops::AddAssign;

use chunkforge_blocks::MaterialTable;
use chunkforge_chunk::{BlockGrid, Chunk, VertexData};
use chunkforge_geom::Direction;

use crate::cube::{FACE_VERTICES, build_cube};
use crate::face::FaceSet;

/// Counters from one or more mesh builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub solid_blocks: usize,
    pub emitted_faces: usize,
    pub culled_faces: usize,
    pub vertices: usize,
    pub indices: usize,
}

impl AddAssign for MeshStats {
    fn add_assign(&mut self, rhs: MeshStats) {
        self.solid_blocks += rhs.solid_blocks;
        self.emitted_faces += rhs.emitted_faces;
        self.culled_faces += rhs.culled_faces;
        self.vertices += rhs.vertices;
        self.indices += rhs.indices;
    }
}

/// Faces of the block at `grid` slot `index` that are not hidden by a solid neighbour.
/// Non-solid blocks have none.
pub fn visible_faces(grid: &BlockGrid, index: usize) -> FaceSet {
    let Some(block) = grid.blocks().get(index) else {
        return FaceSet::NONE;
    };
    if !block.is_solid() {
        return FaceSet::NONE;
    }
    let mut faces = FaceSet::ALL;
    for d in Direction::ALL {
        if grid.is_adjacent_solid(d, block.position) {
            faces.remove(d);
        }
    }
    faces
}

/// Rebuilds `out` from scratch for the blocks in `grid`.
///
/// Every solid block contributes one quad per face whose neighbour is not
/// solid. Neighbours across the chunk boundary are never consulted, so faces on
/// the chunk's outer shell are always emitted.
pub fn build_grid_mesh(grid: &BlockGrid, out: &mut VertexData, table: &MaterialTable) -> MeshStats {
    out.clear();
    let mut stats = MeshStats::default();
    let mut vertex_offset: u32 = 0;
    for (index, block) in grid.blocks().iter().enumerate() {
        if !block.is_solid() {
            continue;
        }
        stats.solid_blocks += 1;
        let faces = visible_faces(grid, index);
        stats.culled_faces += Direction::COUNT - faces.len();
        if faces.is_empty() {
            continue;
        }
        build_cube(out, &mut vertex_offset, block, table, faces);
        stats.emitted_faces += faces.len();
    }
    debug_assert_eq!(vertex_offset as usize, out.vertex_count());
    debug_assert_eq!(stats.emitted_faces * FACE_VERTICES, out.vertex_count());
    stats.vertices = out.vertex_count();
    stats.indices = out.index_count();
    stats
}

/// Rebuilds the chunk's own mesh buffer.
pub fn build_chunk_mesh(chunk: &mut Chunk, table: &MaterialTable) -> MeshStats {
    let position = chunk.position();
    let (grid, out) = chunk.parts_mut();
    let stats = build_grid_mesh(grid, out, table);
    log::debug!(
        "chunk ({}, {}) meshed: {} solid, {} faces ({} culled), {} verts, {} indices",
        position.x,
        position.y,
        stats.solid_blocks,
        stats.emitted_faces,
        stats.culled_faces,
        stats.vertices,
        stats.indices
    );
    stats
}
