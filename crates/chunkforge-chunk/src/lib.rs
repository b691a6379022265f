//! Chunk block storage and the per-chunk mesh buffer.
#![forbid(unsafe_code)]

mod grid;
mod vertex_data;

use chunkforge_blocks::Block;
use chunkforge_geom::{Direction, IVec2, IVec3, Vec3};
use thiserror::Error;

pub use grid::BlockGrid;
pub use vertex_data::{LayoutError, VertexData};

pub const WIDTH: usize = 16;
pub const LENGTH: usize = WIDTH;
pub const HEIGHT: usize = 16;
pub const TOTAL_BLOCK_COUNT: usize = WIDTH * LENGTH * HEIGHT;

/// Vertices emitted for a cube with all six faces (4 per face, none shared).
pub const CUBE_MAX_VERTICES: usize = 24;
pub const CUBE_MAX_INDICES: usize = 36;
pub const MAX_VERTICES: usize = TOTAL_BLOCK_COUNT * CUBE_MAX_VERTICES;
pub const MAX_INDICES: usize = TOTAL_BLOCK_COUNT * CUBE_MAX_INDICES;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    #[error("block index {index} is out of range (0..{})", TOTAL_BLOCK_COUNT)]
    BlockIndexOutOfRange { index: usize },
    #[error("local position ({x}, {y}, {z}) is outside the chunk")]
    PositionOutOfRange { x: i32, y: i32, z: i32 },
}

/// One chunk of the world: its blocks plus the mesh built from them.
#[derive(Clone, Debug)]
pub struct Chunk {
    position: IVec2,
    grid: BlockGrid,
    mesh: VertexData,
}

impl Chunk {
    /// `position` is the chunk's fixed slot in the world grid.
    pub fn new(position: IVec2) -> Self {
        Self {
            position,
            grid: BlockGrid::new(),
            mesh: VertexData::default(),
        }
    }

    #[inline]
    pub fn at(x: i32, y: i32) -> Self {
        Self::new(IVec2::new(x, y))
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Where this chunk's mesh sits in world space.
    #[inline]
    pub fn world_origin(&self) -> Vec3 {
        let o = Self::local_to_world(self.position);
        Vec3::new(o.x as f32, 0.0, o.y as f32)
    }

    /// Wraps a 2D world block position into chunk-local coordinates.
    ///
    /// Uses Euclidean remainder, so the result is always in `0..WIDTH` / `0..LENGTH`
    /// even for negative input: `(-1, -17)` maps to `(15, 15)`, not `(-1, -1)`.
    #[inline]
    pub fn world_to_local(world: IVec2) -> IVec2 {
        IVec2::new(
            world.x.rem_euclid(WIDTH as i32),
            world.y.rem_euclid(LENGTH as i32),
        )
    }

    /// World block position of a chunk's origin given its grid position.
    #[inline]
    pub fn local_to_world(chunk: IVec2) -> IVec2 {
        IVec2::new(chunk.x * WIDTH as i32, chunk.y * LENGTH as i32)
    }

    #[inline]
    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut BlockGrid {
        &mut self.grid
    }

    #[inline]
    pub fn mesh(&self) -> &VertexData {
        &self.mesh
    }

    /// Read access to the blocks alongside write access to the mesh, for builders.
    #[inline]
    pub fn parts_mut(&mut self) -> (&BlockGrid, &mut VertexData) {
        (&self.grid, &mut self.mesh)
    }

    #[inline]
    pub fn clear_vertex_data(&mut self) {
        self.mesh.clear();
    }

    /// Pre-sizes the mesh buffer for the densest possible chunk.
    pub fn reserve_mesh_worst_case(&mut self) {
        log::trace!(
            "chunk ({}, {}) reserving {} vertices / {} indices",
            self.position.x,
            self.position.y,
            MAX_VERTICES,
            MAX_INDICES
        );
        self.mesh.reserve_total(MAX_VERTICES, MAX_INDICES);
    }

    #[inline]
    pub fn get_block(&self, index: usize) -> Result<Block, ChunkError> {
        self.grid.get_block(index)
    }

    #[inline]
    pub fn get_block_at(&self, position: IVec3) -> Result<Block, ChunkError> {
        self.grid.get_block_at(position)
    }

    #[inline]
    pub fn remove_block(&mut self, index: usize) -> Result<(), ChunkError> {
        self.grid.remove_block(index)
    }

    #[inline]
    pub fn remove_block_at(&mut self, position: IVec3) -> Result<(), ChunkError> {
        self.grid.remove_block_at(position)
    }

    #[inline]
    pub fn is_adjacent_solid(&self, direction: Direction, position: IVec3) -> bool {
        self.grid.is_adjacent_solid(direction, position)
    }
}
