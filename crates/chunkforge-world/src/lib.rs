//! Fixed-size grid of chunks and world/chunk/local coordinate math.
#![forbid(unsafe_code)]

use chunkforge_chunk::{BlockGrid, Chunk, ChunkError};
use chunkforge_geom::{IVec2, IVec3};
use thiserror::Error;

/// World size in chunks along x.
pub const WIDTH: usize = 10;
/// World size in chunks along the second grid axis (world z).
pub const LENGTH: usize = 10;
pub const TOTAL_CHUNK_COUNT: usize = WIDTH * LENGTH;

pub const WORLD_WIDTH_IN_BLOCKS: usize = WIDTH * chunkforge_chunk::WIDTH;
pub const WORLD_LENGTH_IN_BLOCKS: usize = LENGTH * chunkforge_chunk::LENGTH;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    #[error("chunk index {index} is out of range (0..{})", TOTAL_CHUNK_COUNT)]
    ChunkIndexOutOfRange { index: usize },
    #[error("chunk position ({x}, {y}) is outside the world")]
    ChunkPositionOutOfRange { x: i32, y: i32 },
    #[error("world position ({x}, {y}, {z}) is outside the world")]
    WorldPositionOutOfRange { x: i32, y: i32, z: i32 },
    #[error(transparent)]
    Chunk(#[from] ChunkError),
}

/// Where a world block lives: which chunk, which slot, and its chunk-local position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockAddress {
    pub chunk_index: usize,
    pub block_index: usize,
    pub local: IVec3,
}

/// Owns every chunk of the world, stored at `x + y * WIDTH`.
#[derive(Debug)]
pub struct ChunkWorld {
    chunks: Vec<Chunk>,
}

impl Default for ChunkWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkWorld {
    pub fn new() -> Self {
        let mut chunks = Vec::with_capacity(TOTAL_CHUNK_COUNT);
        for y in 0..LENGTH as i32 {
            for x in 0..WIDTH as i32 {
                chunks.push(Chunk::at(x, y));
            }
        }
        log::debug!("world created with {} chunks", chunks.len());
        Self { chunks }
    }

    #[inline]
    pub const fn chunk_index(x: usize, y: usize) -> usize {
        x + y * WIDTH
    }

    /// Validated index of a chunk grid position.
    pub fn index_of_chunk(position: IVec2) -> Result<usize, WorldError> {
        if !Self::is_valid_chunk_position(position) {
            return Err(WorldError::ChunkPositionOutOfRange {
                x: position.x,
                y: position.y,
            });
        }
        Ok(Self::chunk_index(position.x as usize, position.y as usize))
    }

    /// Chunk grid position containing the world block column `(wx, wy)`.
    /// Rounds toward negative infinity.
    #[inline]
    pub fn chunk_position(wx: i32, wy: i32) -> IVec2 {
        IVec2::new(
            wx.div_euclid(chunkforge_chunk::WIDTH as i32),
            wy.div_euclid(chunkforge_chunk::LENGTH as i32),
        )
    }

    /// `world` relative to the origin of chunk `chunk`. Height passes through.
    #[inline]
    pub fn local_position(world: IVec3, chunk: IVec2) -> IVec3 {
        IVec3::new(
            world.x - chunk.x * chunkforge_chunk::WIDTH as i32,
            world.y,
            world.z - chunk.y * chunkforge_chunk::LENGTH as i32,
        )
    }

    #[inline]
    pub const fn is_valid_chunk_index(index: usize) -> bool {
        index < TOTAL_CHUNK_COUNT
    }

    #[inline]
    pub const fn is_valid_chunk_position(position: IVec2) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < WIDTH as i32
            && position.y < LENGTH as i32
    }

    /// True when the 2D world block column lies inside the world.
    #[inline]
    pub const fn is_valid_world_position(world: IVec2) -> bool {
        world.x >= 0
            && world.y >= 0
            && world.x < WORLD_WIDTH_IN_BLOCKS as i32
            && world.y < WORLD_LENGTH_IN_BLOCKS as i32
    }

    pub fn get_chunk(&self, index: usize) -> Result<&Chunk, WorldError> {
        self.chunks
            .get(index)
            .ok_or(WorldError::ChunkIndexOutOfRange { index })
    }

    pub fn get_chunk_mut(&mut self, index: usize) -> Result<&mut Chunk, WorldError> {
        self.chunks
            .get_mut(index)
            .ok_or(WorldError::ChunkIndexOutOfRange { index })
    }

    pub fn get_chunk_at(&self, position: IVec2) -> Result<&Chunk, WorldError> {
        let index = Self::index_of_chunk(position)?;
        self.get_chunk(index)
    }

    pub fn get_chunk_at_mut(&mut self, position: IVec2) -> Result<&mut Chunk, WorldError> {
        let index = Self::index_of_chunk(position)?;
        self.get_chunk_mut(index)
    }

    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[inline]
    pub fn chunks_mut(&mut self) -> &mut [Chunk] {
        &mut self.chunks
    }

    pub fn remove_block(
        &mut self,
        chunk_index: usize,
        block_index: usize,
    ) -> Result<(), WorldError> {
        self.get_chunk_mut(chunk_index)?.remove_block(block_index)?;
        Ok(())
    }

    /// Resolves a world block position to its chunk and slot.
    pub fn locate_block(world: IVec3) -> Result<BlockAddress, WorldError> {
        if !Self::is_valid_world_position(IVec2::new(world.x, world.z)) {
            return Err(WorldError::WorldPositionOutOfRange {
                x: world.x,
                y: world.y,
                z: world.z,
            });
        }
        let chunk = Self::chunk_position(world.x, world.z);
        let local = Self::local_position(world, chunk);
        let block_index = BlockGrid::index_of(local)?;
        Ok(BlockAddress {
            chunk_index: Self::index_of_chunk(chunk)?,
            block_index,
            local,
        })
    }

    /// Removes the block at a world position and reports where it was.
    pub fn remove_block_at(&mut self, world: IVec3) -> Result<BlockAddress, WorldError> {
        let addr = Self::locate_block(world)?;
        self.remove_block(addr.chunk_index, addr.block_index)?;
        Ok(addr)
    }
}

impl Drop for ChunkWorld {
    fn drop(&mut self) {
        log::debug!("releasing world of {} chunks", self.chunks.len());
    }
}
