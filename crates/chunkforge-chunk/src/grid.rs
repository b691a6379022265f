use chunkforge_blocks::{Block, BlockType};
use chunkforge_geom::{Direction, IVec3};

use crate::{ChunkError, HEIGHT, LENGTH, TOTAL_BLOCK_COUNT, WIDTH};

/// Flat storage for one chunk's blocks.
///
/// Layout is y-major, then z, then x: `index = x + z*WIDTH + y*WIDTH*LENGTH`.
/// Anything that computes block indices by hand must follow this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockGrid {
    blocks: Vec<Block>,
}

impl Default for BlockGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockGrid {
    /// All blocks `Empty`, each carrying its own local position.
    pub fn new() -> Self {
        let blocks = (0..TOTAL_BLOCK_COUNT)
            .map(|i| Block::empty_at(Self::decode_index(i)))
            .collect();
        Self { blocks }
    }

    /// Linear index of `(x, y, z)`. Only meaningful for in-bounds coordinates;
    /// validate with [`BlockGrid::is_valid_local_position`] first.
    #[inline]
    pub const fn index(x: usize, y: usize, z: usize) -> usize {
        x + z * WIDTH + y * WIDTH * LENGTH
    }

    /// Validated index of a local position.
    #[inline]
    pub fn index_of(position: IVec3) -> Result<usize, ChunkError> {
        if !Self::is_valid_position(position) {
            return Err(ChunkError::PositionOutOfRange {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        Ok(Self::index(
            position.x as usize,
            position.y as usize,
            position.z as usize,
        ))
    }

    /// Inverse of [`BlockGrid::index`].
    #[inline]
    pub const fn decode_index(index: usize) -> IVec3 {
        let x = index % WIDTH;
        let z = (index / WIDTH) % LENGTH;
        let y = index / (WIDTH * LENGTH);
        IVec3::new(x as i32, y as i32, z as i32)
    }

    #[inline]
    pub const fn is_valid_local_position(x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && x < WIDTH as i32
            && y >= 0
            && y < HEIGHT as i32
            && z >= 0
            && z < LENGTH as i32
    }

    #[inline]
    pub const fn is_valid_position(position: IVec3) -> bool {
        Self::is_valid_local_position(position.x, position.y, position.z)
    }

    #[inline]
    pub const fn is_valid_block_index(index: usize) -> bool {
        index < TOTAL_BLOCK_COUNT
    }

    #[inline]
    fn check_index(index: usize) -> Result<(), ChunkError> {
        if Self::is_valid_block_index(index) {
            Ok(())
        } else {
            Err(ChunkError::BlockIndexOutOfRange { index })
        }
    }

    pub fn get_block(&self, index: usize) -> Result<Block, ChunkError> {
        Self::check_index(index)?;
        Ok(self.blocks[index])
    }

    pub fn get_block_at(&self, position: IVec3) -> Result<Block, ChunkError> {
        let index = Self::index_of(position)?;
        Ok(self.blocks[index])
    }

    /// Sets the block's type to `Empty`; its position is left alone.
    /// Removing an already-empty block is a no-op.
    pub fn remove_block(&mut self, index: usize) -> Result<(), ChunkError> {
        self.set_block(index, BlockType::Empty)
    }

    pub fn remove_block_at(&mut self, position: IVec3) -> Result<(), ChunkError> {
        let index = Self::index_of(position)?;
        self.blocks[index].block_type = BlockType::Empty;
        Ok(())
    }

    pub fn set_block(&mut self, index: usize, block_type: BlockType) -> Result<(), ChunkError> {
        Self::check_index(index)?;
        self.blocks[index].block_type = block_type;
        Ok(())
    }

    /// True when the neighbour of `position` in `direction` is inside this grid
    /// and solid. Neighbours in other chunks always count as not solid.
    #[inline]
    pub fn is_adjacent_solid(&self, direction: Direction, position: IVec3) -> bool {
        let Some(neighbor) = position.checked_add(direction.offset()) else {
            return false;
        };
        if !Self::is_valid_position(neighbor) {
            return false;
        }
        let index = Self::index(
            neighbor.x as usize,
            neighbor.y as usize,
            neighbor.z as usize,
        );
        self.blocks[index].is_solid()
    }

    /// Resets every block to `Empty` at its own local position.
    pub fn initialize(&mut self) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            *block = Block::empty_at(Self::decode_index(i));
        }
    }

    /// Gives every block `block_type`; positions are untouched.
    pub fn fill(&mut self, block_type: BlockType) {
        for block in &mut self.blocks {
            block.block_type = block_type;
        }
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        !self.blocks.iter().any(Block::is_solid)
    }
}
