use std::fmt;
use std::str::FromStr;

use chunkforge_geom::IVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every kind of block the world knows about. `Empty` is the non-solid sentinel.
///
/// Deserializes through [`FromStr`], so config files accept the same spellings as the CLI.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum BlockType {
    #[default]
    Empty,
    Stone,
    Dirt,
    Grass,
    Gravel,
    Wood,
    IronBlock,
}

impl BlockType {
    pub const COUNT: usize = 7;

    pub const ALL: [BlockType; BlockType::COUNT] = [
        BlockType::Empty,
        BlockType::Stone,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Gravel,
        BlockType::Wood,
        BlockType::IronBlock,
    ];

    #[inline]
    pub fn is_solid(self) -> bool {
        self != BlockType::Empty
    }

    pub const fn name(self) -> &'static str {
        match self {
            BlockType::Empty => "empty",
            BlockType::Stone => "stone",
            BlockType::Dirt => "dirt",
            BlockType::Grass => "grass",
            BlockType::Gravel => "gravel",
            BlockType::Wood => "wood",
            BlockType::IronBlock => "iron_block",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown block type `{0}`")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        BlockType::ALL
            .into_iter()
            .find(|t| t.name() == key)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

impl TryFrom<String> for BlockType {
    type Error = UnknownBlockType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single voxel: its type and its position local to the owning chunk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub block_type: BlockType,
    pub position: IVec3,
}

impl Block {
    #[inline]
    pub const fn new(block_type: BlockType, position: IVec3) -> Self {
        Self {
            block_type,
            position,
        }
    }

    /// Empty block at `position`.
    #[inline]
    pub const fn empty_at(position: IVec3) -> Self {
        Self::new(BlockType::Empty, position)
    }

    /// Solid blocks hide the faces of their neighbours that touch them.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.block_type.is_solid()
    }
}
