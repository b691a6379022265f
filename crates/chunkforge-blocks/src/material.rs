use chunkforge_geom::Direction;
use serde::{Deserialize, Serialize};

/// Material (texture-array layer) index for each face of a cube.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialIndexMapping {
    pub front: u32,
    pub back: u32,
    pub left: u32,
    pub right: u32,
    pub up: u32,
    pub down: u32,
}

impl MaterialIndexMapping {
    /// Same material on all six faces.
    #[inline]
    pub const fn uniform(material_index: u32) -> Self {
        Self {
            front: material_index,
            back: material_index,
            left: material_index,
            right: material_index,
            up: material_index,
            down: material_index,
        }
    }

    /// Shared side material with distinct top and bottom, e.g. grass.
    #[inline]
    pub const fn sides_top_bottom(side: u32, up: u32, down: u32) -> Self {
        Self {
            front: side,
            back: side,
            left: side,
            right: side,
            up,
            down,
        }
    }

    #[inline]
    pub const fn material_index(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Forward => self.front,
            Direction::Backward => self.back,
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

/// Static per-block-type metadata.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockDefinition {
    pub material_index_mapping: MaterialIndexMapping,
}

impl BlockDefinition {
    #[inline]
    pub const fn new(material_index_mapping: MaterialIndexMapping) -> Self {
        Self {
            material_index_mapping,
        }
    }
}
