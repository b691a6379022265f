use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::MaterialsConfig;
use crate::material::{BlockDefinition, MaterialIndexMapping};
use crate::types::{BlockType, UnknownBlockType};

#[derive(Debug, Error)]
pub enum MaterialTableError {
    #[error("failed to read material table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse material table: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    UnknownBlockType(#[from] UnknownBlockType),
}

/// Read-only lookup from block type to its definition.
///
/// Built once by whoever orchestrates world setup and handed to mesh builds by
/// shared reference. A block type without an entry resolves to the all-zero
/// mapping so meshing never fails on missing material data.
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    definitions: HashMap<BlockType, BlockDefinition>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::with_capacity(BlockType::COUNT),
        }
    }

    /// The stock table shipped with the engine.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(BlockType::Empty, BlockDefinition::default());
        table.insert_mapping(BlockType::Stone, MaterialIndexMapping::uniform(1));
        table.insert_mapping(BlockType::Dirt, MaterialIndexMapping::uniform(2));
        table.insert_mapping(
            BlockType::Grass,
            MaterialIndexMapping::sides_top_bottom(3, 0, 2),
        );
        table.insert_mapping(BlockType::Gravel, MaterialIndexMapping::uniform(27));
        table.insert_mapping(BlockType::Wood, MaterialIndexMapping::uniform(4));
        table.insert_mapping(BlockType::IronBlock, MaterialIndexMapping::uniform(30));
        table
    }

    /// Adds or replaces a definition, returning the previous one.
    pub fn insert(
        &mut self,
        block_type: BlockType,
        definition: BlockDefinition,
    ) -> Option<BlockDefinition> {
        self.definitions.insert(block_type, definition)
    }

    #[inline]
    pub fn insert_mapping(
        &mut self,
        block_type: BlockType,
        mapping: MaterialIndexMapping,
    ) -> Option<BlockDefinition> {
        self.insert(block_type, BlockDefinition::new(mapping))
    }

    #[inline]
    pub fn get(&self, block_type: BlockType) -> Option<&BlockDefinition> {
        self.definitions.get(&block_type)
    }

    /// Material mapping for `block_type`, or the zero mapping on a miss.
    #[inline]
    pub fn lookup(&self, block_type: BlockType) -> MaterialIndexMapping {
        self.get(block_type)
            .map(|d| d.material_index_mapping)
            .unwrap_or_default()
    }

    #[inline]
    pub fn contains(&self, block_type: BlockType) -> bool {
        self.definitions.contains_key(&block_type)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, MaterialTableError> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut table = Self::new();
        for (name, entry) in cfg.blocks {
            let block_type: BlockType = name.parse()?;
            if table.insert_mapping(block_type, entry.mapping()).is_some() {
                log::warn!("material table: duplicate entry for {block_type}; last one wins");
            }
        }
        log::debug!("material table loaded with {} entries", table.len());
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MaterialTableError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
