use std::collections::BTreeMap;

use serde::Deserialize;

use crate::material::MaterialIndexMapping;

#[derive(Deserialize, Debug, Default)]
pub struct MaterialsConfig {
    #[serde(default)]
    pub blocks: BTreeMap<String, MaterialEntry>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum MaterialEntry {
    // Simple: stone = 1
    Uniform(u32),
    // Detailed: grass = { front = 3, back = 3, left = 3, right = 3, up = 0, down = 2 }
    PerFace(MaterialIndexMapping),
}

impl MaterialEntry {
    pub fn mapping(self) -> MaterialIndexMapping {
        match self {
            MaterialEntry::Uniform(ix) => MaterialIndexMapping::uniform(ix),
            MaterialEntry::PerFace(m) => m,
        }
    }
}
