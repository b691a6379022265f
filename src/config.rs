use std::fs;
use std::path::{Path, PathBuf};

use chunkforge_blocks::BlockType;
use chunkforge_geom::IVec3;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Demo settings. Every field is optional in the file; CLI flags win over it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Mesh worker threads; 0 uses rayon's global pool.
    #[serde(default)]
    pub threads: usize,
    /// Material table TOML; the built-in table is used when absent.
    #[serde(default)]
    pub materials: Option<PathBuf>,
    #[serde(default)]
    pub world: WorldSection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WorldSection {
    #[serde(default = "default_fill")]
    pub fill: BlockType,
    #[serde(default)]
    pub reserve_worst_case: bool,
    /// Block positions to remove after the initial build, as `[x, y, z]`.
    #[serde(default)]
    pub remove: Vec<[i32; 3]>,
}

fn default_fill() -> BlockType {
    BlockType::IronBlock
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            fill: default_fill(),
            reserve_worst_case: false,
            remove: Vec::new(),
        }
    }
}

impl WorldSection {
    pub fn removals(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.remove.iter().map(|&[x, y, z]| IVec3::new(x, y, z))
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&s)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.world.fill, BlockType::IronBlock);
    }

    #[test]
    fn reads_every_section() {
        let cfg = AppConfig::from_toml_str(
            r#"
            threads = 3
            materials = "assets/materials.toml"

            [world]
            fill = "grass"
            reserve_worst_case = true
            remove = [[0, 0, 0], [17, 2, 35]]
        "#,
        )
        .unwrap();
        assert_eq!(cfg.threads, 3);
        assert_eq!(cfg.materials, Some(PathBuf::from("assets/materials.toml")));
        assert_eq!(cfg.world.fill, BlockType::Grass);
        assert!(cfg.world.reserve_worst_case);
        let removals: Vec<_> = cfg.world.removals().collect();
        assert_eq!(removals, vec![IVec3::ZERO, IVec3::new(17, 2, 35)]);
    }

    #[test]
    fn fill_spelling_matches_cli() {
        let cfg = AppConfig::from_toml_str("[world]\nfill = \"Iron_Block\"\n").unwrap();
        assert_eq!(cfg.world.fill, BlockType::IronBlock);
        assert_eq!("Iron_Block".parse::<BlockType>(), Ok(cfg.world.fill));
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            AppConfig::from_toml_str("[world]\nfill = \"lava\"\n"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            AppConfig::load_from_path(Path::new("/no/such/chunkforge.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn shipped_files_parse() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let cfg = AppConfig::load_from_path(&root.join("assets/chunkforge.toml")).unwrap();
        assert_eq!(cfg.world.fill, BlockType::IronBlock);
        let table = chunkforge_blocks::MaterialTable::from_path(root.join("assets/materials.toml"))
            .unwrap();
        assert_eq!(table.len(), BlockType::COUNT);
    }
}
