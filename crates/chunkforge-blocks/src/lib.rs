//! Block types, per-face material mappings, and the material table.
#![forbid(unsafe_code)]

pub mod config;
pub mod material;
pub mod table;
pub mod types;

pub use material::{BlockDefinition, MaterialIndexMapping};
pub use table::{MaterialTable, MaterialTableError};
pub use types::{Block, BlockType, UnknownBlockType};
