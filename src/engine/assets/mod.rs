// Asset management system
//
// Loads the sprite sheet from disk and slices it into per-state textures.

pub mod loader;
pub mod sheet;

pub use loader::AssetLoader;
pub use sheet::{SheetLayout, StateName, TextureTable};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset type: {0}")]
    InvalidType(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),
}
