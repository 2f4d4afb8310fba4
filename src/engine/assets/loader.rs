// Asset loading functionality

use super::sheet::{load_textures, SheetLayout, TextureTable};
use super::AssetError;
use anyhow::Result;
use image::RgbaImage;
use log::info;
use std::path::{Path, PathBuf};

/// Supported image file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and decoding asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load and decode an image as RGBA
    pub fn load_image(&self, name: &str) -> Result<RgbaImage> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        let supported = path
            .extension()
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
            .unwrap_or(false);
        if !supported {
            return Err(AssetError::InvalidType(name.to_string()).into());
        }

        let image = image::open(&path)
            .map_err(|e| AssetError::LoadError(format!("Failed to decode {}: {}", name, e)))?;
        Ok(image.to_rgba8())
    }

    /// Load a sprite sheet and slice it into a texture table
    pub fn load_texture_table(
        &self,
        name: &str,
        layout: &SheetLayout,
        declared_rows: usize,
    ) -> Result<TextureTable> {
        let sheet = self.load_image(name)?;
        let table = load_textures(&sheet, layout, declared_rows)?;

        info!(
            "Loaded sheet {} ({}x{}): {} frames",
            name,
            sheet.width(),
            sheet.height(),
            table.total_frames()
        );
        for state in table.states() {
            info!("  {}: {} frames", state, table.frame_count(*state)?);
        }

        Ok(table)
    }
}
