//! PNG placeholder artwork.
//!
//! `PngImageGenerator` fills a fixed-size canvas with one colour and writes
//! it as PNG. The token name only shows up in logs; there is no rendering.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use pumpforge_core::asset::ImageGenerator;
use pumpforge_types::config::ImageConfig;
use pumpforge_types::error::GenerationError;

/// Canvas edge length in pixels.
pub const CANVAS_SIZE: u32 = 500;

/// Writes a solid-colour square PNG to a configured path.
#[derive(Debug, Clone)]
pub struct PngImageGenerator {
    path: PathBuf,
    color: [u8; 3],
}

impl PngImageGenerator {
    pub fn new(path: impl Into<PathBuf>, color: [u8; 3]) -> Self {
        Self {
            path: path.into(),
            color,
        }
    }

    /// Build from `[image]` configuration. Fails on an invalid colour.
    pub fn from_config(config: &ImageConfig) -> Result<Self, GenerationError> {
        Ok(Self::new(config.path.clone(), config.rgb()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self) -> Result<Vec<u8>, GenerationError> {
        let canvas = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgb(self.color));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(canvas)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| GenerationError::Image(format!("failed to encode PNG: {e}")))?;
        Ok(bytes)
    }
}

impl ImageGenerator for PngImageGenerator {
    #[tracing::instrument(name = "generate_image", skip(self), fields(path = %self.path.display()))]
    async fn generate(&self, token_name: &str) -> Result<PathBuf, GenerationError> {
        let bytes = self.encode()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                GenerationError::Image(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        tokio::fs::write(&self.path, &bytes).await.map_err(|e| {
            GenerationError::Image(format!("failed to write {}: {e}", self.path.display()))
        })?;

        tracing::debug!(bytes = bytes.len(), "placeholder image written");
        Ok(self.path.clone())
    }
}
