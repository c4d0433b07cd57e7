//! Startup asset loading.

use crate::config::AssetPaths;
use crate::error::AssetError;
use crate::game::SpriteImages;
use crate::tilemap::TilemapDocument;
use log::debug;
use macroquad::prelude::*;
use std::path::Path;

/// Everything the demo needs, decoded in memory but not yet on the GPU.
pub struct Assets {
    /// Decoded sprite and tileset images.
    pub images: SpriteImages<Image>,
    /// Validated map.
    pub tilemap: TilemapDocument,
}

impl Assets {
    /// Read and decode every startup asset. Stops at the first failure.
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let images = SpriteImages {
            player: load_image(&paths.player)?,
            enemy: load_image(&paths.enemy)?,
            potion: load_image(&paths.potion)?,
            tileset: load_image(&paths.tileset)?,
        };

        let tilemap = TilemapDocument::load(&paths.tilemap)?;
        debug!(
            "loaded tilemap {} ({}x{} tiles, {} layers)",
            paths.tilemap.display(),
            tilemap.width,
            tilemap.height,
            tilemap.layers.len()
        );

        Ok(Self { images, tilemap })
    }

    /// Upload the images as textures. Needs a live macroquad context.
    pub fn into_textures(self) -> (SpriteImages<Texture2D>, TilemapDocument) {
        let SpriteImages {
            player,
            enemy,
            potion,
            tileset,
        } = self.images;

        let textures = SpriteImages {
            player: upload(&player),
            enemy: upload(&enemy),
            potion: upload(&potion),
            tileset: upload(&tileset),
        };
        (textures, self.tilemap)
    }
}

fn load_image(path: &Path) -> Result<Image, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = Image::from_file_with_format(&bytes, None).map_err(|e| AssetError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        "loaded image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

fn upload(image: &Image) -> Texture2D {
    let tex = Texture2D::from_image(image);
    tex.set_filter(FilterMode::Nearest);
    tex
}
