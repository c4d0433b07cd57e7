use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding a Tiled JSON map.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("failed to read map file {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The content is not JSON, or does not have the shape of a Tiled map.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A layer's data length does not match `width * height`.
    #[error("invalid layer size for layer '{layer}': expected {expected} tiles, found {actual}")]
    InvalidLayerSize {
        /// Name of the offending layer.
        layer: String,
        /// `width * height` of the layer.
        expected: usize,
        /// Actual length of the layer data.
        actual: usize,
    },
    /// A layer's `width * height` does not fit in memory.
    #[error("layer '{layer}' is too large: {width}x{height} tiles")]
    LayerTooLarge {
        /// Name of the offending layer.
        layer: String,
        /// Declared width in tiles.
        width: usize,
        /// Declared height in tiles.
        height: usize,
    },
    /// Only `.json` maps are supported.
    #[error("unsupported map format: {0}")]
    UnsupportedFormat(String),
}

impl MapError {
    /// True when the file was readable but its content was rejected.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            MapError::Parse(_)
                | MapError::InvalidLayerSize { .. }
                | MapError::LayerTooLarge { .. }
                | MapError::UnsupportedFormat(_)
        )
    }
}

/// Errors produced while loading the startup assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// An image file could not be read.
    #[error("failed to read asset {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// An image file was read but could not be decoded.
    #[error("failed to decode image {}: {message}", .path.display())]
    Image {
        /// Path of the image.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },
    /// The tilemap document failed to load.
    #[error(transparent)]
    Map(#[from] MapError),
}
