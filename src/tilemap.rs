use crate::error::MapError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;

/// A non-empty tile id as stored in layer data. Raw id 0 means "no tile".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(NonZeroU32);

impl TileId {
    /// `None` for the empty-cell id 0.
    #[inline]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(TileId)
    }

    /// The raw id as written in the map.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

fn default_true() -> bool {
    true
}
fn one() -> f32 {
    1.0
}

/// One grid of tile ids covering the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Raw tile ids, row-major, `width * height` long.
    #[serde(default)]
    pub data: Vec<u32>,
    /// Width in tiles.
    #[serde(default)]
    pub width: usize,
    /// Height in tiles.
    #[serde(default)]
    pub height: usize,
    /// Editor-assigned layer id.
    #[serde(default)]
    pub id: u32,
    /// Layer name from the editor.
    #[serde(default)]
    pub name: String,
    /// Layer opacity, 0.0 to 1.0.
    #[serde(default = "one")]
    pub opacity: f32,
    /// Tiled layer type, usually `"tilelayer"`.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Hidden layers are kept but not drawn.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Horizontal offset in tiles.
    #[serde(default)]
    pub x: i32,
    /// Vertical offset in tiles.
    #[serde(default)]
    pub y: i32,
}

impl Layer {
    /// Every cell in row-major order, with empty cells as `None`.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, Option<TileId>)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, &raw)| (idx, TileId::new(raw)))
    }

    fn validate(&self) -> Result<(), MapError> {
        let expected = self
            .width
            .checked_mul(self.height)
            .ok_or_else(|| MapError::LayerTooLarge {
                layer: self.name.clone(),
                width: self.width,
                height: self.height,
            })?;
        if self.data.len() != expected {
            return Err(MapError::InvalidLayerSize {
                layer: self.name.clone(),
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Reference to an external tileset. Kept for round-tripping only.
///
/// Embedded tilesets carry no `source`; their remaining fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilesetRef {
    /// First global tile id covered by the tileset.
    #[serde(default)]
    pub firstgid: u32,
    /// Path of the external tileset file, empty for embedded tilesets.
    #[serde(default)]
    pub source: String,
}

/// A Tiled JSON map as exported by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilemapDocument {
    /// Compression level of encoded layer data, -1 for the default.
    #[serde(default)]
    pub compressionlevel: i32,
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Chunked infinite maps are not drawn any differently.
    #[serde(default)]
    pub infinite: bool,
    /// Layers in draw order.
    pub layers: Vec<Layer>,
    /// Next free layer id in the editor.
    #[serde(default)]
    pub nextlayerid: u32,
    /// Next free object id in the editor.
    #[serde(default)]
    pub nextobjectid: u32,
    /// Map orientation, e.g. `"orthogonal"`.
    #[serde(default)]
    pub orientation: String,
    /// Tile render order, e.g. `"right-down"`.
    #[serde(default)]
    pub renderorder: String,
    /// Version of the editor that wrote the file.
    #[serde(default)]
    pub tiledversion: String,
    /// Tile width in pixels.
    pub tilewidth: u32,
    /// Tile height in pixels.
    pub tileheight: u32,
    /// Tilesets used by the map.
    #[serde(default)]
    pub tilesets: Vec<TilesetRef>,
    /// Document type, `"map"` for Tiled exports.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// JSON format version.
    #[serde(default)]
    pub version: String,
}

impl TilemapDocument {
    /// Read and validate a `.json` map from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let p = path.as_ref();
        if p.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(MapError::UnsupportedFormat(p.display().to_string()));
        }

        let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
            path: p.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&txt)
    }

    /// Decode and validate a map held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        let doc: TilemapDocument = serde_json::from_str(json)?;
        for layer in &doc.layers {
            layer.validate()?;
        }
        Ok(doc)
    }

    /// Serialize back to compact Tiled JSON.
    pub fn to_json_string(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MAP: &str = r#"{
      "width": 2,
      "height": 2,
      "tilewidth": 16,
      "tileheight": 16,
      "layers": [
        { "name": "ground", "type": "tilelayer", "width": 2, "height": 2, "data": [1, 0, 0, 29] }
      ],
      "tilesets": [ { "firstgid": 1, "source": "tileset.tsx" } ]
    }"#;

    #[test]
    fn defaults_optional_layer_fields() {
        let doc = TilemapDocument::from_json_str(SMALL_MAP).expect("decode");
        let layer = &doc.layers[0];
        assert!(layer.visible);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(doc.tilesets[0].source, "tileset.tsx");
        assert!(!doc.infinite);
    }

    #[test]
    fn tiles_reports_empty_cells_as_none() {
        let doc = TilemapDocument::from_json_str(SMALL_MAP).expect("decode");
        let tiles: Vec<_> = doc.layers[0].tiles().collect();
        assert_eq!(tiles[0], (0, TileId::new(1)));
        assert_eq!(tiles[1], (1, None));
        assert_eq!(tiles[3].1.map(TileId::get), Some(29));
    }

    #[test]
    fn zero_sized_layer_without_data_is_valid() {
        let json = r#"{
          "width": 1, "height": 1, "tilewidth": 16, "tileheight": 16,
          "layers": [ { "name": "objects", "type": "objectgroup" } ]
        }"#;
        let doc = TilemapDocument::from_json_str(json).expect("decode");
        assert_eq!(doc.layers[0].tiles().count(), 0);
    }

    #[test]
    fn rejects_wrong_field_types() {
        let json = r#"{ "width": "wide", "height": 1, "tilewidth": 16, "tileheight": 16, "layers": [] }"#;
        let err = TilemapDocument::from_json_str(json).unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
        assert!(err.is_parse_error());
    }
}
