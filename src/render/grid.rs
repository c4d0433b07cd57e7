//! Pixel math for tiles and sprite frames.

use crate::tilemap::TileId;
use macroquad::prelude::*;

/// Top-left pixel of cell `index` in a row-major grid `width` cells wide.
///
/// `width` must be non-zero; layers of width zero carry no cells.
#[inline]
pub fn cell_to_pixel(index: usize, width: usize, tile_size: u32) -> Vec2 {
    let col = index % width;
    let row = index / width;
    vec2(
        (col as u32 * tile_size) as f32,
        (row as u32 * tile_size) as f32,
    )
}

/// Source rectangle of `id` inside a tileset atlas `columns` tiles wide.
#[inline]
pub fn tile_source(id: TileId, columns: u32, tile_size: u32) -> Rect {
    let local = id.get() - 1;
    let col = local % columns;
    let row = local / columns;
    Rect::new(
        (col * tile_size) as f32,
        (row * tile_size) as f32,
        tile_size as f32,
        tile_size as f32,
    )
}

/// The single frame every sprite image is cut from.
#[inline]
pub fn sprite_frame(tile_size: u32) -> Rect {
    Rect::new(0.0, 0.0, tile_size as f32, tile_size as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> TileId {
        TileId::new(raw).expect("non-zero id")
    }

    #[test]
    fn cell_to_pixel_wraps_rows() {
        assert_eq!(cell_to_pixel(0, 20, 16), vec2(0.0, 0.0));
        assert_eq!(cell_to_pixel(19, 20, 16), vec2(304.0, 0.0));
        assert_eq!(cell_to_pixel(20, 20, 16), vec2(0.0, 16.0));
        assert_eq!(cell_to_pixel(43, 20, 16), vec2(48.0, 32.0));
    }

    #[test]
    fn tile_source_is_one_based() {
        assert_eq!(tile_source(id(1), 28, 16), Rect::new(0.0, 0.0, 16.0, 16.0));
        assert_eq!(tile_source(id(28), 28, 16), Rect::new(432.0, 0.0, 16.0, 16.0));
        assert_eq!(tile_source(id(29), 28, 16), Rect::new(0.0, 16.0, 16.0, 16.0));
        assert_eq!(tile_source(id(60), 28, 16), Rect::new(48.0, 32.0, 16.0, 16.0));
    }

    #[test]
    fn sprite_frame_is_top_left_tile() {
        assert_eq!(sprite_frame(16), Rect::new(0.0, 0.0, 16.0, 16.0));
    }
}
