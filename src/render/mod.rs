//! Drawing surfaces and the fixed-resolution viewport.

pub mod grid;

use crate::config::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use macroquad::prelude::*;
use std::fmt;

/// Something the game can paint onto.
///
/// The game only ever clears the surface and copies rectangular regions of
/// images onto it, so that is all a surface has to provide.
pub trait Surface {
    /// Handle of a drawable image.
    type Image;

    /// Clear the whole surface to `color`.
    fn fill(&mut self, color: Color);

    /// Copy the `src` region of `image` so its top-left lands on `dest`.
    fn blit(&mut self, image: &Self::Image, src: Rect, dest: Vec2);
}

/// Draws straight to whatever macroquad target is currently active.
#[derive(Debug, Default)]
pub struct ScreenSurface;

impl Surface for ScreenSurface {
    type Image = Texture2D;

    fn fill(&mut self, color: Color) {
        clear_background(color);
    }

    fn blit(&mut self, image: &Texture2D, src: Rect, dest: Vec2) {
        draw_texture_ex(
            image,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                source: Some(src),
                ..Default::default()
            },
        );
    }
}

/// Fixed-size offscreen target, letterboxed onto the window each frame.
pub struct Viewport {
    target: RenderTarget,
    camera: Camera2D,
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &LOGICAL_WIDTH)
            .field("height", &LOGICAL_HEIGHT)
            .field("camera_target", &self.camera.target)
            .finish_non_exhaustive()
    }
}

impl Viewport {
    /// Allocate the offscreen target. Needs a live macroquad context.
    pub fn new() -> Self {
        let target = render_target(LOGICAL_WIDTH as u32, LOGICAL_HEIGHT as u32);
        target.texture.set_filter(FilterMode::Nearest);

        let mut camera =
            Camera2D::from_display_rect(Rect::new(0.0, 0.0, LOGICAL_WIDTH, LOGICAL_HEIGHT));
        camera.render_target = Some(target.clone());

        Self { target, camera }
    }

    /// Run `paint` against the logical surface, then scale the result onto the window.
    pub fn frame(&self, paint: impl FnOnce(&mut ScreenSurface)) {
        set_camera(&self.camera);
        paint(&mut ScreenSurface);
        set_default_camera();

        clear_background(BLACK);
        let (dest, size) = letterbox(screen_width(), screen_height());
        draw_texture_ex(
            &self.target.texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest logical-aspect rectangle that fits the window, centred.
pub fn letterbox(window_w: f32, window_h: f32) -> (Vec2, Vec2) {
    let scale = (window_w / LOGICAL_WIDTH).min(window_h / LOGICAL_HEIGHT);
    let size = vec2(LOGICAL_WIDTH * scale, LOGICAL_HEIGHT * scale);
    let origin = vec2((window_w - size.x) / 2.0, (window_h - size.y) / 2.0);
    (origin, size)
}
