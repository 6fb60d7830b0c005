//! Sprite rendering
//!
//! Game code draws through the [`Renderer`] trait in world units. The
//! macroquad implementation sets up a y-up camera from the viewport and
//! stretches each texture over its destination rectangle.

use macroquad::prelude::{
    clear_background, draw_texture_ex, set_camera, set_default_camera, vec2, DrawTextureParams,
    BLACK, WHITE,
};
use crate::assets::Textures;
use crate::game::{FitViewport, Rect};

/// Texture handles the games know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Background,
    Catcher,
    Droplet,
}

pub trait Renderer {
    /// Clear the window and apply the viewport's projection
    fn begin(&mut self, viewport: &FitViewport);

    /// Draw `texture` stretched over `dest` (world units)
    fn draw(&mut self, texture: TextureId, dest: Rect);

    /// Restore the default screen-space camera
    fn end(&mut self) {}
}

/// Renders with macroquad's immediate-mode sprite batcher
pub struct QuadRenderer<'a> {
    textures: &'a Textures,
}

impl<'a> QuadRenderer<'a> {
    pub fn new(textures: &'a Textures) -> Self {
        Self { textures }
    }
}

impl Renderer for QuadRenderer<'_> {
    fn begin(&mut self, viewport: &FitViewport) {
        clear_background(BLACK);
        set_camera(&viewport.camera());
    }

    fn draw(&mut self, texture: TextureId, dest: Rect) {
        draw_texture_ex(
            self.textures.get(texture),
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                // World space is y-up, images are stored top row first
                flip_y: true,
                ..Default::default()
            },
        );
    }

    fn end(&mut self) {
        set_default_camera();
    }
}
