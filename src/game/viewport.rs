//! Fit Viewport
//!
//! Maps window pixels to a fixed logical world (8x5 units by default).
//! The world is scaled uniformly to the largest size that fits the window
//! and centred, leaving letterbox bars on the unused axis.

use macroquad::prelude::{vec2, Camera2D, Vec2};
use super::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct FitViewport {
    world_width: f32,
    world_height: f32,
    /// Fitted area inside the window, in pixels (x, y from top-left)
    screen: Rect,
    /// Window height in pixels, for the bottom-left origin GL expects
    window_height: f32,
}

impl FitViewport {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
            // 1 pixel per unit until the first resize arrives
            screen: Rect::new(0.0, 0.0, world_width, world_height),
            window_height: world_height,
        }
    }

    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.world_height
    }

    /// The world bounds as a rectangle anchored at the origin
    pub fn world_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.world_width, self.world_height)
    }

    /// Recompute the fit for a new window size.
    ///
    /// Returns false (mapping unchanged) when either dimension is not
    /// positive, which is what a minimized window reports.
    pub fn update(&mut self, pixel_width: i32, pixel_height: i32) -> bool {
        if pixel_width <= 0 || pixel_height <= 0 {
            return false;
        }

        let (pw, ph) = (pixel_width as f32, pixel_height as f32);
        let scale = (pw / self.world_width).min(ph / self.world_height);
        let w = self.world_width * scale;
        let h = self.world_height * scale;

        self.screen = Rect::new(
            ((pw - w) * 0.5).round(),
            ((ph - h) * 0.5).round(),
            w.round(),
            h.round(),
        );
        self.window_height = ph;
        true
    }

    /// Convert a window position (pixels, y down) into world units (y up)
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        let sx = self.screen.w / self.world_width;
        let sy = self.screen.h / self.world_height;
        vec2(
            (screen.x - self.screen.x) / sx,
            self.world_height - (screen.y - self.screen.y) / sy,
        )
    }

    /// Camera that renders the world into the fitted area, centred on the world.
    ///
    /// macroquad inverts `zoom.y` when drawing to the window, so the negative
    /// sign here is what makes world y point up.
    pub fn camera(&self) -> Camera2D {
        // glViewport counts y from the bottom of the window
        let gl_y = self.window_height - self.screen.y - self.screen.h;
        Camera2D {
            target: vec2(self.world_width * 0.5, self.world_height * 0.5),
            zoom: vec2(2.0 / self.world_width, -2.0 / self.world_height),
            viewport: Some((
                self.screen.x as i32,
                gl_y as i32,
                self.screen.w as i32,
                self.screen.h as i32,
            )),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{vec3, Camera};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_fit_letterboxes_wide_window() {
        let mut vp = FitViewport::new(8.0, 5.0);
        assert!(vp.update(1000, 500));

        // Height-limited: 100 px per unit, 800x500 centred horizontally
        let r = vp.screen;
        assert!(approx(r.w, 800.0));
        assert!(approx(r.h, 500.0));
        assert!(approx(r.x, 100.0));
        assert!(approx(r.y, 0.0));
    }

    #[test]
    fn test_fit_letterboxes_tall_window() {
        let mut vp = FitViewport::new(8.0, 5.0);
        assert!(vp.update(800, 900));

        let r = vp.screen;
        assert!(approx(r.w, 800.0));
        assert!(approx(r.h, 500.0));
        assert!(approx(r.x, 0.0));
        assert!(approx(r.y, 200.0));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut once = FitViewport::new(8.0, 5.0);
        once.update(1280, 720);

        let mut twice = FitViewport::new(8.0, 5.0);
        twice.update(1280, 720);
        twice.update(1280, 720);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_positive_resize_is_ignored() {
        let mut vp = FitViewport::new(8.0, 5.0);
        vp.update(800, 500);
        let before = vp.clone();

        assert!(!vp.update(0, 0));
        assert!(!vp.update(0, 500));
        assert!(!vp.update(800, -1));
        assert_eq!(vp, before);
    }

    #[test]
    fn test_unproject_flips_y() {
        let mut vp = FitViewport::new(8.0, 5.0);
        vp.update(800, 500);

        let bottom_left = vp.unproject(vec2(0.0, 500.0));
        assert!(approx(bottom_left.x, 0.0));
        assert!(approx(bottom_left.y, 0.0));

        let top_right = vp.unproject(vec2(800.0, 0.0));
        assert!(approx(top_right.x, 8.0));
        assert!(approx(top_right.y, 5.0));
    }

    #[test]
    fn test_unproject_accounts_for_letterbox() {
        let mut vp = FitViewport::new(8.0, 5.0);
        vp.update(1000, 500);

        // Left bar is 100 px wide; its inner edge is world x = 0
        let p = vp.unproject(vec2(100.0, 250.0));
        assert!(approx(p.x, 0.0));
        assert!(approx(p.y, 2.5));

        let centre = vp.unproject(vec2(500.0, 250.0));
        assert!(approx(centre.x, 4.0));
    }

    #[test]
    fn test_camera_covers_fitted_area() {
        let mut vp = FitViewport::new(8.0, 5.0);
        vp.update(1000, 500);
        let cam = vp.camera();
        assert_eq!(cam.viewport, Some((100, 0, 800, 500)));
        assert!(approx(cam.target.x, 4.0));
        assert!(approx(cam.target.y, 2.5));
    }

    #[test]
    fn test_camera_keeps_world_y_up() {
        let mut vp = FitViewport::new(8.0, 5.0);
        vp.update(800, 500);
        let m = vp.camera().matrix();

        let top = m.project_point3(vec3(4.0, 5.0, 0.0));
        let bottom = m.project_point3(vec3(4.0, 0.0, 0.0));
        assert!(top.y > bottom.y, "top {:?} bottom {:?}", top, bottom);
        assert!(approx(top.y, 1.0));
        assert!(approx(bottom.y, -1.0));

        let left = m.project_point3(vec3(0.0, 2.5, 0.0));
        let right = m.project_point3(vec3(8.0, 2.5, 0.0));
        assert!(approx(left.x, -1.0));
        assert!(approx(right.x, 1.0));
    }

    #[test]
    fn test_camera_viewport_counts_from_window_bottom() {
        let mut vp = FitViewport::new(8.0, 5.0);
        // Odd spare height: the 1 px bar rounds onto the top
        vp.update(800, 501);
        assert!(approx(vp.screen.y, 1.0));
        assert_eq!(vp.camera().viewport, Some((0, 0, 800, 500)));

        vp.update(800, 900);
        assert_eq!(vp.camera().viewport, Some((0, 200, 800, 500)));
    }
}
