//! Sprites that live in the world: the player's catcher and the droplets
//! it has to intercept.

use super::Rect;

/// The player-controlled catcher. Sits on the bottom edge of the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catcher {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Catcher {
    /// A catcher centred horizontally on the bottom edge
    pub fn centred(world_width: f32, width: f32, height: f32) -> Self {
        Self {
            x: (world_width - width) * 0.5,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn translate_x(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Place the catcher so its horizontal center is at `x`
    pub fn set_center_x(&mut self, x: f32) {
        self.x = x - self.width * 0.5;
    }

    /// Keep the catcher fully inside `[0, world_width]`
    pub fn clamp_to(&mut self, world_width: f32) {
        self.x = self.x.clamp(0.0, (world_width - self.width).max(0.0));
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A falling droplet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Droplet {
    /// Unique per game, never reused
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Droplet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the top edge has dropped below the bottom of the world
    pub fn is_below_world(&self) -> bool {
        self.y < -self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catcher_clamp() {
        let mut c = Catcher::centred(8.0, 1.0, 1.0);
        assert_eq!(c.x, 3.5);

        c.translate_x(100.0);
        c.clamp_to(8.0);
        assert_eq!(c.x, 7.0);

        c.translate_x(-100.0);
        c.clamp_to(8.0);
        assert_eq!(c.x, 0.0);
    }

    #[test]
    fn test_catcher_set_center() {
        let mut c = Catcher::centred(8.0, 2.0, 1.0);
        c.set_center_x(5.0);
        assert_eq!(c.x, 4.0);
        assert_eq!(c.rect().right(), 6.0);
    }

    #[test]
    fn test_droplet_below_world() {
        let mut d = Droplet { id: 0, x: 0.0, y: -1.0, width: 1.0, height: 1.0 };
        assert!(!d.is_below_world());
        d.y = -1.01;
        assert!(d.is_below_world());
    }
}
