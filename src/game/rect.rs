//! Axis-aligned rectangle in world units
//!
//! World space is y-up: `y` is the bottom edge and `top()` is `y + h`.

/// A rectangle defined by its bottom-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    /// Check if two rectangles share interior area.
    ///
    /// Strict comparisons: rectangles that only touch along an edge or at a
    /// corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.top(), 3.0);
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        let catcher = Rect::new(3.0, 0.0, 1.0, 1.0);
        let partial = Rect::new(3.5, 0.5, 1.0, 1.0);
        let inside = Rect::new(3.25, 0.25, 0.5, 0.5);

        assert!(catcher.overlaps(&partial));
        assert!(catcher.overlaps(&inside));
        assert!(inside.overlaps(&catcher));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let catcher = Rect::new(3.0, 0.0, 1.0, 1.0);
        let above = Rect::new(3.0, 1.0, 1.0, 1.0);
        let right = Rect::new(4.0, 0.0, 1.0, 1.0);
        let corner = Rect::new(4.0, 1.0, 1.0, 1.0);

        assert!(!catcher.overlaps(&above));
        assert!(!catcher.overlaps(&right));
        assert!(!catcher.overlaps(&corner));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.5, 0.5, 1.0, 1.0),
            Rect::new(1.0, 0.0, 1.0, 1.0),
            Rect::new(-2.0, -2.0, 0.5, 0.5),
            Rect::new(0.25, 0.25, 0.1, 0.1),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{:?} vs {:?}", a, b);
            }
        }
    }
}
