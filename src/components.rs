/// Axis-aligned bounding box, top-left corner + extent, in playfield pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Overlap test on closed intervals: rects that merely touch edges
    /// still count as colliding.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }
}

/// RGB colors in linear 0..1.
pub mod colors {
    pub const RAYWHITE: [f32; 3] = [0.96, 0.96, 0.96];
    pub const LIGHTGRAY: [f32; 3] = [0.78, 0.78, 0.78];
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn disjoint_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));

        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.overlaps(&c));

        // Corner contact only
        let d = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -100.0f32..1400.0,
            ay in -100.0f32..800.0,
            aw in 0.0f32..200.0,
            ah in 0.0f32..200.0,
            bx in -100.0f32..1400.0,
            by in -100.0f32..800.0,
            bw in 0.0f32..200.0,
            bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
