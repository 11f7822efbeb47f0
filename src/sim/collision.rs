//! Axis-aligned collision testing with forgiving hitboxes
//!
//! Every entity collides as a box shrunk below its visual footprint,
//! so a near-miss that looks like a near-miss plays like one.

use crate::consts::HITBOX_MARGIN;

/// An axis-aligned box in playfield coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Overlap test with both boxes reduced to their central
/// [`HITBOX_MARGIN`] fraction. Pure and symmetric.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let m = HITBOX_MARGIN;
    a.x + a.w * (1.0 - m) / 2.0 < b.x + b.w * m
        && a.x + a.w * m > b.x + b.w * (1.0 - m) / 2.0
        && a.y + a.h * (1.0 - m) / 2.0 < b.y + b.h * m
        && a.y + a.h * m > b.y + b.h * (1.0 - m) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical_boxes_overlap() {
        let a = Aabb::new(10.0, 10.0, 50.0, 50.0);
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn test_distant_boxes_miss() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let b = Aabb::new(200.0, 0.0, 50.0, 50.0);
        assert!(!overlaps(&a, &b));

        let below = Aabb::new(0.0, 300.0, 50.0, 50.0);
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_edge_contact_is_forgiven() {
        // Visually touching boxes do not collide once both shrink to
        // their central 70%
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let b = Aabb::new(50.0, 0.0, 50.0, 50.0);
        assert!(!overlaps(&a, &b));

        // A slight visual overlap is still a miss
        let c = Aabb::new(45.0, 0.0, 50.0, 50.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_deep_overlap_hits() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let b = Aabb::new(20.0, 20.0, 50.0, 50.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_small_box_inside_large() {
        let enemy = Aabb::new(100.0, 100.0, 80.0, 80.0);
        let bullet = Aabb::new(136.0, 130.0, 8.0, 20.0);
        assert!(overlaps(&bullet, &enemy));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0,
            ay in -500.0f32..500.0,
            aw in 1.0f32..200.0,
            ah in 1.0f32..200.0,
            bx in -500.0f32..500.0,
            by in -500.0f32..500.0,
            bw in 1.0f32..200.0,
            bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_itself(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
        ) {
            let a = Aabb::new(x, y, w, h);
            prop_assert!(overlaps(&a, &a));
        }
    }
}
