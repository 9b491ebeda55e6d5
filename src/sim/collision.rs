//! Axis-aligned bounding-box collision tests
//!
//! Every gameplay collision is a rectangle overlap: player vs obstacle and
//! player vs collectible. Boxes use half-open semantics - touching edges do
//! not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box, min corner inclusive, max corner exclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink the box by `amount` on all four sides
    ///
    /// Collapses to a point at the center rather than inverting if the
    /// inset exceeds the half-extent.
    pub fn inset(self, amount: f32) -> Self {
        let center = (self.min + self.max) * 0.5;
        let half = ((self.max - self.min) * 0.5 - Vec2::splat(amount)).max(Vec2::ZERO);
        Self {
            min: center - half,
            max: center + half,
        }
    }

}

/// Strict-overlap test between two boxes
///
/// Symmetric: `overlap(a, b) == overlap(b, a)`. Edge contact is a miss.
pub fn overlap(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_hit() {
        let a = aabb(0.0, 0.0, 100.0, 100.0);
        let b = aabb(50.0, 50.0, 100.0, 100.0);
        assert!(overlap(&a, &b));
    }

    #[test]
    fn test_overlap_miss() {
        let a = aabb(0.0, 0.0, 100.0, 100.0);
        let b = aabb(200.0, 0.0, 100.0, 100.0);
        assert!(!overlap(&a, &b));
    }

    #[test]
    fn test_edge_contact_is_miss() {
        let a = aabb(0.0, 0.0, 100.0, 100.0);
        let b = aabb(100.0, 0.0, 100.0, 100.0);
        assert!(!overlap(&a, &b));
    }

    #[test]
    fn test_containment_is_hit() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 10.0, 10.0);
        assert!(overlap(&outer, &inner));
        assert!(overlap(&inner, &outer));
    }

    #[test]
    fn test_inset_shrinks_all_sides() {
        let b = aabb(10.0, 20.0, 100.0, 50.0).inset(8.0);
        assert_eq!(b.min, Vec2::new(18.0, 28.0));
        assert_eq!(b.max, Vec2::new(102.0, 62.0));
        assert_eq!(b.max - b.min, Vec2::new(84.0, 34.0));
    }

    #[test]
    fn test_oversized_inset_collapses_to_center() {
        let b = aabb(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(b.min, b.max);
        assert_eq!(b.min, Vec2::new(5.0, 5.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = aabb(ax, ay, aw, ah);
            let b = aabb(bx, by, bw, bh);
            prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_itself_when_nonempty(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let a = aabb(x, y, w, h);
            prop_assert!(overlap(&a, &a));
        }
    }
}
