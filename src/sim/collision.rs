//! Collision detection between the flyer, gates and world bounds
//!
//! Everything is axis-aligned. All comparisons are strict: boxes that only
//! touch along an edge do not collide.

use glam::Vec2;

use super::state::{Flyer, Gate};
use crate::tuning::Tuning;

/// What the flyer hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// A barrier of the given gate
    Gate { gate_id: u32 },
    /// Top edge of the world
    Ceiling,
    /// Bottom edge of the world
    Floor,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of half-extent `r` around `center`
    pub fn around(center: Vec2, r: f32) -> Self {
        Self {
            min: center - Vec2::splat(r),
            max: center + Vec2::splat(r),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }
}

/// The flyer's bounding box
pub fn flyer_bounds(flyer: &Flyer) -> Aabb {
    Aabb::around(flyer.pos, flyer.radius())
}

/// Check the flyer against both barriers of a gate
pub fn flyer_gate_collision(bounds: &Aabb, gate: &Gate, tuning: &Tuning) -> bool {
    let overlaps_x =
        bounds.right() > gate.x && bounds.left() < gate.trailing_edge(tuning.gate_width);
    if !overlaps_x {
        return false;
    }
    bounds.top() < gate.gap_top || bounds.bottom() > gate.gap_top + tuning.gate_gap
}

/// Check the flyer against the ceiling and floor
pub fn flyer_world_collision(bounds: &Aabb, tuning: &Tuning) -> Option<Collision> {
    if bounds.top() < 0.0 {
        Some(Collision::Ceiling)
    } else if bounds.bottom() > tuning.world_height {
        Some(Collision::Floor)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flyer_at(y: f32) -> Flyer {
        let mut flyer = Flyer::new(&Tuning::default());
        flyer.pos.y = y;
        flyer
    }

    fn gate(x: f32, gap_top: f32) -> Gate {
        Gate {
            id: 1,
            x,
            gap_top,
            passed: false,
        }
    }

    #[test]
    fn test_flyer_bounds() {
        let bounds = flyer_bounds(&flyer_at(300.0));
        assert_eq!(bounds.left(), 35.0);
        assert_eq!(bounds.right(), 65.0);
        assert_eq!(bounds.top(), 285.0);
        assert_eq!(bounds.bottom(), 315.0);
    }

    #[test]
    fn test_flyer_inside_gap_is_safe() {
        let tuning = Tuning::default();
        // Gap spans 250..400, flyer spans 285..315
        let bounds = flyer_bounds(&flyer_at(300.0));
        assert!(!flyer_gate_collision(&bounds, &gate(40.0, 250.0), &tuning));
    }

    #[test]
    fn test_hits_top_barrier() {
        let tuning = Tuning::default();
        let bounds = flyer_bounds(&flyer_at(300.0));
        assert!(flyer_gate_collision(&bounds, &gate(40.0, 290.0), &tuning));
    }

    #[test]
    fn test_hits_bottom_barrier() {
        let tuning = Tuning::default();
        // Gap spans 100..250, flyer bottom at 315
        let bounds = flyer_bounds(&flyer_at(300.0));
        assert!(flyer_gate_collision(&bounds, &gate(40.0, 100.0), &tuning));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let tuning = Tuning::default();
        let bounds = flyer_bounds(&flyer_at(300.0));

        // Gate leading edge flush with flyer right edge
        assert!(!flyer_gate_collision(&bounds, &gate(65.0, 400.0), &tuning));
        // Gate trailing edge flush with flyer left edge
        assert!(!flyer_gate_collision(&bounds, &gate(-25.0, 400.0), &tuning));
        // Gap exactly as tall as the flyer, flush top and bottom
        let snug = Tuning {
            gate_gap: 30.0,
            ..Default::default()
        };
        assert!(!flyer_gate_collision(&bounds, &gate(40.0, 285.0), &snug));
    }

    #[test]
    fn test_no_horizontal_overlap_never_collides() {
        let tuning = Tuning::default();
        // Gap far away from the flyer, but gate is to the right
        let bounds = flyer_bounds(&flyer_at(300.0));
        assert!(!flyer_gate_collision(&bounds, &gate(200.0, 50.0), &tuning));
    }

    #[test]
    fn test_world_bounds() {
        let tuning = Tuning::default();
        assert_eq!(flyer_world_collision(&flyer_bounds(&flyer_at(300.0)), &tuning), None);
        assert_eq!(
            flyer_world_collision(&flyer_bounds(&flyer_at(14.0)), &tuning),
            Some(Collision::Ceiling)
        );
        assert_eq!(
            flyer_world_collision(&flyer_bounds(&flyer_at(586.0)), &tuning),
            Some(Collision::Floor)
        );
        // Flush with ceiling/floor is fine
        assert_eq!(flyer_world_collision(&flyer_bounds(&flyer_at(15.0)), &tuning), None);
        assert_eq!(flyer_world_collision(&flyer_bounds(&flyer_at(585.0)), &tuning), None);
    }

    proptest! {
        #[test]
        fn prop_gate_collision_matches_overlap(
            y in 0.0f32..600.0,
            gate_x in -100.0f32..450.0,
            gap_top in 50.0f32..400.0,
        ) {
            let tuning = Tuning::default();
            let bounds = flyer_bounds(&flyer_at(y));
            let g = gate(gate_x, gap_top);

            let x_overlap = bounds.right() > g.x && bounds.left() < g.x + tuning.gate_width;
            let top_overlap = bounds.top() < g.gap_top;
            let bottom_overlap = bounds.bottom() > g.gap_top + tuning.gate_gap;

            prop_assert_eq!(
                flyer_gate_collision(&bounds, &g, &tuning),
                x_overlap && (top_overlap || bottom_overlap)
            );
        }
    }
}
