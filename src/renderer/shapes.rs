//! Shape generation for 2D primitives

use glam::Vec2;

use crate::sim::state::{Flyer, Gate};
use crate::tuning::Tuning;

/// Axis-aligned rectangle in world space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Top and bottom barriers of a gate
pub fn gate_rects(gate: &Gate, tuning: &Tuning) -> [Rect; 2] {
    let gap_bottom = gate.gap_top + tuning.gate_gap;
    [
        Rect::new(gate.x, 0.0, tuning.gate_width, gate.gap_top),
        Rect::new(
            gate.x,
            gap_bottom,
            tuning.gate_width,
            tuning.world_height - gap_bottom,
        ),
    ]
}

pub fn flyer_circle(flyer: &Flyer) -> Circle {
    Circle {
        center: flyer.pos,
        radius: flyer.radius(),
    }
}

/// Colors for game elements (0xRRGGBB)
pub mod colors {
    pub const GATE: u32 = 0x00CC00;
    pub const SCORE: u32 = 0xFFFFFF;
}
