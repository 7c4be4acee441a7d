//! Per-frame flyer physics
//!
//! Discrete steps calibrated against a 60 Hz cadence: gravity and impulse are
//! in pixels/frame, not scaled by wall-clock time.

use super::state::Flyer;

/// Apply one frame of gravity, then integrate position
#[inline]
pub fn advance_flyer(flyer: &mut Flyer) {
    flyer.vel += flyer.gravity;
    flyer.pos.y += flyer.vel;
}

/// Overwrite velocity with the upward impulse (not additive)
#[inline]
pub fn apply_impulse(flyer: &mut Flyer) {
    flyer.vel = flyer.jump_impulse;
}
