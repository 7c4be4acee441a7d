//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Fixed per-frame physics step
//! - Seeded RNG only
//! - Stable iteration order (gates in spawn order)

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Collision, flyer_bounds, flyer_gate_collision, flyer_world_collision};
pub use physics::{advance_flyer, apply_impulse};
pub use spawner::Spawner;
pub use state::{Flyer, FrameOutcome, GameEvent, GamePhase, Gate, RunSession};
pub use tick::tick;
