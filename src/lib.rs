//! Gate Flyer - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, gates, collisions, run state)
//! - `progression`: Character catalog and score-driven unlocks
//! - `game`: Top-level state machine driven by the host's frame loop
//! - `renderer`: Surface abstraction and shape geometry
//! - `persistence`: High score storage backends
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod progression;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::{Command, Game};
pub use highscores::HighScoreTracker;
pub use progression::{Catalog, CatalogEntry};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal update cadence the per-frame physics is calibrated against
    pub const FRAMES_PER_SECOND: f64 = 60.0;
    /// Milliseconds per nominal frame
    pub const FRAME_MS: f64 = 1000.0 / FRAMES_PER_SECOND;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Flyer defaults
    pub const FLYER_START_X: f32 = 50.0;
    pub const FLYER_START_Y: f32 = 300.0;
    pub const FLYER_SIZE: f32 = 30.0;
    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity set by an impulse (pixels/frame, negative is up)
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Gate defaults
    pub const GATE_WIDTH: f32 = 60.0;
    pub const GATE_GAP: f32 = 150.0;
    /// Smallest barrier height above and below the gap
    pub const GATE_MIN_HEIGHT: f32 = 50.0;
    /// Leftward scroll (pixels/frame)
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Wall-clock time between spawns
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

    /// Time spent frozen on game over before returning to the menu
    pub const GAME_OVER_DELAY_MS: f64 = 1500.0;
}
