//! Run state and core simulation types
//!
//! Everything one playthrough mutates lives here; the catalog and high score
//! outlive runs and are owned by `Game`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collision;
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current top-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start command
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, frozen until the return timer fires
    GameOver,
}

/// The player-controlled entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// x never changes during a run; the world scrolls instead
    pub pos: Vec2,
    /// Vertical velocity (pixels/frame, positive is down)
    pub vel: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub size: f32,
    /// Index into the character catalog
    pub variant: usize,
}

impl Flyer {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.flyer_start_x, tuning.flyer_start_y),
            vel: 0.0,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            size: tuning.flyer_size,
            variant: 0,
        }
    }

    /// Back to the start position at rest (keeps the selected variant)
    pub fn reset(&mut self, tuning: &Tuning) {
        let variant = self.variant;
        *self = Self::new(tuning);
        self.variant = variant;
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// A scrolling obstacle: two barriers with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Spawn-ordered id
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    /// Bottom of the top barrier
    pub gap_top: f32,
    /// Whether the trailing edge has crossed the flyer
    pub passed: bool,
}

impl Gate {
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Things that happened during a frame or command, for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new run began
    RunStarted { generation: u64 },
    /// A gate was spawned at the right edge
    GateSpawned { gate_id: u32 },
    /// A gate's trailing edge crossed the flyer
    GatePassed { gate_id: u32, score: u64 },
    /// A gate left the world and was dropped
    GateRetired { gate_id: u32 },
    /// A catalog entry just unlocked
    Unlocked { index: usize, name: String },
    /// The run ended
    GameOver { score: u64, cause: Collision },
    /// The run beat the stored high score
    NewHighScore { score: u64 },
    /// The game-over delay elapsed
    ReturnedToMenu,
}

/// Result of a single `Game::frame` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    /// The collision that ended the run this frame, if any
    pub collision: Option<Collision>,
    /// Points scored this frame
    pub score_delta: u32,
    pub events: Vec<GameEvent>,
}

impl FrameOutcome {
    pub fn unlocked(&self) -> impl Iterator<Item = usize> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Unlocked { index, .. } => Some(*index),
            _ => None,
        })
    }
}

/// Mutable state of one playthrough
#[derive(Debug, Clone)]
pub struct RunSession {
    pub score: u64,
    pub flyer: Flyer,
    /// Live gates, oldest first
    pub gates: Vec<Gate>,
    pub spawner: Spawner,
    /// Bumped on every reset; tags deferred actions to the run that scheduled them
    pub generation: u64,
}

impl RunSession {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            score: 0,
            flyer: Flyer::new(tuning),
            gates: Vec::new(),
            spawner: Spawner::new(seed),
            generation: 0,
        }
    }

    /// Prepare for a fresh run
    pub fn reset(&mut self, tuning: &Tuning) {
        self.score = 0;
        self.gates.clear();
        self.flyer.reset(tuning);
        self.spawner.reset();
        self.generation += 1;
    }

    /// Count a passed gate
    pub fn on_gate_passed(&mut self) -> u64 {
        self.score += 1;
        self.score
    }
}
