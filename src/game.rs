//! Top-level state machine
//!
//! `Game` owns the run session, the character catalog and the high score
//! tracker. The host calls `frame` once per display refresh and forwards
//! player commands as they arrive; `&mut self` serializes the two.

use crate::highscores::HighScoreTracker;
use crate::persistence::HighScoreStore;
use crate::progression::Catalog;
use crate::settings::Settings;
use crate::sim::collision::Collision;
use crate::sim::physics::apply_impulse;
use crate::sim::state::{Flyer, FrameOutcome, GameEvent, GamePhase, Gate, RunSession};
use crate::sim::tick::tick;
use crate::tuning::Tuning;

/// Player commands delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a run (Menu only)
    Start,
    /// Flap (Playing only)
    Impulse,
    /// Pick a cosmetic variant (must be unlocked)
    SelectCharacter(usize),
}

/// Deferred GameOver -> Menu transition, tagged with the run that scheduled it
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingReturn {
    generation: u64,
    due_ms: f64,
}

pub struct Game<S: HighScoreStore> {
    tuning: Tuning,
    phase: GamePhase,
    session: RunSession,
    catalog: Catalog,
    high_scores: HighScoreTracker<S>,
    pending_return: Option<PendingReturn>,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(tuning: Tuning, catalog: Catalog, store: S, seed: u64) -> Self {
        let session = RunSession::new(&tuning, seed);
        let mut game = Self {
            tuning,
            phase: GamePhase::Menu,
            session,
            catalog,
            high_scores: HighScoreTracker::new(store),
            pending_return: None,
        };
        game.session.flyer.variant = game.catalog.selected();
        log::info!(
            "Game initialized with seed {} (high score {})",
            seed,
            game.high_scores.best()
        );
        game
    }

    pub fn from_settings(settings: &Settings, catalog: Catalog, store: S) -> Self {
        let mut game = Self::new(settings.tuning.clone(), catalog, store, settings.resolve_seed());
        game.select_character(settings.selected_character);
        game
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn session(&self) -> &RunSession {
        &self.session
    }

    pub fn flyer(&self) -> &Flyer {
        &self.session.flyer
    }

    pub fn gates(&self) -> &[Gate] {
        &self.session.gates
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_scores.best()
    }

    pub fn high_scores(&self) -> &HighScoreTracker<S> {
        &self.high_scores
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Colour of the selected variant
    pub fn flyer_color(&self) -> u32 {
        self.catalog.selected_color()
    }

    /// Apply a player command. Commands invalid for the current phase are
    /// dropped without effect.
    pub fn handle(&mut self, command: Command) -> Vec<GameEvent> {
        match command {
            Command::Start => {
                if self.start() {
                    vec![GameEvent::RunStarted {
                        generation: self.session.generation,
                    }]
                } else {
                    Vec::new()
                }
            }
            Command::Impulse => {
                self.impulse();
                Vec::new()
            }
            Command::SelectCharacter(index) => {
                self.select_character(index);
                Vec::new()
            }
        }
    }

    /// Menu -> Playing. Resets the run and supersedes any pending return.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            log::debug!("Start ignored in {:?}", self.phase);
            return false;
        }
        self.session.reset(&self.tuning);
        self.pending_return = None;
        self.phase = GamePhase::Playing;
        log::info!("Run {} started", self.session.generation);
        true
    }

    /// Flap. Only has an effect while Playing.
    pub fn impulse(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        apply_impulse(&mut self.session.flyer);
        true
    }

    /// Select an unlocked variant; locked or unknown indices are ignored
    pub fn select_character(&mut self, index: usize) -> bool {
        if !self.catalog.select(index) {
            log::debug!("Character {} is not selectable", index);
            return false;
        }
        self.session.flyer.variant = index;
        true
    }

    /// Advance one display frame
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        match self.phase {
            GamePhase::Menu => FrameOutcome::default(),
            GamePhase::Playing => {
                let mut outcome = tick(&mut self.session, &mut self.catalog, &self.tuning, now_ms);
                if let Some(cause) = outcome.collision {
                    self.enter_game_over(cause, now_ms, &mut outcome);
                }
                outcome
            }
            GamePhase::GameOver => {
                let mut outcome = FrameOutcome::default();
                self.poll_return(now_ms, &mut outcome);
                outcome
            }
        }
    }

    fn enter_game_over(&mut self, cause: Collision, now_ms: f64, outcome: &mut FrameOutcome) {
        let score = self.session.score;
        self.phase = GamePhase::GameOver;
        log::info!("Game over: {:?} with score {}", cause, score);
        outcome.events.push(GameEvent::GameOver { score, cause });

        if self.high_scores.record(score) {
            log::info!("New high score: {}", score);
            outcome.events.push(GameEvent::NewHighScore { score });
        }

        self.pending_return = Some(PendingReturn {
            generation: self.session.generation,
            due_ms: now_ms + self.tuning.game_over_delay_ms,
        });
    }

    fn poll_return(&mut self, now_ms: f64, outcome: &mut FrameOutcome) {
        // A missing or stale timer must not leave the game stuck in GameOver
        let due = match self.pending_return {
            Some(pending) if pending.generation == self.session.generation => {
                now_ms >= pending.due_ms
            }
            Some(pending) => {
                log::debug!("Stale return timer from run {}", pending.generation);
                true
            }
            None => true,
        };
        if !due {
            return;
        }
        self.pending_return = None;
        self.phase = GamePhase::Menu;
        log::info!("Back to menu (high score {})", self.high_scores.best());
        outcome.events.push(GameEvent::ReturnedToMenu);
    }
}
