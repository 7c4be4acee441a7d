//! Browser bindings
//!
//! JS owns the canvas, DOM screens and `requestAnimationFrame`; it forwards
//! input here and reads back state to draw.

use wasm_bindgen::prelude::*;

use crate::game::{Command, Game};
use crate::persistence::LocalStorageStore;
use crate::platform::now_ms;
use crate::progression::Catalog;
use crate::settings::Settings;
use crate::sim::state::GameEvent;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Gate Flyer starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::load();
        WebGame {
            game: Game::from_settings(&settings, Catalog::default(), LocalStorageStore),
        }
    }

    pub fn start(&mut self) -> bool {
        !self.game.handle(Command::Start).is_empty()
    }

    pub fn impulse(&mut self) -> bool {
        self.game.impulse()
    }

    pub fn select_character(&mut self, index: usize) -> bool {
        self.game.select_character(index)
    }

    /// Advance one animation frame. Returns event names for the UI layer
    /// (e.g. "unlocked", "new_high_score", "menu").
    pub fn frame(&mut self) -> Vec<JsValue> {
        let outcome = self.game.frame(now_ms());
        outcome
            .events
            .iter()
            .filter_map(|event| match event {
                GameEvent::Unlocked { .. } => Some("unlocked"),
                GameEvent::GameOver { .. } => Some("game_over"),
                GameEvent::NewHighScore { .. } => Some("new_high_score"),
                GameEvent::ReturnedToMenu => Some("menu"),
                _ => None,
            })
            .map(JsValue::from_str)
            .collect()
    }

    pub fn phase(&self) -> String {
        format!("{:?}", self.game.phase())
    }

    pub fn score(&self) -> u64 {
        self.game.score()
    }

    pub fn high_score(&self) -> u64 {
        self.game.high_score()
    }

    pub fn flyer_x(&self) -> f32 {
        self.game.flyer().pos.x
    }

    pub fn flyer_y(&self) -> f32 {
        self.game.flyer().pos.y
    }

    pub fn flyer_size(&self) -> f32 {
        self.game.flyer().size
    }

    pub fn flyer_color(&self) -> u32 {
        self.game.flyer_color()
    }

    /// Flattened `[x, gap_top, x, gap_top, ...]` for the live gates
    pub fn gates(&self) -> Vec<f32> {
        self.game
            .gates()
            .iter()
            .flat_map(|g| [g.x, g.gap_top])
            .collect()
    }

    /// Catalog captions for the selection grid, in order
    pub fn character_labels(&self) -> Vec<String> {
        self.game
            .catalog()
            .entries()
            .iter()
            .map(|e| format!("{}: {}", e.name, e.label()))
            .collect()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
