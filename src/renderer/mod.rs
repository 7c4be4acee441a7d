//! Rendering module
//!
//! The simulation never draws. Hosts implement `Surface` and call
//! `draw_frame` after each `Game::frame`; drawing only reads game state.

pub mod ascii;
pub mod shapes;

pub use ascii::AsciiSurface;
pub use shapes::{Circle, Rect, colors, flyer_circle, gate_rects};

use crate::game::Game;
use crate::persistence::HighScoreStore;

/// A drawing target
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: u32);
    fn fill_circle(&mut self, circle: Circle, color: u32);
    fn draw_score(&mut self, score: u64, color: u32);
}

/// Draw gates, then the flyer, then the score
pub fn draw_frame<T: Surface, S: HighScoreStore>(surface: &mut T, game: &Game<S>) {
    surface.clear();

    for gate in game.gates() {
        for rect in gate_rects(gate, game.tuning()) {
            surface.fill_rect(rect, colors::GATE);
        }
    }

    surface.fill_circle(flyer_circle(game.flyer()), game.flyer_color());
    surface.draw_score(game.score(), colors::SCORE);
}
