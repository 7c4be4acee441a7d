//! Gate Flyer entry point
//!
//! The browser build is driven from JS through `gate_flyer::web`. Natively this
//! runs a headless demo: the autopilot plays one run on a simulated 60 Hz
//! clock and the final frame is printed as text.
//!
//! Usage: `gate-flyer [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gate_flyer::consts::{FRAME_MS, FRAMES_PER_SECOND};
    use gate_flyer::persistence::FileStore;
    use gate_flyer::renderer::{AsciiSurface, draw_frame};
    use gate_flyer::sim::autopilot::wants_impulse;
    use gate_flyer::sim::{GameEvent, GamePhase};
    use gate_flyer::{Catalog, Command, Game, Settings};

    /// Give up after two simulated minutes
    const MAX_FRAMES: u64 = 120 * FRAMES_PER_SECOND as u64;

    env_logger::init();
    log::info!("Gate Flyer (native) starting...");

    let settings_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load(settings_path.as_deref());
    let store = FileStore::new(&settings.high_score_path);
    let mut game = Game::from_settings(&settings, Catalog::default(), store);

    println!("High Score: {}", game.high_score());
    game.handle(Command::Start);

    let start_ms = gate_flyer::platform::now_ms();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        if game.phase() == GamePhase::Playing && wants_impulse(game.session(), game.tuning()) {
            game.handle(Command::Impulse);
        }

        frames += 1;
        let outcome = game.frame(start_ms + frames as f64 * FRAME_MS);
        for event in &outcome.events {
            match event {
                GameEvent::Unlocked { name, .. } => println!("Unlocked {}!", name),
                GameEvent::GameOver { score, cause } => {
                    println!("Game over ({:?}) with score {}", cause, score)
                }
                GameEvent::NewHighScore { score } => println!("New high score: {}!", score),
                _ => {}
            }
        }

        if outcome.collision.is_some() {
            let tuning = game.tuning();
            let mut surface = AsciiSurface::new(40, 30, tuning.world_width, tuning.world_height);
            draw_frame(&mut surface, &game);
            println!("{}", surface);
        }
        if outcome.events.contains(&GameEvent::ReturnedToMenu) {
            break;
        }
    }

    if game.phase() == GamePhase::Playing {
        println!("Autopilot still flying after {} frames, score {}", frames, game.score());
    }
    println!("High Score: {}", game.high_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is gate_flyer::web::wasm_start, this is just to satisfy the compiler
}
