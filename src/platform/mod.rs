//! Platform abstraction layer
//!
//! Handles browser/native differences for wall-clock time. Spawn cadence is
//! the only thing in the simulation that reads it.

/// Milliseconds since the Unix epoch (matches `Date.now()` on the web)
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Fresh seed for a game's RNG when settings don't pin one
pub fn random_seed() -> u64 {
    use rand::Rng;

    rand::rng().random()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_clock_moves_forward() {
        let a = now_ms();
        let b = now_ms();
        assert!(a > 0.0);
        assert!(b >= a);
    }
}
