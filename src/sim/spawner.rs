//! Timestamp-driven gate spawning
//!
//! Spawn cadence follows the host clock rather than frame count, so gates
//! arrive at the same rate regardless of display refresh.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Gate;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Spawner {
    /// Timestamp of the last spawn; `None` right after a reset
    pub last_spawn_ms: Option<f64>,
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            last_spawn_ms: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Clear the spawn timer so the next check spawns immediately.
    ///
    /// The RNG keeps its stream so successive runs get different layouts.
    pub fn reset(&mut self) {
        self.last_spawn_ms = None;
    }

    /// Spawn a gate at the right edge once `spawn_interval_ms` has elapsed
    pub fn maybe_spawn(&mut self, tuning: &Tuning, now_ms: f64) -> Option<Gate> {
        let due = match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last > tuning.spawn_interval_ms,
        };
        if !due {
            return None;
        }

        self.last_spawn_ms = Some(now_ms);
        let id = self.next_id;
        self.next_id += 1;
        Some(Gate {
            id,
            x: tuning.world_width,
            gap_top: self.roll_gap_top(tuning),
            passed: false,
        })
    }

    fn roll_gap_top(&mut self, tuning: &Tuning) -> f32 {
        let (min, max) = tuning.gap_top_range();
        if min.is_finite() && max.is_finite() && max > min {
            self.rng.random_range(min..=max)
        } else {
            min
        }
    }
}
