//! Data-driven game balance
//!
//! Every physics and world constant the simulation reads. Defaults match
//! `crate::consts`; a settings file may override any subset.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Flyer ===
    pub flyer_start_x: f32,
    pub flyer_start_y: f32,
    pub flyer_size: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Gates ===
    pub gate_width: f32,
    pub gate_gap: f32,
    pub gate_min_height: f32,
    pub scroll_speed: f32,
    pub spawn_interval_ms: f64,

    // === Flow ===
    pub game_over_delay_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            flyer_start_x: FLYER_START_X,
            flyer_start_y: FLYER_START_Y,
            flyer_size: FLYER_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            gate_width: GATE_WIDTH,
            gate_gap: GATE_GAP,
            gate_min_height: GATE_MIN_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            game_over_delay_ms: GAME_OVER_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Inclusive range a gate's gap top may be drawn from.
    ///
    /// Collapses to `min..=min` when the gap and margins don't fit the world.
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.gate_min_height;
        let max = self.world_height - self.gate_gap - self.gate_min_height;
        (min, max.max(min))
    }

    /// Human-readable problems with this tuning (empty when sane)
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let fields = [
            ("world_width", self.world_width as f64),
            ("world_height", self.world_height as f64),
            ("flyer_start_x", self.flyer_start_x as f64),
            ("flyer_start_y", self.flyer_start_y as f64),
            ("flyer_size", self.flyer_size as f64),
            ("gravity", self.gravity as f64),
            ("jump_impulse", self.jump_impulse as f64),
            ("gate_width", self.gate_width as f64),
            ("gate_gap", self.gate_gap as f64),
            ("gate_min_height", self.gate_min_height as f64),
            ("scroll_speed", self.scroll_speed as f64),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("game_over_delay_ms", self.game_over_delay_ms),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                problems.push(format!("{} must be finite, got {}", name, value));
            }
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            problems.push(format!(
                "world must have positive size, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.scroll_speed <= 0.0 {
            problems.push(format!("scroll_speed must be positive, got {}", self.scroll_speed));
        }
        if self.jump_impulse >= 0.0 {
            problems.push(format!(
                "jump_impulse should point up (negative), got {}",
                self.jump_impulse
            ));
        }
        let (min, max) = self.gap_top_range();
        if min == max && self.world_height - self.gate_gap - self.gate_min_height < min {
            problems.push(format!(
                "gate gap {} with margin {} doesn't fit world height {}",
                self.gate_gap, self.gate_min_height, self.world_height
            ));
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.jump_impulse, -8.0);
        assert!(tuning.problems().is_empty());
    }

    #[test]
    fn test_gap_top_range() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gap_top_range(), (50.0, 400.0));

        let cramped = Tuning {
            world_height: 200.0,
            ..Default::default()
        };
        assert_eq!(cramped.gap_top_range(), (50.0, 50.0));
        assert_eq!(cramped.problems().len(), 1);
    }

    #[test]
    fn test_non_finite_values_reported() {
        let tuning: Tuning = serde_json::from_str(r#"{"world_height": 1e39}"#).unwrap();
        assert!(tuning.world_height.is_infinite());
        let problems = tuning.problems();
        assert!(problems.iter().any(|p| p.starts_with("world_height must be finite")));

        let tuning = Tuning {
            spawn_interval_ms: f64::NAN,
            ..Default::default()
        };
        assert_eq!(tuning.problems().len(), 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 0.25}"#).unwrap();
        assert_eq!(tuning.gravity, 0.25);
        assert_eq!(tuning.gate_gap, GATE_GAP);
    }
}
