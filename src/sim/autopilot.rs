//! Demo autopilot
//!
//! Hops whenever the flyer sinks below the middle of the next gate's gap.
//! Used by the headless binary and attract-mode style hosts.

use super::state::RunSession;
use crate::tuning::Tuning;

/// How far below the target the flyer may sink before hopping
const SLACK: f32 = 10.0;

/// Height the autopilot is aiming for
pub fn target_height(session: &RunSession, tuning: &Tuning) -> f32 {
    session
        .gates
        .iter()
        .find(|g| !g.passed)
        .map(|g| g.gap_top + tuning.gate_gap / 2.0)
        .unwrap_or(tuning.world_height / 2.0)
}

/// Whether to send an impulse before the next frame
pub fn wants_impulse(session: &RunSession, tuning: &Tuning) -> bool {
    let flyer = &session.flyer;
    flyer.vel > 0.0 && flyer.pos.y > target_height(session, tuning) + SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Gate;

    #[test]
    fn test_targets_world_middle_without_gates() {
        let tuning = Tuning::default();
        let session = RunSession::new(&tuning, 1);
        assert_eq!(target_height(&session, &tuning), 300.0);
    }

    #[test]
    fn test_targets_next_unpassed_gate() {
        let tuning = Tuning::default();
        let mut session = RunSession::new(&tuning, 1);
        session.gates.push(Gate {
            id: 1,
            x: -20.0,
            gap_top: 50.0,
            passed: true,
        });
        session.gates.push(Gate {
            id: 2,
            x: 200.0,
            gap_top: 100.0,
            passed: false,
        });
        assert_eq!(target_height(&session, &tuning), 175.0);
    }

    #[test]
    fn test_only_hops_while_falling_below_target() {
        let tuning = Tuning::default();
        let mut session = RunSession::new(&tuning, 1);
        session.flyer.pos.y = 320.0;
        session.flyer.vel = -2.0;
        assert!(!wants_impulse(&session, &tuning));
        session.flyer.vel = 2.0;
        assert!(wants_impulse(&session, &tuning));
        session.flyer.pos.y = 305.0;
        assert!(!wants_impulse(&session, &tuning));
    }
}
