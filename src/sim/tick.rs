//! Per-frame simulation step
//!
//! Order within a frame: flyer physics, spawn, then each live gate in spawn
//! order (scroll, retire, score, collide), then world bounds. The first
//! collision ends the frame.

use super::collision::{Collision, flyer_bounds, flyer_gate_collision, flyer_world_collision};
use super::physics::advance_flyer;
use super::state::{FrameOutcome, GameEvent, RunSession};
use crate::progression::Catalog;
use crate::tuning::Tuning;

/// Advance a run by one frame.
///
/// `now_ms` is the host clock and only drives spawn cadence; physics moves by
/// a fixed step per call.
pub fn tick(
    session: &mut RunSession,
    catalog: &mut Catalog,
    tuning: &Tuning,
    now_ms: f64,
) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();

    advance_flyer(&mut session.flyer);

    if let Some(gate) = session.spawner.maybe_spawn(tuning, now_ms) {
        log::debug!("Gate {} spawned, gap top {:.1}", gate.id, gate.gap_top);
        outcome.events.push(GameEvent::GateSpawned { gate_id: gate.id });
        session.gates.push(gate);
    }

    let bounds = flyer_bounds(&session.flyer);
    let flyer_x = session.flyer.pos.x;

    let mut index = 0;
    while index < session.gates.len() {
        let gate = &mut session.gates[index];
        gate.x -= tuning.scroll_speed;
        let trailing = gate.trailing_edge(tuning.gate_width);
        let gate_id = gate.id;

        if trailing < 0.0 {
            session.gates.remove(index);
            outcome.events.push(GameEvent::GateRetired { gate_id });
            continue;
        }

        if !gate.passed && trailing < flyer_x {
            gate.passed = true;
            score_gate(session, catalog, gate_id, &mut outcome);
        }

        if flyer_gate_collision(&bounds, &session.gates[index], tuning) {
            outcome.collision = Some(Collision::Gate { gate_id });
            return outcome;
        }

        index += 1;
    }

    outcome.collision = flyer_world_collision(&bounds, tuning);
    outcome
}

fn score_gate(
    session: &mut RunSession,
    catalog: &mut Catalog,
    gate_id: u32,
    outcome: &mut FrameOutcome,
) {
    let score = session.on_gate_passed();
    outcome.score_delta += 1;
    outcome.events.push(GameEvent::GatePassed { gate_id, score });

    for index in catalog.check_unlocks(score) {
        let name = catalog
            .get(index)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        outcome.events.push(GameEvent::Unlocked { index, name });
    }
}
