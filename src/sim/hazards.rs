//! Hazard animator
//!
//! Spikes and gates are driven by per-entity sine phases derived from
//! monotonic game time, so their animation is smooth, period-deterministic
//! and desynchronized without any per-frame random state.
//!
//! The spike waveform is deliberately piecewise: a wide dwell fully raised
//! (`sin > RAISE_THRESHOLD`), a wide dwell fully lowered
//! (`sin < -RAISE_THRESHOLD`), and short linear transition ramps in between.
//! Spikes only deal damage during the raised dwell.

use std::f32::consts::TAU;

use crate::consts::*;

use super::state::GameState;

/// Sine value above which a spike is fully raised (and below whose negation
/// it is fully lowered). The 0.7-wide band in between is the transition.
const RAISE_THRESHOLD: f32 = 0.3;

/// Spike height and danger flag for a given sine sample.
/// Returns `(normalized_height, is_dangerous)` with height in [0, 1].
fn spike_profile(s: f32) -> (f32, bool) {
    if s > RAISE_THRESHOLD {
        (1.0, true)
    } else if s < -RAISE_THRESHOLD {
        (0.0, false)
    } else if s > 0.0 {
        // Rising ramp, floored at zero inside the transition band
        (((s - RAISE_THRESHOLD) / (1.0 - RAISE_THRESHOLD)).max(0.0), false)
    } else {
        // Falling ramp toward the lowered dwell
        (((s + RAISE_THRESHOLD) / (1.0 - RAISE_THRESHOLD)).max(0.0), false)
    }
}

/// Phase for an entity at `game_time` with the given cycle length and offset.
fn phase(game_time: f32, cycle_secs: f32, offset: f32) -> f32 {
    (game_time / cycle_secs + offset) % TAU
}

/// Advance all hazard animations to the current game time. Difficulty
/// shortens the effective cycle, making hazards fire faster at high levels.
pub fn update_hazards(state: &mut GameState) {
    let spike_cycle =
        SPIKE_CYCLE_SECS / (1.0 + (state.difficulty_level - 1) as f32 * SPIKE_DIFFICULTY_COEFF);
    for spike in &mut state.spikes {
        let s = phase(state.game_time, spike_cycle, spike.cycle_offset).sin();
        let (height, dangerous) = spike_profile(s);
        spike.current_height = spike.max_height * height;
        spike.is_dangerous = dangerous;
    }

    let gate_cycle =
        GATE_CYCLE_SECS / (1.0 + (state.difficulty_level - 1) as f32 * GATE_DIFFICULTY_COEFF);
    for gate in &mut state.gates {
        gate.is_open = phase(state.game_time, gate_cycle, gate.cycle_offset).sin() > 0.0;
        gate.current_height = if gate.is_open { 0.0 } else { gate.max_height };
    }
}
