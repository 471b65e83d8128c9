//! Per-frame update pipeline and session state machine
//!
//! One `tick` advances the whole simulation by a wall-clock delta:
//! kinematics, hazard animation, bonus-ring spawn check, interactions, then
//! the countdown. Nothing mutates while paused or failed, so presentation
//! can keep reading a frozen state.

use std::time::Instant;

use crate::consts::*;

use super::state::{GamePhase, GameState};

/// Input snapshot for a single frame.
///
/// Held keys are continuous state; `pickup`, `drop`, `toggle_pause` and
/// `reset` are one-shot edge signals the caller must clear after the frame
/// has consumed them (`clear_signals`). Keeping the two channels apart is
/// what prevents a signal from firing on consecutive frames.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub sprint: bool,
    /// One-shot signals
    pub pickup: bool,
    pub drop: bool,
    pub toggle_pause: bool,
    pub reset: bool,
}

impl TickInput {
    /// Clear the one-shot signals after a frame has consumed them.
    pub fn clear_signals(&mut self) {
        self.pickup = false;
        self.drop = false;
        self.toggle_pause = false;
        self.reset = false;
    }
}

/// Advance the session by one frame. `dt` is the wall-clock delta in
/// seconds; it is clamped to [`crate::consts::MAX_FRAME_DT`] so a stalled frame cannot
/// tunnel the player through hazards or walls.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.reset {
        log::info!("session reset");
        *state = GameState::new(state.seed);
        return;
    }

    if input.toggle_pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            // Failure is terminal until an explicit reset
            GamePhase::Failed => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::Failed => return,
        GamePhase::Playing => {}
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.game_time += dt;

    super::kinematics::update_player(state, input, dt);
    super::hazards::update_hazards(state);
    super::spawn::update_ring_spawner(state, dt);
    super::interact::resolve(state, input, dt);

    state.time_left -= dt;
    if state.time_left <= 0.0 {
        state.time_left = 0.0;
        state.phase = GamePhase::Failed;
        log::info!(
            "out of time: score {}, {} deliveries",
            state.total_score,
            state.completed_deliveries
        );
    }
}

/// Wall-clock delta source for the frame loop. Deltas are measured between
/// consecutive `frame_dt` calls and clamped to [`crate::consts::MAX_FRAME_DT`].
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call, clamped.
    pub fn frame_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
