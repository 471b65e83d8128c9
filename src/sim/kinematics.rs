//! Player kinematics
//!
//! Input-driven rotation, translation and stamina integration, plus terrain
//! modifiers (sticky slowdown, conveyor push), the clean-turn combo, and the
//! per-axis arena clamp. All rates are per-second and scaled by `dt`.

use crate::consts::*;

use super::state::GameState;
use super::tick::TickInput;

/// Advance the player by one frame.
pub fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    // Sprint and stamina. Stamina is clamped every frame, not only while
    // sprinting, so external mutations can never leave it out of range.
    let sprinting = input.sprint && state.player.stamina > 0.0;
    if sprinting {
        state.player.speed = PLAYER_SPEED_SPRINT;
        state.player.stamina -= STAMINA_DRAIN_RATE * dt;
    } else {
        state.player.speed = PLAYER_SPEED_NORMAL;
        state.player.stamina += STAMINA_REGEN_RATE * dt;
    }
    state.player.stamina = state.player.stamina.clamp(0.0, STAMINA_MAX);

    // Rotation. The angle is unbounded; trig wraps it implicitly.
    let turning = input.turn_left || input.turn_right;
    if input.turn_left {
        state.player.facing_deg -= PLAYER_ROTATION_SPEED * dt;
    }
    if input.turn_right {
        state.player.facing_deg += PLAYER_ROTATION_SPEED * dt;
    }

    let move_dir: f32 = match (input.forward, input.backward) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };

    // Sticky tiles slow the effective speed; one overlap is enough.
    let mut effective_speed = state.player.speed;
    if state
        .sticky_tiles
        .iter()
        .any(|tile| tile.contains(state.player.pos))
    {
        effective_speed *= STICKY_SPEED_FACTOR;
    }

    if move_dir != 0.0 {
        let heading = state.player.heading();
        state.player.pos.x += heading.x * effective_speed * dt * move_dir;
        state.player.pos.z += heading.y * effective_speed * dt * move_dir;
    }

    // Conveyor push applies regardless of input. Overlapping tiles sum.
    let mut push = glam::Vec2::ZERO;
    for conveyor in &state.conveyor_tiles {
        if conveyor.contains(state.player.pos) {
            push += conveyor.direction.push_dir() * conveyor.strength * dt;
        }
    }
    state.player.pos.x += push.x;
    state.player.pos.z += push.y;

    update_combo(state, turning, move_dir, effective_speed);

    clamp_to_arena(state);
}

/// Clean-turn combo: turning while moving forward above a speed threshold
/// builds a frame streak; each full streak grants a combo step and a time
/// bonus. The streak counter resets the moment a frame fails to qualify,
/// and the combo itself expires after a real-time grace period without a
/// qualifying turn.
fn update_combo(state: &mut GameState, turning: bool, move_dir: f32, effective_speed: f32) {
    let qualifies = turning && move_dir > 0.0 && effective_speed > COMBO_SPEED_THRESHOLD;
    if qualifies {
        state.combo.streak_frames += 1;
        if state.combo.streak_frames >= COMBO_STREAK_FRAMES {
            state.combo.count += 1;
            state.combo.streak_frames = 0;
            state.time_left += COMBO_TIME_BONUS;
            log::debug!("clean-turn combo x{}", state.combo.count);
        }
    } else {
        state.combo.streak_frames = 0;
        if state.game_time - state.combo.last_turn_time > COMBO_GRACE_SECS {
            state.combo.count = 0;
        }
    }

    if turning {
        state.combo.last_turn_time = state.game_time;
    }
}

/// Clamp each axis independently to the inner rectangle. Violating one axis
/// must not disturb the other, so the player can slide along a wall.
fn clamp_to_arena(state: &mut GameState) {
    let inner_x = ARENA_SIZE - PLAYER_BOUND_MARGIN_X;
    let inner_z = ARENA_SIZE - PLAYER_BOUND_MARGIN_Z;
    state.player.pos.x = state.player.pos.x.clamp(-inner_x, inner_x);
    state.player.pos.z = state.player.pos.z.clamp(-inner_z, inner_z);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ConveyorDirection, ConveyorTile, StickyTile};
    use glam::Vec3;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42);
        // Clear terrain so movement tests are not perturbed
        state.sticky_tiles.clear();
        state.conveyor_tiles.clear();
        state
    }

    #[test]
    fn test_sprint_drains_and_regen_clamps() {
        let mut state = playing_state();
        let input = TickInput {
            sprint: true,
            ..Default::default()
        };
        update_player(&mut state, &input, 1.0);
        assert_eq!(state.player.speed, PLAYER_SPEED_SPRINT);
        assert!((state.player.stamina - (STAMINA_MAX - STAMINA_DRAIN_RATE)).abs() < 1e-3);

        // Regen never exceeds the cap
        let idle = TickInput::default();
        for _ in 0..100 {
            update_player(&mut state, &idle, 1.0);
        }
        assert_eq!(state.player.stamina, STAMINA_MAX);
        assert_eq!(state.player.speed, PLAYER_SPEED_NORMAL);
    }

    #[test]
    fn test_sprint_without_stamina_falls_back_to_normal() {
        let mut state = playing_state();
        state.player.stamina = 0.0;
        let input = TickInput {
            sprint: true,
            forward: true,
            ..Default::default()
        };
        update_player(&mut state, &input, 0.016);
        assert_eq!(state.player.speed, PLAYER_SPEED_NORMAL);
        assert!(state.player.stamina > 0.0, "regen resumes when exhausted");
    }

    #[test]
    fn test_rotation_direction() {
        let mut state = playing_state();
        let input = TickInput {
            turn_right: true,
            ..Default::default()
        };
        update_player(&mut state, &input, 1.0);
        assert!((state.player.facing_deg - PLAYER_ROTATION_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let mut state = playing_state();
        state.player.pos = Vec3::new(0.0, PLAYER_GROUND_Y, 0.0);
        state.player.facing_deg = 0.0; // heading = +z
        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        update_player(&mut state, &input, 1.0);
        assert!(state.player.pos.x.abs() < 1e-3);
        assert!((state.player.pos.z - PLAYER_SPEED_NORMAL).abs() < 1e-3);
    }

    #[test]
    fn test_sticky_tile_slows_movement() {
        let mut state = playing_state();
        state.player.pos = Vec3::new(10.0, PLAYER_GROUND_Y, 10.0);
        state.player.facing_deg = 0.0;
        state.sticky_tiles.push(StickyTile {
            pos: Vec3::new(0.0, 0.0, 0.0),
        });
        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        update_player(&mut state, &input, 0.1);
        let moved = state.player.pos.z - 10.0;
        let expected = PLAYER_SPEED_NORMAL * STICKY_SPEED_FACTOR * 0.1;
        assert!((moved - expected).abs() < 1e-3);
    }

    #[test]
    fn test_conveyor_pushes_without_input() {
        let mut state = playing_state();
        state.player.pos = Vec3::new(10.0, PLAYER_GROUND_Y, 10.0);
        state.conveyor_tiles.push(ConveyorTile {
            pos: Vec3::new(0.0, 0.0, 0.0),
            direction: ConveyorDirection::East,
            strength: CONVEYOR_STRENGTH,
        });
        update_player(&mut state, &TickInput::default(), 1.0);
        assert!((state.player.pos.x - (10.0 + CONVEYOR_STRENGTH)).abs() < 1e-3);
        assert!((state.player.pos.z - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_boundary_clamp_is_per_axis() {
        let mut state = playing_state();
        state.player.pos = Vec3::new(0.0, PLAYER_GROUND_Y, 100.0);
        state.player.facing_deg = 90.0; // heading = +x
        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        // One huge step that would fly past the east wall
        update_player(&mut state, &input, 10.0);
        assert_eq!(state.player.pos.x, ARENA_SIZE - PLAYER_BOUND_MARGIN_X);
        assert!(
            (state.player.pos.z - 100.0).abs() < 1.0,
            "z axis untouched by the x clamp"
        );
    }

    #[test]
    fn test_combo_grants_time_bonus_after_streak() {
        let mut state = playing_state();
        state.player.pos = Vec3::new(0.0, PLAYER_GROUND_Y, 0.0);
        let time_before = state.time_left;
        let input = TickInput {
            forward: true,
            turn_right: true,
            ..Default::default()
        };
        for _ in 0..COMBO_STREAK_FRAMES {
            // Keep the player near the center so walls don't interfere
            state.player.pos = Vec3::new(0.0, PLAYER_GROUND_Y, 0.0);
            update_player(&mut state, &input, 0.016);
        }
        assert_eq!(state.combo.count, 1);
        assert!((state.time_left - time_before - COMBO_TIME_BONUS).abs() < 1e-3);
    }

    #[test]
    fn test_combo_resets_after_grace_period() {
        let mut state = playing_state();
        state.combo.count = 3;
        state.combo.last_turn_time = 0.0;
        state.game_time = COMBO_GRACE_SECS + 1.0;
        update_player(&mut state, &TickInput::default(), 0.016);
        assert_eq!(state.combo.count, 0);
    }
}
