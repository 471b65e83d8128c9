//! Courier Run headless demo
//!
//! Runs the simulation without a renderer: a tiny autopilot steers the
//! courier toward the package station and then along the beacon route,
//! logging session events. Useful for watching the core play out and for
//! profiling the update pipeline.

use courier_run::consts::*;
use courier_run::hud::Medal;
use courier_run::sim::{GamePhase, GameState, TickInput, tick};
use courier_run::{beacon_arrow_angle, planar_distance};

/// Steer toward a world position: turn until roughly facing it, move
/// forward, sprint on the straights.
fn steer_toward(state: &GameState, target: glam::Vec3) -> TickInput {
    let dx = target.x - state.player.pos.x;
    let dz = target.z - state.player.pos.z;
    let desired_deg = dx.atan2(dz).to_degrees();
    let mut error = desired_deg - state.player.facing_deg;
    error = (error + 180.0).rem_euclid(360.0) - 180.0;

    TickInput {
        forward: error.abs() < 60.0,
        turn_left: error < -3.0,
        turn_right: error > 3.0,
        sprint: error.abs() < 10.0 && state.player.stamina > 25.0,
        ..Default::default()
    }
}

/// One frame of autopilot: fetch the correct package first, then chase the
/// current beacon.
fn autopilot(state: &GameState) -> TickInput {
    if !state.is_carrying_package() {
        let Some(pkg) = state.packages.iter().find(|p| p.is_correct && !p.is_carried) else {
            return TickInput::default();
        };
        let mut input = steer_toward(state, pkg.pos);
        if planar_distance(state.player.pos, pkg.pos) < PICKUP_RANGE {
            input.pickup = true;
        }
        return input;
    }

    match state.current_beacon() {
        Some(beacon) => steer_toward(state, beacon.pos),
        None => TickInput::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("starting demo session with seed {seed}");

    let mut state = GameState::new(seed);
    let dt = 1.0 / 60.0;
    let mut frame: u64 = 0;

    // Run until the timer fails the session (or a generous frame cap, in
    // case the autopilot gets lucky with time bonuses)
    let max_frames = 60 * 60 * 10;
    while state.phase == GamePhase::Playing && frame < max_frames {
        let input = autopilot(&state);
        tick(&mut state, &input, dt);
        frame += 1;

        // Once per simulated second, log a HUD line
        if frame % 60 == 0 {
            let arrow = beacon_arrow_angle(&state)
                .map(|deg| format!("{deg:+.0} deg"))
                .unwrap_or_else(|| "-".into());
            log::debug!(
                "t={:5.1}s score={} deliveries={} carrying={} beacon {}/{} arrow={}",
                state.time_left,
                state.total_score,
                state.completed_deliveries,
                state.is_carrying_package(),
                state.current_beacon_index + 1,
                state.beacons.len(),
                arrow,
            );
        }
    }

    log::info!(
        "session over after {:.1}s simulated: score {}, {} deliveries, medal {}",
        frame as f32 * dt,
        state.total_score,
        state.completed_deliveries,
        Medal::for_time_left(state.time_left).as_str()
    );
}
