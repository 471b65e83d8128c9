//! Delivery run and world generation
//!
//! Per-session hazards (spikes, gates) are placed once at reset. Everything
//! else - beacons, packages, rings, terrain tiles - is regenerated for each
//! delivery run. All randomness comes from the state-owned `Pcg32`, so a
//! seed reproduces the whole session layout.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::consts::*;

use super::state::{
    Beacon, BeaconKind, BonusRing, ConveyorDirection, ConveyorTile, GameState, Gate,
    GateOrientation, Package, RouteColor, Spike, StickyTile,
};

/// Place the per-session hazards. Called once per session, not per run.
pub fn place_hazards(state: &mut GameState) {
    state.spikes.clear();
    state.gates.clear();

    for _ in 0..SPIKE_COUNT {
        let pos = random_floor_pos(state, ARENA_SIZE);
        let cycle_offset = state.rng.random_range(0.0..TAU);
        state.spikes.push(Spike {
            pos,
            current_height: 0.0,
            max_height: SPIKE_MAX_HEIGHT,
            cycle_offset,
            is_dangerous: false,
            hit_player: false,
        });
    }

    for _ in 0..GATE_COUNT {
        // Gates cluster in the middle half of the arena, across likely routes
        let pos = random_floor_pos(state, ARENA_SIZE / 2.0);
        let orientation = if state.rng.random_bool(0.5) {
            GateOrientation::Vertical
        } else {
            GateOrientation::Horizontal
        };
        let cycle_offset = state.rng.random_range(0.0..TAU);
        state.gates.push(Gate {
            pos,
            current_height: 0.0,
            max_height: GATE_MAX_HEIGHT,
            is_open: true,
            orientation,
            cycle_offset,
        });
    }
}

/// Generate a fresh delivery run: new route color, beacons, packages, rings
/// and terrain tiles. Called at session start and after every completed
/// delivery.
pub fn start_new_run(state: &mut GameState) {
    state.current_beacon_index = 0;
    state.beacons.clear();
    state.packages.clear();
    state.bonus_rings.clear();
    state.sticky_tiles.clear();
    state.conveyor_tiles.clear();

    // New route color, always different from the previous run's
    let old_color = state.route_color;
    while state.route_color == old_color {
        let idx = state.rng.random_range(0..RouteColor::ALL.len());
        state.route_color = RouteColor::ALL[idx];
    }

    for _ in 0..ROUTE_CHECKPOINTS {
        let pos = random_floor_pos(state, ARENA_SIZE - 50.0);
        state.beacons.push(Beacon {
            pos,
            kind: BeaconKind::Checkpoint,
        });
    }
    let pos = random_floor_pos(state, ARENA_SIZE - 50.0);
    state.beacons.push(Beacon {
        pos,
        kind: BeaconKind::DropZone,
    });

    // Exactly one correct package plus a few decoys, clustered at the
    // pickup station in the southwest corner
    let pos = random_station_pos(state);
    let id = state.next_entity_id();
    state.packages.push(Package {
        id,
        pos,
        color: state.route_color,
        is_correct: true,
        is_carried: false,
    });
    let decoys: Vec<RouteColor> = RouteColor::ALL
        .into_iter()
        .filter(|c| *c != state.route_color)
        .collect();
    let decoy_count = state.rng.random_range(2..=3);
    for _ in 0..decoy_count {
        let pos = random_station_pos(state);
        let color = decoys[state.rng.random_range(0..decoys.len())];
        let id = state.next_entity_id();
        state.packages.push(Package {
            id,
            pos,
            color,
            is_correct: false,
            is_carried: false,
        });
    }

    // Bonus rings; more of them at higher difficulty
    let ring_count = state.rng.random_range(3..=5) + state.difficulty_level;
    for _ in 0..ring_count {
        let mut pos = random_floor_pos(state, ARENA_SIZE);
        pos.y = RING_FLOAT_Y;
        let id = state.next_entity_id();
        state.bonus_rings.push(BonusRing {
            id,
            pos,
            radius: 30.0,
            active: true,
            multiplier: 1,
        });
    }

    for _ in 0..5 {
        let pos = random_tile_pos(state);
        state.sticky_tiles.push(StickyTile { pos });
    }

    for _ in 0..8 {
        let pos = random_tile_pos(state);
        let direction =
            ConveyorDirection::ALL[state.rng.random_range(0..ConveyorDirection::ALL.len())];
        state.conveyor_tiles.push(ConveyorTile {
            pos,
            direction,
            strength: CONVEYOR_STRENGTH,
        });
    }

    log::debug!(
        "new run: color {:?}, {} beacons, {} packages, {} rings",
        state.route_color,
        state.beacons.len(),
        state.packages.len(),
        state.bonus_rings.len()
    );
}

/// Periodic bonus-ring spawner. Spawns a difficulty-multiplied ring a fixed
/// distance ahead of the player, skipped when that point falls outside the
/// arena; higher difficulty shortens the interval.
pub fn update_ring_spawner(state: &mut GameState, dt: f32) {
    state.ring_spawn_timer += dt;
    let interval = RING_SPAWN_INTERVAL / state.difficulty_level as f32;
    if state.ring_spawn_timer < interval {
        return;
    }
    state.ring_spawn_timer = 0.0;

    let heading = state.player.heading();
    let x = state.player.pos.x + heading.x * RING_SPAWN_AHEAD;
    let z = state.player.pos.z + heading.y * RING_SPAWN_AHEAD;
    if x.abs() >= ARENA_SIZE || z.abs() >= ARENA_SIZE {
        return;
    }

    let id = state.next_entity_id();
    state.bonus_rings.push(BonusRing {
        id,
        pos: Vec3::new(x, RING_FLOAT_Y, z),
        radius: 25.0,
        active: true,
        multiplier: state.difficulty_level,
    });
}

/// Uniform ground position within the given half-extent
fn random_floor_pos(state: &mut GameState, half_extent: f32) -> Vec3 {
    let x = state.rng.random_range(-half_extent..half_extent);
    let z = state.rng.random_range(-half_extent..half_extent);
    Vec3::new(x, 0.0, z)
}

/// Package position within the pickup-station corner
fn random_station_pos(state: &mut GameState) -> Vec3 {
    let x = state.rng.random_range(-350.0..-250.0);
    let z = state.rng.random_range(-350.0..-250.0);
    Vec3::new(x, PACKAGE_GROUND_Y, z)
}

/// Grid-aligned min-corner for a terrain tile
fn random_tile_pos(state: &mut GameState) -> Vec3 {
    let gx = state.rng.random_range(-8..8) as f32;
    let gz = state.rng.random_range(-8..8) as f32;
    Vec3::new(gx * TILE_SIZE, 0.0, gz * TILE_SIZE)
}
