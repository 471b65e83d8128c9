//! Interaction and collision resolver
//!
//! Runs once per frame after kinematics and hazard animation. Handles
//! pickup/drop, beacon advancement, spike and gate collisions, and bonus
//! ring collection. All push and knockback vectors use the same trig
//! convention as movement: x from sine, z from cosine of the angle toward
//! the other body.

use crate::consts::*;
use crate::planar_distance;

use super::state::{BeaconKind, GameState};
use super::tick::TickInput;

/// Resolve all interactions for this frame.
pub fn resolve(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pickup {
        try_pickup(state);
    }
    if input.drop {
        try_drop(state);
    }
    check_beacon(state);
    resolve_spikes(state, dt);
    resolve_gates(state, dt);
    collect_rings(state);
}

/// Pick up the nearest free package in range. Picking up a decoy costs time
/// immediately. No-op when already carrying or nothing is in range, so a
/// second pickup signal in the same frame changes nothing.
fn try_pickup(state: &mut GameState) {
    if state.is_carrying_package() {
        return;
    }

    let player_pos = state.player.pos;
    let nearest = state
        .packages
        .iter_mut()
        .filter(|pkg| !pkg.is_carried)
        .map(|pkg| (planar_distance(player_pos, pkg.pos), pkg))
        .filter(|(dist, _)| *dist < PICKUP_RANGE)
        .min_by(|(a, _), (b, _)| a.total_cmp(b));

    if let Some((_, pkg)) = nearest {
        pkg.is_carried = true;
        state.carried_package = Some(pkg.id);
        if !pkg.is_correct {
            state.time_left -= WRONG_PACKAGE_PENALTY;
            log::info!("picked up a decoy package, -{WRONG_PACKAGE_PENALTY}s");
        } else {
            log::debug!("picked up the route package");
        }
    }
}

/// Put the carried package down at the player's feet. No-op when empty-handed.
fn try_drop(state: &mut GameState) {
    let Some(id) = state.carried_package.take() else {
        return;
    };
    if let Some(pkg) = state.packages.iter_mut().find(|p| p.id == id) {
        pkg.is_carried = false;
        pkg.pos = state.player.pos;
        pkg.pos.y = PACKAGE_GROUND_Y;
    }
}

/// Advance the route when the player reaches the current beacon while
/// carrying the correct package. The drop zone completes the delivery and
/// regenerates the run; reaching a beacon empty-handed (or with a decoy)
/// has no effect at all.
fn check_beacon(state: &mut GameState) {
    let Some(beacon) = state.current_beacon() else {
        return;
    };
    if planar_distance(state.player.pos, beacon.pos) >= BEACON_RANGE {
        return;
    }
    if !state.carrying_correct_package() {
        return;
    }

    match beacon.kind {
        BeaconKind::DropZone => {
            state.total_score += DELIVERY_SCORE;
            state.time_left += DELIVERY_TIME_BONUS;
            state.completed_deliveries += 1;

            // Auto-drop: the delivered package leaves the player's hands
            if let Some(id) = state.carried_package.take()
                && let Some(pkg) = state.packages.iter_mut().find(|p| p.id == id)
            {
                pkg.is_carried = false;
            }

            if state.completed_deliveries % DELIVERIES_PER_DIFFICULTY == 0 {
                state.difficulty_level += 1;
                log::info!("difficulty raised to {}", state.difficulty_level);
            }

            log::info!(
                "delivery #{} complete, score {}",
                state.completed_deliveries,
                state.total_score
            );
            super::spawn::start_new_run(state);
        }
        BeaconKind::Checkpoint => {
            state.total_score += CHECKPOINT_SCORE;
            state.current_beacon_index += 1;
        }
    }
}

/// World-space xz push direction from `toward` back onto the player, using
/// the movement trig convention (x = sin, z = cos).
fn away_from(state: &GameState, toward: glam::Vec3) -> (f32, f32) {
    let angle = (toward.x - state.player.pos.x).atan2(toward.z - state.player.pos.z);
    (-angle.sin(), -angle.cos())
}

/// Spikes are solid obstacles while lowered or transitioning, and deal a
/// one-shot time penalty plus continuous knockback while raised. The
/// `hit_player` latch re-arms as soon as contact ends or the spike lowers.
fn resolve_spikes(state: &mut GameState, dt: f32) {
    let collision_distance = PLAYER_RADIUS + SPIKE_RADIUS;

    for i in 0..state.spikes.len() {
        let spike_pos = state.spikes[i].pos;
        let dist = planar_distance(state.player.pos, spike_pos);

        if dist >= collision_distance {
            state.spikes[i].hit_player = false;
            continue;
        }

        let dangerous =
            state.spikes[i].is_dangerous && state.spikes[i].current_height > SPIKE_DANGER_HEIGHT;
        let (px, pz) = away_from(state, spike_pos);

        if dangerous {
            if !state.spikes[i].hit_player {
                state.time_left -= SPIKE_TIME_PENALTY;
                state.spikes[i].hit_player = true;
                log::info!("spike hit, -{SPIKE_TIME_PENALTY}s");
            }
            // Strong knockback for every frame of contact
            state.player.pos.x += px * SPIKE_KNOCKBACK * dt;
            state.player.pos.z += pz * SPIKE_KNOCKBACK * dt;
        } else {
            state.spikes[i].hit_player = false;
            // Solid body: eject by the overlap plus a little separation
            let overlap = collision_distance - dist;
            state.player.pos.x += px * (overlap + SPIKE_PUSH_EPSILON);
            state.player.pos.z += pz * (overlap + SPIKE_PUSH_EPSILON);
        }
    }
}

/// Closed gates are solid and drain a small amount of time for every second
/// of contact (`GATE_PENALTY_RATE * dt`, frame-rate independent). Open gates
/// are fully passable.
fn resolve_gates(state: &mut GameState, dt: f32) {
    for i in 0..state.gates.len() {
        if state.gates[i].is_open {
            continue;
        }
        let gate_pos = state.gates[i].pos;
        let collision_distance = PLAYER_RADIUS + state.gates[i].orientation.collision_radius();
        let dist = planar_distance(state.player.pos, gate_pos);
        if dist >= collision_distance {
            continue;
        }

        let overlap = collision_distance - dist;
        let (px, pz) = away_from(state, gate_pos);
        state.player.pos.x += px * (overlap + GATE_PUSH_EPSILON);
        state.player.pos.z += pz * (overlap + GATE_PUSH_EPSILON);
        state.time_left -= GATE_PENALTY_RATE * dt;
    }
}

/// Collect every active ring the player overlaps. Hits are gathered first
/// and the collection mutated afterwards, so removal never invalidates the
/// scan.
fn collect_rings(state: &mut GameState) {
    let player_pos = state.player.pos;
    let collected: Vec<u32> = state
        .bonus_rings
        .iter()
        .filter(|ring| ring.active && planar_distance(player_pos, ring.pos) < ring.radius)
        .map(|ring| ring.id)
        .collect();

    for id in collected {
        if let Some(ring) = state.bonus_rings.iter_mut().find(|r| r.id == id) {
            ring.active = false;
            let mult = ring.multiplier as f32;
            state.time_left += RING_TIME_BONUS * mult;
            state.total_score += RING_SCORE * ring.multiplier as i64;
            log::debug!("bonus ring collected (x{})", ring.multiplier);
        }
    }
    state.bonus_rings.retain(|r| r.active);
}
