//! Courier Run - a timed courier arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, hazards, interactions, session clock)
//! - `camera`: Fixed-orbit and follow camera targeting
//! - `hud`: Pure read-model helpers for HUD rendering (medals, beacon arrow)
//!
//! Rendering, windowing and raw input capture are not part of this crate;
//! a presentation layer feeds `sim::TickInput` snapshots in and reads the
//! resulting `sim::GameState` back out once per frame.

pub mod camera;
pub mod hud;
pub mod sim;

pub use camera::{CameraMode, CameraRig};
pub use hud::{Medal, beacon_arrow_angle};
pub use sim::{GamePhase, GameState, TickInput, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Longest frame delta the simulation will integrate (seconds).
    /// Larger wall-clock gaps (stalls, tab switches) are clamped so the
    /// player cannot tunnel through hazards or walls.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena half-extent: the floor spans [-ARENA_SIZE, ARENA_SIZE] on x and z
    pub const ARENA_SIZE: f32 = 402.0;
    /// Edge length of one floor tile (sticky/conveyor footprints)
    pub const TILE_SIZE: f32 = 51.0;

    /// Player defaults
    pub const PLAYER_SPEED_NORMAL: f32 = 156.0;
    pub const PLAYER_SPEED_SPRINT: f32 = 250.0;
    /// Rotation rate in degrees per second
    pub const PLAYER_ROTATION_SPEED: f32 = 135.0;
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Ground height of the player's origin
    pub const PLAYER_GROUND_Y: f32 = 15.0;
    /// Boundary margins keep the player mesh inside the walls. The z margin
    /// is larger because the nose extends the footprint forward.
    pub const PLAYER_BOUND_MARGIN_X: f32 = 14.0;
    pub const PLAYER_BOUND_MARGIN_Z: f32 = 16.0;

    /// Stamina
    pub const STAMINA_MAX: f32 = 100.0;
    pub const STAMINA_DRAIN_RATE: f32 = 20.0;
    pub const STAMINA_REGEN_RATE: f32 = 10.0;

    /// Speed factor while standing on a sticky tile
    pub const STICKY_SPEED_FACTOR: f32 = 0.2;
    /// Conveyor push in units per second
    pub const CONVEYOR_STRENGTH: f32 = 30.0;

    /// Clean-turn combo: minimum effective speed, consecutive qualifying
    /// frames per combo step, real-time grace before the counter resets,
    /// and the time bonus per step.
    pub const COMBO_SPEED_THRESHOLD: f32 = 50.0;
    pub const COMBO_STREAK_FRAMES: u32 = 30;
    pub const COMBO_GRACE_SECS: f32 = 2.0;
    pub const COMBO_TIME_BONUS: f32 = 2.0;

    /// Session timer at the start of a run (seconds)
    pub const SESSION_TIME: f32 = 156.0;
    /// Difficulty rises every this many completed deliveries
    pub const DELIVERIES_PER_DIFFICULTY: u32 = 3;

    /// Spikes
    pub const SPIKE_COUNT: usize = 5;
    pub const SPIKE_MAX_HEIGHT: f32 = 80.0;
    pub const SPIKE_RADIUS: f32 = 12.0;
    /// Base seconds per spike animation cycle
    pub const SPIKE_CYCLE_SECS: f32 = 3.0;
    /// Cycle speedup per difficulty level above 1
    pub const SPIKE_DIFFICULTY_COEFF: f32 = 0.3;
    /// One-shot penalty for touching a raised spike (seconds)
    pub const SPIKE_TIME_PENALTY: f32 = 3.0;
    /// Knockback speed while in contact with a dangerous spike
    pub const SPIKE_KNOCKBACK: f32 = 80.0;
    /// Extra separation applied when pushed off a lowered spike
    pub const SPIKE_PUSH_EPSILON: f32 = 2.0;
    /// A spike only deals damage once it is nearly fully raised
    pub const SPIKE_DANGER_HEIGHT: f32 = 40.0;

    /// Gates
    pub const GATE_COUNT: usize = 3;
    pub const GATE_MAX_HEIGHT: f32 = 100.0;
    pub const GATE_CYCLE_SECS: f32 = 4.0;
    pub const GATE_DIFFICULTY_COEFF: f32 = 0.2;
    /// Effective collision radii by orientation (rect-vs-circle proxy)
    pub const GATE_RADIUS_VERTICAL: f32 = 30.0;
    pub const GATE_RADIUS_HORIZONTAL: f32 = 40.0;
    pub const GATE_PUSH_EPSILON: f32 = 5.0;
    /// Time drained per second of contact with a closed gate
    pub const GATE_PENALTY_RATE: f32 = 0.5;

    /// Packages and beacons
    pub const PICKUP_RANGE: f32 = 30.0;
    pub const BEACON_RANGE: f32 = 30.0;
    pub const PACKAGE_GROUND_Y: f32 = 7.5;
    /// Intermediate checkpoints per route (plus one drop zone)
    pub const ROUTE_CHECKPOINTS: usize = 4;
    pub const WRONG_PACKAGE_PENALTY: f32 = 5.0;
    pub const CHECKPOINT_SCORE: i64 = 20;
    pub const DELIVERY_SCORE: i64 = 100;
    pub const DELIVERY_TIME_BONUS: f32 = 10.0;

    /// Bonus rings
    pub const RING_SPAWN_INTERVAL: f32 = 15.0;
    pub const RING_FLOAT_Y: f32 = 60.0;
    pub const RING_TIME_BONUS: f32 = 5.0;
    pub const RING_SCORE: i64 = 10;
    /// Spawned rings appear this far ahead of the player
    pub const RING_SPAWN_AHEAD: f32 = 150.0;
}

/// Planar (xz) distance between two world positions; y is ignored because
/// all gameplay interactions happen on the ground plane.
#[inline]
pub fn planar_distance(a: glam::Vec3, b: glam::Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Unit xz heading for a facing angle in degrees (x = sin, z = cos).
#[inline]
pub fn heading_from_degrees(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}
