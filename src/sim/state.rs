//! Session state and core simulation types
//!
//! Everything the presentation layer reads lives here. A `GameState` owns
//! the whole session: player, per-run collections, per-session hazards and
//! the seeded RNG, so one seed reproduces one full session.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen by the player; toggling resumes
    Paused,
    /// Timer ran out; terminal until an explicit reset
    Failed,
}

/// Route colors a delivery run can be keyed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteColor {
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl RouteColor {
    pub const ALL: [RouteColor; 4] = [
        RouteColor::Blue,
        RouteColor::Yellow,
        RouteColor::Magenta,
        RouteColor::Cyan,
    ];
}

/// The courier avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World position; y stays at ground height
    pub pos: Vec3,
    /// Facing angle in degrees around the y axis (unbounded, trig wraps it)
    pub facing_deg: f32,
    /// Effective speed this frame (sprint/terrain already applied)
    pub speed: f32,
    /// Sprint resource, clamped to [0, STAMINA_MAX] every frame
    pub stamina: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::new(-300.0, PLAYER_GROUND_Y, -300.0),
            facing_deg: 0.0,
            speed: PLAYER_SPEED_NORMAL,
            stamina: STAMINA_MAX,
        }
    }
}

impl Player {
    /// Unit xz heading for the current facing angle
    pub fn heading(&self) -> Vec2 {
        crate::heading_from_degrees(self.facing_deg)
    }
}

/// A deliverable package at the pickup station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: u32,
    pub pos: Vec3,
    pub color: RouteColor,
    /// Exactly one package per run matches the route color
    pub is_correct: bool,
    pub is_carried: bool,
}

/// Marks the terminal beacon of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeaconKind {
    Checkpoint,
    DropZone,
}

/// An ordered route waypoint; the last one is the drop zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beacon {
    pub pos: Vec3,
    pub kind: BeaconKind,
}

/// A pop-up floor spike, animated on a sine cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spike {
    pub pos: Vec3,
    pub current_height: f32,
    pub max_height: f32,
    /// Phase desync so spikes don't all fire together
    pub cycle_offset: f32,
    pub is_dangerous: bool,
    /// Edge-trigger latch: one penalty per dangerous phase
    pub hit_player: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOrientation {
    Vertical,
    Horizontal,
}

impl GateOrientation {
    /// Rect-vs-circle proxy radius for collision
    pub fn collision_radius(self) -> f32 {
        match self {
            GateOrientation::Vertical => GATE_RADIUS_VERTICAL,
            GateOrientation::Horizontal => GATE_RADIUS_HORIZONTAL,
        }
    }
}

/// A sliding route gate; solid while closed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    pub pos: Vec3,
    pub current_height: f32,
    pub max_height: f32,
    pub is_open: bool,
    pub orientation: GateOrientation,
    pub cycle_offset: f32,
}

/// A floating bonus ring; collected on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRing {
    pub id: u32,
    pub pos: Vec3,
    pub radius: f32,
    pub active: bool,
    /// Scales both the time and score bonus
    pub multiplier: u32,
}

/// An axis-aligned sticky floor tile (slows the player to 20%)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickyTile {
    /// Min-corner of the tile footprint
    pub pos: Vec3,
}

impl StickyTile {
    pub fn contains(&self, pos: Vec3) -> bool {
        tile_contains(self.pos, pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConveyorDirection {
    North,
    South,
    East,
    West,
}

impl ConveyorDirection {
    pub const ALL: [ConveyorDirection; 4] = [
        ConveyorDirection::North,
        ConveyorDirection::South,
        ConveyorDirection::East,
        ConveyorDirection::West,
    ];

    /// Unit xz push direction (north is -z)
    pub fn push_dir(self) -> Vec2 {
        match self {
            ConveyorDirection::North => Vec2::new(0.0, -1.0),
            ConveyorDirection::South => Vec2::new(0.0, 1.0),
            ConveyorDirection::East => Vec2::new(1.0, 0.0),
            ConveyorDirection::West => Vec2::new(-1.0, 0.0),
        }
    }
}

/// An axis-aligned conveyor tile pushing the player regardless of input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConveyorTile {
    /// Min-corner of the tile footprint
    pub pos: Vec3,
    pub direction: ConveyorDirection,
    /// Push in units per second
    pub strength: f32,
}

impl ConveyorTile {
    pub fn contains(&self, pos: Vec3) -> bool {
        tile_contains(self.pos, pos)
    }
}

/// Whether a tile with the given min-corner contains the xz point
fn tile_contains(tile_min: Vec3, pos: Vec3) -> bool {
    pos.x >= tile_min.x
        && pos.x <= tile_min.x + TILE_SIZE
        && pos.z >= tile_min.z
        && pos.z <= tile_min.z + TILE_SIZE
}

/// Clean-turn combo tracking (sustained fast forward movement while turning)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComboState {
    /// Completed combo steps this streak
    pub count: u32,
    /// Consecutive qualifying frames toward the next step
    pub streak_frames: u32,
    /// Game time of the last qualifying turn, for the grace window
    pub last_turn_time: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// State-owned RNG; all generation draws from here
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Countdown in seconds; the session fails when it hits zero
    pub time_left: f32,
    pub total_score: i64,
    pub completed_deliveries: u32,
    /// Only ever increases within a session
    pub difficulty_level: u32,
    /// Monotonic simulated time; drives hazard phases
    pub game_time: f32,

    pub player: Player,
    pub combo: ComboState,

    /// Per-run collections, replaced by the run generator
    pub packages: Vec<Package>,
    pub beacons: Vec<Beacon>,
    /// Cursor into `beacons`, monotone within a run
    pub current_beacon_index: usize,
    /// Route color of the current run
    pub route_color: RouteColor,
    /// Id of the carried package, if any (at most one)
    pub carried_package: Option<u32>,
    pub bonus_rings: Vec<BonusRing>,
    pub sticky_tiles: Vec<StickyTile>,
    pub conveyor_tiles: Vec<ConveyorTile>,

    /// Per-session hazards, created once at reset
    pub spikes: Vec<Spike>,
    pub gates: Vec<Gate>,

    /// Seconds since the last periodic ring spawn
    pub ring_spawn_timer: f32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session: hazards placed, first delivery run generated.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_left: SESSION_TIME,
            total_score: 0,
            completed_deliveries: 0,
            difficulty_level: 1,
            game_time: 0.0,
            player: Player::default(),
            combo: ComboState::default(),
            packages: Vec::new(),
            beacons: Vec::new(),
            current_beacon_index: 0,
            route_color: RouteColor::Blue,
            carried_package: None,
            bonus_rings: Vec::new(),
            sticky_tiles: Vec::new(),
            conveyor_tiles: Vec::new(),
            spikes: Vec::new(),
            gates: Vec::new(),
            ring_spawn_timer: 0.0,
            next_id: 1,
        };

        super::spawn::place_hazards(&mut state);
        super::spawn::start_new_run(&mut state);
        state
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether the player currently holds a package
    pub fn is_carrying_package(&self) -> bool {
        self.carried_package.is_some()
    }

    /// The carried package, if any
    pub fn carried_package(&self) -> Option<&Package> {
        let id = self.carried_package?;
        self.packages.iter().find(|p| p.id == id)
    }

    /// Whether the carried package matches the route color
    pub fn carrying_correct_package(&self) -> bool {
        self.carried_package().is_some_and(|p| p.is_correct)
    }

    /// The beacon the player must reach next, if the route is non-empty
    pub fn current_beacon(&self) -> Option<&Beacon> {
        self.beacons.get(self.current_beacon_index)
    }
}
