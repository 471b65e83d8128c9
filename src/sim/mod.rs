//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic with respect to the outside world:
//! - Seeded RNG only
//! - One sequential update pipeline per frame, in a fixed order
//! - No rendering or platform dependencies
//!
//! Presentation reads the resulting state between frames; it never mutates.

pub mod hazards;
pub mod interact;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use state::{
    Beacon, BeaconKind, BonusRing, ComboState, ConveyorDirection, ConveyorTile, GamePhase,
    GameState, Gate, GateOrientation, Package, Player, RouteColor, Spike, StickyTile,
};
pub use tick::{FrameClock, TickInput, tick};
