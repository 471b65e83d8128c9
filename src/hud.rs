//! HUD read-models
//!
//! Pure helpers the presentation layer uses to label the session: the medal
//! grade for the remaining time and the heading arrow toward the current
//! beacon. Nothing here mutates state.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Medal grade awarded for the time remaining on the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    None,
}

impl Medal {
    /// Grade for a remaining-time value in seconds.
    pub fn for_time_left(time_left: f32) -> Self {
        if time_left >= 120.0 {
            Medal::Gold
        } else if time_left >= 60.0 {
            Medal::Silver
        } else if time_left >= 1.0 {
            Medal::Bronze
        } else {
            Medal::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "GOLD",
            Medal::Silver => "SILVER",
            Medal::Bronze => "BRONZE",
            Medal::None => "NO MEDAL",
        }
    }
}

/// Signed angle in degrees from the player's facing direction to the
/// current target beacon, for the HUD direction arrow. `None` when the
/// route is exhausted.
pub fn beacon_arrow_angle(state: &GameState) -> Option<f32> {
    let beacon = state.current_beacon()?;
    let dx = beacon.pos.x - state.player.pos.x;
    let dz = beacon.pos.z - state.player.pos.z;
    let world_deg = dx.atan2(dz).to_degrees();
    Some(world_deg - state.player.facing_deg)
}
