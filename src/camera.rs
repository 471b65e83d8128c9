//! Camera targeting
//!
//! Two modes: a fixed camera orbiting the arena center, and a smoothed
//! over-the-shoulder follow camera. Target computation is a pure function
//! of the player pose; the rig only owns the smoothing state and the
//! user-adjustable offsets. The rig belongs to the presentation layer and
//! never feeds back into the simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::Player;

/// Eye and look-at points handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub eye: Vec3,
    pub center: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CameraMode {
    /// Orbiting the arena center, looking at the origin
    #[default]
    Fixed,
    /// Over-the-shoulder follow camera with smoothing
    Follow,
}

/// Follow-camera offsets relative to the player pose.
const FOLLOW_BACK: f32 = 66.0;
const FOLLOW_LOOK_AHEAD: f32 = 42.0;
const DEFAULT_FOLLOW_UP: f32 = 30.0;
const DEFAULT_FOLLOW_SIDE: f32 = 9.0;
/// Fraction of the new target blended in per frame
const FOLLOW_SMOOTHING: f32 = 0.2;

/// Pure follow-camera targets for a player pose: eye behind and above the
/// shoulder, look-at ahead of the player along its heading.
pub fn follow_targets(player: &Player, up: f32, side: f32) -> CameraTarget {
    let fwd = player.heading();
    // Right-hand vector on the ground plane
    let (rt_x, rt_z) = (fwd.y, -fwd.x);

    let eye = Vec3::new(
        player.pos.x - fwd.x * FOLLOW_BACK + rt_x * side,
        player.pos.y + up,
        player.pos.z - fwd.y * FOLLOW_BACK + rt_z * side,
    );
    let center = Vec3::new(
        player.pos.x + fwd.x * FOLLOW_LOOK_AHEAD,
        player.pos.y + up * 0.3,
        player.pos.z + fwd.y * FOLLOW_LOOK_AHEAD,
    );
    CameraTarget { eye, center }
}

/// Presentation-side camera rig: mode, adjustable offsets, smoothing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRig {
    pub mode: CameraMode,
    /// Fixed camera orbit around the arena center
    pub orbit_radius: f32,
    pub orbit_angle_deg: f32,
    pub orbit_height: f32,
    /// Follow camera adjustable offsets (shoulder peek, height)
    pub follow_up: f32,
    pub follow_side: f32,
    /// Smoothed follow-camera state
    follow_eye: Vec3,
    follow_center: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Fixed,
            orbit_radius: 600.0,
            orbit_angle_deg: 0.0,
            orbit_height: 500.0,
            follow_up: DEFAULT_FOLLOW_UP,
            follow_side: DEFAULT_FOLLOW_SIDE,
            follow_eye: Vec3::ZERO,
            follow_center: Vec3::ZERO,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle between fixed and follow mode. Entering follow snaps the
    /// smoothing state onto the current target so the camera doesn't sweep
    /// across the arena.
    pub fn toggle_mode(&mut self, player: &Player) {
        self.mode = match self.mode {
            CameraMode::Fixed => {
                let target = follow_targets(player, self.follow_up, self.follow_side);
                self.follow_eye = target.eye;
                self.follow_center = target.center;
                CameraMode::Follow
            }
            CameraMode::Follow => CameraMode::Fixed,
        };
    }

    /// Nudge the fixed camera height, clamped to a sane range.
    pub fn adjust_height(&mut self, delta: f32) {
        self.orbit_height = (self.orbit_height + delta).clamp(60.0, 1500.0);
    }

    /// Orbit the fixed camera around the arena center.
    pub fn adjust_orbit(&mut self, delta_deg: f32) {
        self.orbit_angle_deg += delta_deg;
    }

    /// Nudge the follow camera up/down, clamped.
    pub fn adjust_follow_up(&mut self, delta: f32) {
        self.follow_up = (self.follow_up + delta).clamp(10.0, 120.0);
    }

    /// Shoulder peek left/right, clamped.
    pub fn adjust_follow_side(&mut self, delta: f32) {
        self.follow_side = (self.follow_side + delta).clamp(-50.0, 50.0);
    }

    /// Compute this frame's eye/look-at pair. In follow mode the smoothed
    /// state is advanced toward the pure target.
    pub fn update(&mut self, player: &Player) -> CameraTarget {
        match self.mode {
            CameraMode::Fixed => {
                let rad = self.orbit_angle_deg.to_radians();
                CameraTarget {
                    eye: Vec3::new(
                        self.orbit_radius * rad.sin(),
                        self.orbit_height,
                        self.orbit_radius * rad.cos(),
                    ),
                    center: Vec3::ZERO,
                }
            }
            CameraMode::Follow => {
                let target = follow_targets(player, self.follow_up, self.follow_side);
                self.follow_eye = self.follow_eye.lerp(target.eye, FOLLOW_SMOOTHING);
                self.follow_center = self.follow_center.lerp(target.center, FOLLOW_SMOOTHING);
                CameraTarget {
                    eye: self.follow_eye,
                    center: self.follow_center,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_GROUND_Y;

    fn player_at_origin() -> Player {
        Player {
            pos: Vec3::new(0.0, PLAYER_GROUND_Y, 0.0),
            facing_deg: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_follow_targets_sit_behind_and_ahead() {
        let player = player_at_origin(); // heading = +z
        let target = follow_targets(&player, DEFAULT_FOLLOW_UP, 0.0);

        assert!((target.eye.z - (-FOLLOW_BACK)).abs() < 1e-3);
        assert!((target.eye.y - (PLAYER_GROUND_Y + DEFAULT_FOLLOW_UP)).abs() < 1e-3);
        assert!((target.center.z - FOLLOW_LOOK_AHEAD).abs() < 1e-3);
    }

    #[test]
    fn test_follow_targets_are_pure() {
        let player = player_at_origin();
        let a = follow_targets(&player, 30.0, 9.0);
        let b = follow_targets(&player, 30.0, 9.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_toggle_snaps_smoothing_state() {
        let player = player_at_origin();
        let mut rig = CameraRig::new();
        rig.toggle_mode(&player);
        assert_eq!(rig.mode, CameraMode::Follow);

        // First update after the toggle already sits on the target
        let target = follow_targets(&player, rig.follow_up, rig.follow_side);
        let frame = rig.update(&player);
        assert!((frame.eye - target.eye).length() < 1e-3);
    }

    #[test]
    fn test_fixed_orbit_respects_clamps() {
        let player = player_at_origin();
        let mut rig = CameraRig::new();
        rig.adjust_height(-10_000.0);
        assert_eq!(rig.orbit_height, 60.0);
        rig.adjust_height(10_000.0);
        assert_eq!(rig.orbit_height, 1500.0);

        rig.adjust_orbit(90.0);
        let frame = rig.update(&player);
        assert!((frame.eye.x - rig.orbit_radius).abs() < 1e-2);
        assert_eq!(frame.center, Vec3::ZERO);
    }

    #[test]
    fn test_follow_smoothing_converges() {
        let mut player = player_at_origin();
        let mut rig = CameraRig::new();
        rig.toggle_mode(&player);

        // Move the player; the smoothed eye approaches the new target
        player.pos.x = 100.0;
        let target = follow_targets(&player, rig.follow_up, rig.follow_side);
        let mut dist = f32::MAX;
        for _ in 0..60 {
            let frame = rig.update(&player);
            let next = (frame.eye - target.eye).length();
            assert!(next <= dist);
            dist = next;
        }
        assert!(dist < 1.0);
    }
}
