//! The engine a session runs inside.
//!
//! Rendering, physics integration and overlap testing belong to the host. A
//! session only asks it to materialize or remove gates, to move the player,
//! and to report where the player is.

use crate::obstacles::{Obstacle, ObstacleId, Segment};

/// Snapshot of the player entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerProbe {
    pub x: f64,
    pub y: f64,
    /// Positive is downward.
    pub vertical_velocity: f64,
}

impl PlayerProbe {
    pub fn falling(&self) -> bool {
        self.vertical_velocity > 0.0
    }
}

pub trait Host {
    /// Create the visual/physical body for a freshly spawned gate.
    fn materialize(&mut self, obstacle: &Obstacle, segments: &[Segment]);

    /// Destroy a gate's body.
    fn remove(&mut self, id: ObstacleId);

    fn player(&self) -> PlayerProbe;

    /// Whether the player overlaps any of `obstacles` at their current positions.
    fn overlaps_any(&self, obstacles: &[Obstacle]) -> bool;

    /// Switch on gravity for the player (it floats until the first flap).
    fn enable_gravity(&mut self, gravity: f64);

    /// Set the player's vertical velocity to `velocity` (negative is upward).
    fn apply_flap(&mut self, velocity: f64);

    /// Stop all player motion at game over.
    fn freeze_player(&mut self);
}
