//! Minimal engine stand-in: point-mass player physics and box overlap tests.

use crate::core::config::GameConfig;
use crate::host::{Host, PlayerProbe};
use crate::obstacles::{Obstacle, ObstacleId, Segment};
use std::collections::HashMap;

/// Axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Aabb {
    cx: f64,
    cy: f64,
    half_w: f64,
    half_h: f64,
}

impl Aabb {
    fn square(cx: f64, cy: f64, size: f64) -> Self {
        Self {
            cx,
            cy,
            half_w: size / 2.0,
            half_h: size / 2.0,
        }
    }

    fn overlaps(&self, other: &Aabb) -> bool {
        (self.cx - other.cx).abs() < self.half_w + other.half_w
            && (self.cy - other.cy).abs() < self.half_h + other.half_h
    }
}

/// Headless host used by the simulator and integration tests.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    x: f64,
    y: f64,
    velocity: f64,
    gravity: f64,
    frozen: bool,
    player_hitbox: f64,
    segment_hitbox: f64,
    bodies: HashMap<ObstacleId, Vec<Segment>>,
    pub materialized: u64,
    pub removed: u64,
}

impl HeadlessHost {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player.x,
            y: config.player.start_y,
            velocity: 0.0,
            gravity: 0.0,
            frozen: false,
            player_hitbox: config.player.hitbox,
            segment_hitbox: config.spawn.segment_hitbox,
            bodies: HashMap::new(),
            materialized: 0,
            removed: 0,
        }
    }

    /// Integrate player motion over `dt_ms` (semi-implicit Euler).
    pub fn step(&mut self, dt_ms: u64) {
        if self.frozen {
            return;
        }
        let dt = dt_ms as f64 / 1000.0;
        self.velocity += self.gravity * dt;
        self.y += self.velocity * dt;
    }

    /// Gates the host currently holds bodies for.
    pub fn live_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Move the player directly, for scripted scenarios.
    pub fn place_player(&mut self, y: f64, velocity: f64) {
        self.y = y;
        self.velocity = velocity;
    }
}

impl Host for HeadlessHost {
    fn materialize(&mut self, obstacle: &Obstacle, segments: &[Segment]) {
        self.bodies.insert(obstacle.id, segments.to_vec());
        self.materialized += 1;
    }

    fn remove(&mut self, id: ObstacleId) {
        if self.bodies.remove(&id).is_some() {
            self.removed += 1;
        }
    }

    fn player(&self) -> PlayerProbe {
        PlayerProbe {
            x: self.x,
            y: self.y,
            vertical_velocity: self.velocity,
        }
    }

    fn overlaps_any(&self, obstacles: &[Obstacle]) -> bool {
        let player = Aabb::square(self.x, self.y, self.player_hitbox);
        obstacles.iter().any(|obstacle| {
            self.bodies.get(&obstacle.id).is_some_and(|segments| {
                segments.iter().any(|segment| {
                    player.overlaps(&Aabb::square(
                        obstacle.x,
                        segment.center_y,
                        self.segment_hitbox,
                    ))
                })
            })
        })
    }

    fn enable_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    fn apply_flap(&mut self, velocity: f64) {
        if !self.frozen {
            self.velocity = velocity;
        }
    }

    fn freeze_player(&mut self) {
        self.frozen = true;
        self.velocity = 0.0;
        self.gravity = 0.0;
    }
}
