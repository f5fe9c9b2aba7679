//! Scripted player for headless runs.

use crate::core::config::GameConfig;
use crate::host::PlayerProbe;
use crate::obstacles::Obstacle;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flaps whenever the player sinks below the middle of the next opening.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: ChaCha8Rng,
    jitter: f64,
}

impl Autopilot {
    pub fn new(seed: u64, jitter: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            jitter: if jitter.is_finite() { jitter.max(0.0) } else { 0.0 },
        }
    }

    /// Height the pilot is steering toward: the center of the nearest opening
    /// not yet behind the player, or mid-field when nothing is ahead.
    pub fn target_y(player: &PlayerProbe, obstacles: &[Obstacle], config: &GameConfig) -> f64 {
        let reach = (config.player.hitbox + config.spawn.segment_hitbox) / 2.0;
        obstacles
            .iter()
            .filter(|o| o.x + reach >= player.x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .map(|o| (o.opening.0 + o.opening.1) / 2.0)
            .unwrap_or(config.field.ground_top() / 2.0)
    }

    pub fn wants_flap(
        &mut self,
        player: PlayerProbe,
        obstacles: &[Obstacle],
        config: &GameConfig,
    ) -> bool {
        if player.vertical_velocity < 0.0 {
            return false;
        }
        let noise = if self.jitter > 0.0 {
            self.rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };
        player.y > Self::target_y(&player, obstacles, config) + noise
    }
}
