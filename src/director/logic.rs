//! Spawn policy: pick the next obstacle for the current score.

use super::types::{DifficultyTier, Edge, ObstacleKind, Span, SpawnInstruction};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use log::debug;
use rand::Rng;

/// Decides what obstacle comes next. Holds no run state; the score is passed in.
#[derive(Debug, Clone)]
pub struct ObstacleDirector {
    tiers: Vec<DifficultyTier>,
    first_height: Span,
    default_gap_center: Span,
}

impl ObstacleDirector {
    /// Build from a config, validating it first.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tiers: config.tiers.clone(),
            first_height: config.spawn.first_height,
            default_gap_center: config.spawn.gap_center,
        })
    }

    pub fn tiers(&self) -> &[DifficultyTier] {
        &self.tiers
    }

    /// Tier in force at `score`: the last one whose threshold has been reached.
    pub fn tier_for(&self, score: u32) -> &DifficultyTier {
        let index = self
            .tiers
            .partition_point(|t| t.min_score <= score)
            .saturating_sub(1);
        &self.tiers[index]
    }

    /// Gap-center range `tier` draws `Double` obstacles from.
    pub fn gap_center_range(&self, tier: &DifficultyTier) -> Span {
        tier.gap_center.unwrap_or(self.default_gap_center)
    }

    /// Next spawn for `score`.
    ///
    /// The first obstacle of a session is always a short bottom column so the
    /// player gets a fair opening regardless of the tier table.
    pub fn next_spawn<R: Rng>(
        &self,
        score: u32,
        first_obstacle: bool,
        rng: &mut R,
    ) -> SpawnInstruction {
        if first_obstacle {
            let height = self.first_height.sample(rng);
            debug!("first obstacle: forcing bottom column, height {height:.0}");
            return SpawnInstruction::Single {
                edge: Edge::Bottom,
                height,
            };
        }

        let tier = self.tier_for(score);
        let instruction = match tier.weights.choose(rng) {
            ObstacleKind::Top => SpawnInstruction::Single {
                edge: Edge::Top,
                height: tier.height.sample(rng),
            },
            ObstacleKind::Bottom => SpawnInstruction::Single {
                edge: Edge::Bottom,
                height: tier.height.sample(rng),
            },
            ObstacleKind::Double => SpawnInstruction::Double {
                gap_center: self.gap_center_range(tier).sample(rng),
                gap_size: tier.gap_size,
            },
        };

        debug!(
            "spawning {} obstacle at score {score} (tier {}+, gap {}, heights {}-{})",
            instruction.kind().name(),
            tier.min_score,
            tier.gap_size,
            tier.height.min,
            tier.height.max
        );
        instruction
    }
}
