//! Game configuration: field geometry, physics, spawn cadence and the tier table.
//!
//! Every section defaults to the shipped tuning, so a JSON file only needs to
//! name the values it overrides. Nothing downstream accepts an unvalidated config.

use super::constants::*;
use super::error::ConfigError;
use crate::director::{default_tiers, DifficultyTier, Span};
use crate::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
    pub ground_height: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl FieldConfig {
    /// Bottom boundary of the playable area (y grows downward).
    pub fn ground_top(&self) -> f64 {
        self.height - self.ground_height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration applied to the player once the run starts.
    pub gravity: f64,
    /// Magnitude of the upward velocity a flap sets.
    pub flap_impulse: f64,
    /// Leftward obstacle speed.
    pub scroll_speed: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f64,
    pub start_y: f64,
    pub hitbox: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            start_y: PLAYER_START_Y,
            hitbox: PLAYER_HITBOX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub interval_ms: u64,
    pub spawn_x: f64,
    pub offscreen_x: f64,
    pub segment_size: f64,
    pub segment_hitbox: f64,
    pub min_clearance: f64,
    /// Height range of the forced first column.
    pub first_height: Span,
    /// Gap-center range for tiers without their own.
    pub gap_center: Span,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_ms: SPAWN_INTERVAL_MS,
            spawn_x: SPAWN_X,
            offscreen_x: OFFSCREEN_X,
            segment_size: SEGMENT_SIZE,
            segment_hitbox: SEGMENT_HITBOX,
            min_clearance: MIN_CLEARANCE,
            first_height: Span::new(FIRST_HEIGHT_MIN, FIRST_HEIGHT_MAX),
            gap_center: Span::new(GAP_CENTER_MIN, GAP_CENTER_MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub game_over_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            game_over_delay_ms: GAME_OVER_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub spawn: SpawnConfig,
    pub timing: TimingConfig,
    pub tiers: Vec<DifficultyTier>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            spawn: SpawnConfig::default(),
            timing: TimingConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate config JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: Default::default(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// `~/.treehop/config.json` when it exists, the built-in tuning otherwise.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match persistence::save_path(CONFIG_FILE) {
            Ok(path) if path.exists() => Self::load(&path),
            _ => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Gap-center range a tier actually draws from.
    pub fn gap_center_for(&self, tier: &DifficultyTier) -> Span {
        tier.gap_center.unwrap_or(self.spawn.gap_center)
    }

    /// Reject geometry the director could not honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field.width", self.field.width)?;
        positive("field.height", self.field.height)?;
        if self.field.ground_height < 0.0 {
            return Err(non_positive("field.ground_height", self.field.ground_height));
        }
        let ground_top = self.field.ground_top();
        positive("field.height - field.ground_height", ground_top)?;

        positive("physics.gravity", self.physics.gravity)?;
        positive("physics.flap_impulse", self.physics.flap_impulse)?;
        positive("physics.scroll_speed", self.physics.scroll_speed)?;
        positive("player.hitbox", self.player.hitbox)?;

        positive("spawn.interval_ms", self.spawn.interval_ms as f64)?;
        positive("spawn.segment_size", self.spawn.segment_size)?;
        positive("spawn.segment_hitbox", self.spawn.segment_hitbox)?;
        positive("spawn.min_clearance", self.spawn.min_clearance)?;
        if self.spawn.spawn_x < self.field.width {
            return Err(ConfigError::SpawnInsideField {
                spawn_x: self.spawn.spawn_x,
                width: self.field.width,
            });
        }

        let clearance = self.spawn.min_clearance;
        self.check_heights("spawn.first_height", self.spawn.first_height)?;
        ordered("spawn.gap_center", self.spawn.gap_center)?;

        let first = self.tiers.first().ok_or(ConfigError::NoTiers)?;
        if first.min_score != 0 {
            return Err(ConfigError::FirstTierStart(first.min_score));
        }

        for (index, tier) in self.tiers.iter().enumerate() {
            let label = format!("tiers[{index}]");
            let total = tier.weights.total();
            if total == 0 {
                return Err(ConfigError::EmptyDistribution {
                    min_score: tier.min_score,
                });
            }
            if total > u32::MAX as u64 {
                return Err(ConfigError::WeightOverflow {
                    min_score: tier.min_score,
                    total,
                });
            }
            positive(&format!("{label}.gap_size"), tier.gap_size)?;
            if tier.gap_size < clearance {
                return Err(ConfigError::InsufficientClearance {
                    field: format!("{label}.gap_size"),
                    min_clearance: clearance,
                });
            }
            self.check_heights(&format!("{label}.height"), tier.height)?;

            let centers = self.gap_center_for(tier);
            ordered(&format!("{label}.gap_center"), centers)?;
            let half = tier.gap_size / 2.0;
            if centers.min - half < 0.0 || centers.max + half > ground_top {
                return Err(ConfigError::GapOffField {
                    field: format!("{label}.gap_center"),
                });
            }
        }

        for pair in self.tiers.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.min_score <= prev.min_score {
                return Err(ConfigError::TiersOutOfOrder {
                    previous: prev.min_score,
                    next: next.min_score,
                });
            }
            if next.gap_size > prev.gap_size {
                return Err(ConfigError::DifficultyRegression {
                    min_score: next.min_score,
                    reason: "gap size grows",
                });
            }
            if next.height.min < prev.height.min || next.height.max < prev.height.max {
                return Err(ConfigError::DifficultyRegression {
                    min_score: next.min_score,
                    reason: "height bounds shrink",
                });
            }
        }

        Ok(())
    }

    fn check_heights(&self, field: &str, span: Span) -> Result<(), ConfigError> {
        ordered(field, span)?;
        positive(&format!("{field}.min"), span.min)?;
        if span.max > self.field.ground_top() - self.spawn.min_clearance {
            return Err(ConfigError::InsufficientClearance {
                field: format!("{field}.max"),
                min_clearance: self.spawn.min_clearance,
            });
        }
        Ok(())
    }
}

fn non_positive(field: &str, value: f64) -> ConfigError {
    ConfigError::NonPositive {
        field: field.to_string(),
        value,
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(non_positive(field, value))
    }
}

fn ordered(field: &str, span: Span) -> Result<(), ConfigError> {
    if span.is_inverted() {
        return Err(ConfigError::InvertedRange {
            field: field.to_string(),
            min: span.min,
            max: span.max,
        });
    }
    Ok(())
}
