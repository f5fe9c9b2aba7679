//! Obstacle Director data structures: spawn instructions and difficulty tiers.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed numeric range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform draw over the closed range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// Boundary a single column is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

/// Obstacle shapes a tier can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Top,
    Bottom,
    Double,
}

impl ObstacleKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Double => "double",
        }
    }
}

/// What the host should materialize next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnInstruction {
    /// One column anchored to `edge`, `height` units tall.
    Single { edge: Edge, height: f64 },
    /// A column from each boundary, their near edges `gap_size` apart around `gap_center`.
    Double { gap_center: f64, gap_size: f64 },
}

impl SpawnInstruction {
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Self::Single {
                edge: Edge::Top, ..
            } => ObstacleKind::Top,
            Self::Single {
                edge: Edge::Bottom,
                ..
            } => ObstacleKind::Bottom,
            Self::Double { .. } => ObstacleKind::Double,
        }
    }
}

/// Discrete weights over {Top, Bottom, Double}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnWeights {
    pub top: u32,
    pub bottom: u32,
    pub double: u32,
}

impl SpawnWeights {
    pub const fn new(top: u32, bottom: u32, double: u32) -> Self {
        Self {
            top,
            bottom,
            double,
        }
    }

    /// Sum of the weights, widened so no combination of `u32` weights overflows.
    pub fn total(&self) -> u64 {
        self.top as u64 + self.bottom as u64 + self.double as u64
    }

    /// Probability of `kind` being chosen.
    pub fn probability(&self, kind: ObstacleKind) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weight = match kind {
            ObstacleKind::Top => self.top,
            ObstacleKind::Bottom => self.bottom,
            ObstacleKind::Double => self.double,
        };
        weight as f64 / total as f64
    }

    /// Weighted pick. Weights must not all be zero (checked by config validation).
    pub fn choose<R: Rng>(&self, rng: &mut R) -> ObstacleKind {
        let total = self.total();
        if total == 0 {
            return ObstacleKind::Bottom;
        }
        let roll = rng.gen_range(0..total);
        let double = self.double as u64;
        if roll < double {
            ObstacleKind::Double
        } else if roll < double + self.top as u64 {
            ObstacleKind::Top
        } else {
            ObstacleKind::Bottom
        }
    }
}

/// Spawn-policy parameters for one score band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTier {
    /// Lowest score this tier applies to; the tier holds until the next one's threshold.
    pub min_score: u32,
    pub weights: SpawnWeights,
    /// Opening between the two columns of a `Double` obstacle.
    pub gap_size: f64,
    /// Height range for `Single` columns.
    pub height: Span,
    /// Gap-center range for `Double` obstacles; `None` falls back to the field default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_center: Option<Span>,
}

/// The shipped difficulty curve.
pub fn default_tiers() -> Vec<DifficultyTier> {
    vec![
        DifficultyTier {
            min_score: 0,
            weights: SpawnWeights::new(1, 1, 0),
            gap_size: 170.0,
            height: Span::new(120.0, 220.0),
            gap_center: None,
        },
        DifficultyTier {
            min_score: 3,
            weights: SpawnWeights::new(1, 1, 1),
            gap_size: 160.0,
            height: Span::new(140.0, 260.0),
            gap_center: Some(Span::new(180.0, 380.0)),
        },
        DifficultyTier {
            min_score: 5,
            weights: SpawnWeights::new(1, 1, 2),
            gap_size: 155.0,
            height: Span::new(160.0, 310.0),
            gap_center: Some(Span::new(170.0, 390.0)),
        },
        DifficultyTier {
            min_score: 8,
            weights: SpawnWeights::new(1, 1, 4),
            gap_size: 148.0,
            height: Span::new(180.0, 360.0),
            gap_center: Some(Span::new(160.0, 400.0)),
        },
        DifficultyTier {
            min_score: 12,
            weights: SpawnWeights::new(1, 1, 5),
            gap_size: 138.0,
            height: Span::new(200.0, 410.0),
            gap_center: Some(Span::new(150.0, 410.0)),
        },
    ]
}
