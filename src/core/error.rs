use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected game configuration. Raised at startup, before any session exists.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: String, value: f64 },
    #[error("{field} range is inverted ({min} > {max})")]
    InvertedRange { field: String, min: f64, max: f64 },
    #[error("no difficulty tiers configured")]
    NoTiers,
    #[error("the first difficulty tier must start at score 0 (starts at {0})")]
    FirstTierStart(u32),
    #[error("tier thresholds must strictly ascend ({previous} then {next})")]
    TiersOutOfOrder { previous: u32, next: u32 },
    #[error("tier {min_score}+ has no obstacle kind with a positive weight")]
    EmptyDistribution { min_score: u32 },
    #[error("tier {min_score}+ is easier than the tier before it: {reason}")]
    DifficultyRegression {
        min_score: u32,
        reason: &'static str,
    },
    #[error("tier {min_score}+ weights sum to {total}, which does not fit in a u32")]
    WeightOverflow { min_score: u32, total: u64 },
    #[error("spawn.spawn_x ({spawn_x}) must be at least the field width ({width}) so gates enter off-screen")]
    SpawnInsideField { spawn_x: f64, width: f64 },
    #[error("{field} leaves less than {min_clearance} units of clearance")]
    InsufficientClearance { field: String, min_clearance: f64 },
    #[error("{field} would place part of the gap off the play field")]
    GapOffField { field: String },
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
