//! Simulation configuration.

use crate::core::constants::FRAME_MS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frame cap per session before it is cut off as a timeout
    pub max_frames: u64,

    /// Simulated frame length in milliseconds
    pub frame_ms: u64,

    /// Autopilot aim noise in field units (higher = sloppier flying)
    pub pilot_jitter: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_frames: 60 * 60 * 10, // ten minutes at 60 fps
            frame_ms: FRAME_MS,
            pilot_jitter: 12.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for tests and quick checks.
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            max_frames: 60 * 60 * 2,
            verbosity: 0,
            ..Default::default()
        }
    }
}
