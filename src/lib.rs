//! Treehop - obstacle director and session core for a flap-to-dodge arcade game.
//!
//! The engine (rendering, physics, input) stays outside this crate behind the
//! `Host` trait. What lives here is the spawn policy, scoring, the session
//! state machine and its timers, and high score persistence.

pub mod core;
pub mod director;
pub mod host;
pub mod obstacles;
pub mod persistence;
pub mod session;
pub mod simulator;

pub use crate::core::{ConfigError, GameConfig};
pub use director::{DifficultyTier, Edge, ObstacleDirector, SpawnInstruction};
pub use host::{Host, PlayerProbe};
pub use obstacles::{Obstacle, ObstacleId};
pub use persistence::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};
pub use session::{GameOverSummary, RunState, Session, SessionEvent, SessionPhase};
