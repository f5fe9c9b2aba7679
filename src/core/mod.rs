//! Configuration, tuning constants and startup errors.

pub mod config;
pub mod constants;
pub mod error;

pub use config::GameConfig;
pub use error::ConfigError;
