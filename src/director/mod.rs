//! Obstacle Director.
//!
//! Chooses the next obstacle from the current score: a forced short bottom
//! column to open the session, then a weighted pick from the score tier.
//! Difficulty never eases as the score climbs.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
