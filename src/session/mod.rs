//! Play sessions.
//!
//! A session moves `Ready -> Playing -> Over` and never leaves `Over`. It owns
//! the score, the live gates and the timers, and talks to the engine only
//! through the `Host` trait.

pub mod logic;
pub mod scheduler;
pub mod types;

pub use logic::*;
pub use scheduler::{ScheduledTask, Scheduler, TaskId};
pub use types::*;
