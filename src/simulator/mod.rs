//! Headless simulator for tuning the difficulty curve.
//!
//! Plays many seeded sessions with a scripted pilot to check:
//! - How far a steady player gets before the gaps close in
//! - How often each tier is reached
//! - Whether every spawned gate is eventually cleaned up
//!
//! The runner drives the real `Session`, with `HeadlessHost` standing in
//! for the engine.

mod autopilot;
mod config;
mod host;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use host::HeadlessHost;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
