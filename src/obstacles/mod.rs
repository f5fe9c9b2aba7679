//! Obstacles ("gates"): geometry built from spawn instructions, tiling for
//! hosts that draw columns from fixed-size pieces, and the per-frame pass that
//! scores passed gates and drops the ones that have left the screen.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
