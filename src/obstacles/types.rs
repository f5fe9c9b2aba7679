//! Obstacle (gate) data structures.

use crate::director::Edge;

/// Identifies one gate for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub u64);

/// One solid column spanning `[top, bottom]` (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub edge: Edge,
    pub top: f64,
    pub bottom: f64,
}

impl Column {
    pub fn extent(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A scoring opportunity: one or two columns sharing a single `scored` flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    /// Horizontal position of the gate.
    pub x: f64,
    /// Columns in spawn order; the first one leads for scoring purposes.
    pub columns: Vec<Column>,
    /// Set once the player has passed the gate.
    pub scored: bool,
    /// Traversable span `(top, bottom)` left open by the columns.
    pub opening: (f64, f64),
}

impl Obstacle {
    /// `(top, bottom)` covered by the columns taken together.
    pub fn vertical_extent(&self) -> (f64, f64) {
        let top = self
            .columns
            .iter()
            .map(|c| c.top)
            .fold(f64::INFINITY, f64::min);
        let bottom = self
            .columns
            .iter()
            .map(|c| c.bottom)
            .fold(f64::NEG_INFINITY, f64::max);
        (top, bottom)
    }

    /// Height of the traversable opening.
    pub fn clearance(&self) -> f64 {
        self.opening.1 - self.opening.0
    }
}

/// Fixed-size piece of a column, as a host that draws columns from tiles sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index of the owning column within `Obstacle::columns`.
    pub column: usize,
    pub center_y: f64,
    /// Only the first segment of the leading column carries the gate's scoring flag.
    pub carries_score: bool,
}

/// Outcome of one scoring/cleanup pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanupReport {
    /// Gates newly marked as scored this pass.
    pub scored: Vec<ObstacleId>,
    /// Gates past the offscreen threshold, already dropped from the collection.
    pub removed: Vec<ObstacleId>,
}
