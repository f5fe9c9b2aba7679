//! Session data structures: run state machine and the events a frame reports.

use crate::director::SpawnInstruction;
use crate::obstacles::ObstacleId;

/// Lifecycle of one play attempt. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Playing,
    Over,
}

/// Score plus lifecycle phase for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    score: u32,
    phase: SessionPhase,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    pub fn new() -> Self {
        Self {
            score: 0,
            phase: SessionPhase::Ready,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != SessionPhase::Ready
    }

    pub fn over(&self) -> bool {
        self.phase == SessionPhase::Over
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    /// `Ready -> Playing`. Returns false if the run had already started.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Ready {
            return false;
        }
        self.phase = SessionPhase::Playing;
        true
    }

    /// Add one point. Only counts while playing.
    pub fn award_point(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.score += 1;
        true
    }

    /// `Playing -> Over`, at most once per session.
    pub fn finish(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.phase = SessionPhase::Over;
        true
    }
}

/// Final result of a session, after the high score has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    /// Stored high score after this session was recorded.
    pub high_score: u32,
    pub new_high_score: bool,
}

/// What happened during a session call, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// First flap: the run is live and spawning has begun.
    Started,
    Spawned {
        id: ObstacleId,
        instruction: SpawnInstruction,
    },
    Scored {
        id: ObstacleId,
        score: u32,
    },
    Removed {
        id: ObstacleId,
    },
    Ended(GameOverSummary),
    /// The post-game delay elapsed; the host can show its game-over screen.
    GameOverScreenDue(GameOverSummary),
}
