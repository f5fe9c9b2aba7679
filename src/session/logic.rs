//! One play session: start on the first flap, spawn on a timer, score and
//! clean up every frame, end exactly once.

use super::scheduler::{ScheduledTask, Scheduler, TaskId};
use super::types::{GameOverSummary, RunState, SessionEvent, SessionPhase};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::director::{DifficultyTier, ObstacleDirector};
use crate::host::Host;
use crate::obstacles::{build_gate, score_and_cleanup, segment_layout, Obstacle, ObstacleId};
use crate::persistence::HighScoreStore;
use log::{info, trace};
use rand::Rng;

/// A single play attempt. Once over it stays over; play again with a new `Session`.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    director: ObstacleDirector,
    run: RunState,
    obstacles: Vec<Obstacle>,
    scheduler: Scheduler,
    spawn_task: Option<TaskId>,
    next_obstacle_id: u64,
    paused: bool,
    summary: Option<GameOverSummary>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let director = ObstacleDirector::new(config)?;
        Ok(Self {
            config: config.clone(),
            director,
            run: RunState::new(),
            obstacles: Vec::new(),
            scheduler: Scheduler::new(),
            spawn_task: None,
            next_obstacle_id: 0,
            paused: false,
            summary: None,
        })
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn score(&self) -> u32 {
        self.run.score()
    }

    pub fn phase(&self) -> SessionPhase {
        self.run.phase()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn director(&self) -> &ObstacleDirector {
        &self.director
    }

    /// Tier in force for the next spawn.
    pub fn current_tier(&self) -> &DifficultyTier {
        self.director.tier_for(self.run.score())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the repeating spawn timer is armed.
    pub fn spawn_timer_active(&self) -> bool {
        self.spawn_task
            .is_some_and(|id| self.scheduler.is_scheduled(id))
    }

    pub fn summary(&self) -> Option<GameOverSummary> {
        self.summary
    }

    /// Player action. The first one starts the run: gravity comes on, the
    /// spawn timer is armed and a gate spawns immediately.
    pub fn flap<H: Host, R: Rng>(&mut self, host: &mut H, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.run.over() || self.paused {
            return events;
        }

        if self.run.start() {
            info!("session started");
            host.enable_gravity(self.config.physics.gravity);
            self.spawn_task = Some(
                self.scheduler
                    .every(self.config.spawn.interval_ms, ScheduledTask::SpawnObstacle),
            );
            events.push(SessionEvent::Started);
            events.extend(self.fire(ScheduledTask::SpawnObstacle, host, rng));
        }

        host.apply_flap(-self.config.physics.flap_impulse);
        events
    }

    /// Run one scheduled task.
    ///
    /// Spawns only happen while playing, so a timer callback that outlives the
    /// run does nothing.
    pub fn fire<H: Host, R: Rng>(
        &mut self,
        task: ScheduledTask,
        host: &mut H,
        rng: &mut R,
    ) -> Option<SessionEvent> {
        match task {
            ScheduledTask::SpawnObstacle => {
                if !self.run.is_playing() {
                    trace!("ignoring spawn callback in {:?}", self.run.phase());
                    return None;
                }
                Some(self.spawn(host, rng))
            }
            ScheduledTask::ShowGameOver => self.summary.map(SessionEvent::GameOverScreenDue),
        }
    }

    /// Advance the session by `dt_ms`.
    ///
    /// Order per frame: due timers, obstacle scroll, termination checks,
    /// then scoring and cleanup. A paused session does nothing.
    pub fn frame<H: Host, S: HighScoreStore, R: Rng>(
        &mut self,
        host: &mut H,
        store: &mut S,
        rng: &mut R,
        dt_ms: u64,
    ) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.paused {
            return events;
        }

        for (_, task) in self.scheduler.advance(dt_ms) {
            events.extend(self.fire(task, host, rng));
        }

        if !self.run.is_playing() {
            return events;
        }

        let dx = self.config.physics.scroll_speed * dt_ms as f64 / 1000.0;
        for obstacle in &mut self.obstacles {
            obstacle.x -= dx;
        }

        let player = host.player();
        let ground_top = self.config.field.ground_top();
        if host.overlaps_any(&self.obstacles) || player.y >= ground_top || player.y <= 0.0 {
            if let Some(summary) = self.end(host, store) {
                events.push(SessionEvent::Ended(summary));
            }
            return events;
        }

        let report = score_and_cleanup(
            &mut self.run,
            &mut self.obstacles,
            player.x,
            self.config.spawn.offscreen_x,
        );
        // Scores are awarded in order, so the i-th scored gate took the score to base + i + 1.
        let base = self.run.score() - report.scored.len() as u32;
        for (i, id) in report.scored.into_iter().enumerate() {
            events.push(SessionEvent::Scored {
                id,
                score: base + i as u32 + 1,
            });
        }
        for id in report.removed {
            host.remove(id);
            events.push(SessionEvent::Removed { id });
        }

        events
    }

    /// `Playing -> Over`. Cancels spawning, settles the high score and
    /// schedules the game-over screen. Returns `None` if not playing.
    pub fn end<H: Host, S: HighScoreStore>(
        &mut self,
        host: &mut H,
        store: &mut S,
    ) -> Option<GameOverSummary> {
        if !self.run.finish() {
            return None;
        }
        self.paused = false;
        if let Some(id) = self.spawn_task.take() {
            self.scheduler.cancel(id);
        }
        host.freeze_player();

        let score = self.run.score();
        let new_high_score = store.set_high_score(score);
        let summary = GameOverSummary {
            score,
            high_score: store.high_score(),
            new_high_score,
        };
        self.summary = Some(summary);
        self.scheduler.after(
            self.config.timing.game_over_delay_ms,
            ScheduledTask::ShowGameOver,
        );

        info!(
            "session over: score {score}, best {}{}",
            summary.high_score,
            if new_high_score { " (new!)" } else { "" }
        );
        Some(summary)
    }

    /// Freeze the run. Only a live run can pause.
    pub fn pause(&mut self) -> bool {
        if !self.run.is_playing() || self.paused {
            return false;
        }
        self.paused = true;
        info!("session paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        info!("session resumed");
        true
    }

    fn spawn<H: Host, R: Rng>(&mut self, host: &mut H, rng: &mut R) -> SessionEvent {
        let first_obstacle = self.run.score() == 0 && self.obstacles.is_empty();
        let instruction = self
            .director
            .next_spawn(self.run.score(), first_obstacle, rng);

        let id = ObstacleId(self.next_obstacle_id);
        self.next_obstacle_id += 1;

        let obstacle = build_gate(
            id,
            &instruction,
            self.config.spawn.spawn_x,
            self.config.field.ground_top(),
        );
        let segments = segment_layout(&obstacle, self.config.spawn.segment_size);
        host.materialize(&obstacle, &segments);
        self.obstacles.push(obstacle);

        SessionEvent::Spawned { id, instruction }
    }
}
