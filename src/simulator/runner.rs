//! Plays sessions frame by frame against the headless host.
//!
//! Uses the same `Session` the real game drives, so the numbers reflect the
//! shipped spawn policy. Statistics are collected from session events.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::host::HeadlessHost;
use super::report::{RunStats, SimReport};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::director::ObstacleKind;
use crate::host::Host;
use crate::persistence::HighScoreStore;
use crate::session::{Session, SessionEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Keeps the pilot's noise independent of the spawn stream.
const PILOT_SEED_SALT: u64 = 0x5EED_F1A9;

/// Run the full simulation and return a report.
pub fn run_simulation<S: HighScoreStore>(
    config: &SimConfig,
    game: &GameConfig,
    store: &mut S,
) -> Result<SimReport, ConfigError> {
    game.validate()?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run_idx as u64);
        let stats = simulate_single_run(seed, config, game, store)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - seed {}, score {}, tier {}+, {:.1}s{}",
                run_idx + 1,
                config.num_runs,
                stats.seed,
                stats.score,
                stats.final_tier,
                (stats.frames * config.frame_ms) as f64 / 1000.0,
                if stats.timed_out { " (timeout)" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(all_runs, config.frame_ms))
}

/// Play one session to its game-over screen, or until the frame cap.
pub fn simulate_single_run<S: HighScoreStore>(
    seed: u64,
    config: &SimConfig,
    game: &GameConfig,
    store: &mut S,
) -> Result<RunStats, ConfigError> {
    let mut session = Session::new(game)?;
    let mut host = HeadlessHost::new(game);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pilot = Autopilot::new(seed ^ PILOT_SEED_SALT, config.pilot_jitter);
    let mut stats = RunStats {
        seed,
        ..Default::default()
    };

    let events = session.flap(&mut host, &mut rng);
    record(&mut stats, &events);

    let mut screen_shown = false;
    while stats.frames < config.max_frames {
        host.step(config.frame_ms);
        let events = session.frame(&mut host, store, &mut rng, config.frame_ms);
        stats.frames += 1;
        if record(&mut stats, &events) {
            screen_shown = true;
            break;
        }

        if session.run().is_playing()
            && pilot.wants_flap(host.player(), session.obstacles(), game)
        {
            let events = session.flap(&mut host, &mut rng);
            record(&mut stats, &events);
        }
    }

    if !screen_shown && session.run().is_playing() {
        stats.timed_out = true;
        if let Some(summary) = session.end(&mut host, store) {
            stats.new_high_score = summary.new_high_score;
        }
    }

    stats.score = session.score();
    stats.final_tier = session.current_tier().min_score;
    Ok(stats)
}

/// Fold events into `stats`. Returns true once the game-over screen is due.
fn record(stats: &mut RunStats, events: &[SessionEvent]) -> bool {
    let mut done = false;
    for event in events {
        match event {
            SessionEvent::Spawned { instruction, .. } => {
                stats.spawned += 1;
                if instruction.kind() == ObstacleKind::Double {
                    stats.double_spawns += 1;
                }
            }
            SessionEvent::Removed { .. } => stats.removed += 1,
            SessionEvent::Ended(summary) => stats.new_high_score = summary.new_high_score,
            SessionEvent::GameOverScreenDue(_) => done = true,
            SessionEvent::Started | SessionEvent::Scored { .. } => {}
        }
    }
    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryHighScoreStore;

    #[test]
    fn test_single_run_ends() {
        let game = GameConfig::default();
        let config = SimConfig::quick(1, 7);
        let mut store = MemoryHighScoreStore::new();
        let stats = simulate_single_run(7, &config, &game, &mut store).unwrap();
        assert!(stats.spawned >= 1);
        assert!(stats.frames > 0);
        assert!(stats.frames <= config.max_frames);
    }

    #[test]
    fn test_same_seed_same_run() {
        let game = GameConfig::default();
        let config = SimConfig::quick(1, 42);
        let a = simulate_single_run(42, &config, &game, &mut MemoryHighScoreStore::new()).unwrap();
        let b = simulate_single_run(42, &config, &game, &mut MemoryHighScoreStore::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_frame_cap_times_out() {
        let game = GameConfig::default();
        let config = SimConfig {
            max_frames: 10,
            ..SimConfig::quick(1, 3)
        };
        let mut store = MemoryHighScoreStore::new();
        let stats = simulate_single_run(3, &config, &game, &mut store).unwrap();
        assert!(stats.timed_out);
        assert_eq!(stats.frames, 10);
    }

    #[test]
    fn test_invalid_game_config_rejected() {
        let mut game = GameConfig::default();
        game.spawn.interval_ms = 0;
        let mut store = MemoryHighScoreStore::new();
        assert!(run_simulation(&SimConfig::quick(2, 1), &game, &mut store).is_err());
    }
}
