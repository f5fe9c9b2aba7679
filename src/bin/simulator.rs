//! Treehop Headless Difficulty Simulator
//!
//! Plays seeded sessions with a scripted pilot and reports how far it gets.
//! Uses the exact same `Session` and spawn policy as the game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Sessions to play (default: 100)
//!   --seed N        RNG seed for the first session (default: 42)
//!   --frames N      Frame cap per session (default: 36000 = 10 minutes)
//!   --jitter N      Autopilot aim noise (default: 12)
//!   --config FILE   Game config JSON (default: built-in tuning)
//!   --record        Save new high scores to ~/.treehop/
//!   --verbose       One line per session
//!   --quiet         Only final summary line

use std::path::PathBuf;
use std::str::FromStr;
use treehop::simulator::{run_simulation, SimConfig};
use treehop::{GameConfig, JsonHighScoreStore, MemoryHighScoreStore};

struct CliConfig {
    sim: SimConfig,
    config_path: Option<PathBuf>,
    record: bool,
    verbose: bool,
    quiet: bool,
}

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig {
        sim: SimConfig {
            seed: Some(42),
            ..SimConfig::default()
        },
        config_path: None,
        record: false,
        verbose: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.sim.num_runs = parse_value(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                config.sim.seed = Some(parse_value(&args, i, "--seed"));
            }
            "--frames" => {
                i += 1;
                config.sim.max_frames = parse_value(&args, i, "--frames");
            }
            "--jitter" => {
                i += 1;
                let jitter: f64 = parse_value(&args, i, "--jitter");
                if !jitter.is_finite() || jitter < 0.0 {
                    eprintln!("--jitter must be a finite, non-negative number");
                    std::process::exit(1);
                }
                config.sim.pilot_jitter = jitter;
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config.config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("--config requires a file path");
                        std::process::exit(1);
                    }
                }
            }
            "--record" => config.record = true,
            "--verbose" => config.verbose = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config.sim.verbosity = match (config.quiet, config.verbose) {
        (true, _) => 0,
        (false, true) => 2,
        (false, false) => 1,
    };
    config
}

fn print_usage() {
    eprintln!(
        "Treehop Headless Difficulty Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Sessions to play (default: 100)\n\
         \x20 --seed N        RNG seed for the first session (default: 42)\n\
         \x20 --frames N      Frame cap per session (default: 36000 = 10 minutes)\n\
         \x20 --jitter N      Autopilot aim noise (default: 12)\n\
         \x20 --config FILE   Game config JSON (default: built-in tuning)\n\
         \x20 --record        Save new high scores to ~/.treehop/\n\
         \x20 --verbose       One line per session\n\
         \x20 --quiet         Only final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = parse_args();

    let game = match &cli.config_path {
        Some(path) => GameConfig::load(path),
        None => GameConfig::load_or_default(),
    };
    let game = match game {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if cli.sim.verbosity > 0 {
        eprintln!(
            "Treehop Simulator: {} run(s), seed={}, frame cap={}, jitter={}",
            cli.sim.num_runs,
            cli.sim.seed.unwrap_or_default(),
            cli.sim.max_frames,
            cli.sim.pilot_jitter,
        );
    }

    let report = if cli.record {
        let mut store = match JsonHighScoreStore::open_default() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Could not open high score file: {e}");
                std::process::exit(1);
            }
        };
        run_simulation(&cli.sim, &game, &mut store)
    } else {
        run_simulation(&cli.sim, &game, &mut MemoryHighScoreStore::new())
    };

    match report {
        Ok(report) if cli.quiet => println!("{}", report.summary_line()),
        Ok(report) => print!("{}", report.to_text()),
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            std::process::exit(1);
        }
    }
}
