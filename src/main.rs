use std::io;
use std::path::Path;
use treehop::director::ObstacleKind;
use treehop::{GameConfig, HighScoreStore, JsonHighScoreStore};

fn load_config(path: Option<&String>) -> GameConfig {
    let result = match path {
        Some(path) => GameConfig::load(Path::new(path)),
        None => GameConfig::load_or_default(),
    };
    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_tiers(config: &GameConfig) {
    println!(
        "{:>7}  {:>5} {:>7} {:>7}  {:>5}  {:>11}  {:>11}",
        "score", "top", "bottom", "double", "gap", "heights", "gap centers"
    );
    for tier in &config.tiers {
        let centers = config.gap_center_for(tier);
        println!(
            "{:>6}+  {:>4.0}% {:>6.0}% {:>6.0}%  {:>5.0}  {:>5.0}-{:<5.0}  {:>5.0}-{:<5.0}",
            tier.min_score,
            tier.weights.probability(ObstacleKind::Top) * 100.0,
            tier.weights.probability(ObstacleKind::Bottom) * 100.0,
            tier.weights.probability(ObstacleKind::Double) * 100.0,
            tier.gap_size,
            tier.height.min,
            tier.height.max,
            centers.min,
            centers.max,
        );
    }
    println!(
        "first obstacle: bottom column, height {:.0}-{:.0}",
        config.spawn.first_height.min, config.spawn.first_height.max
    );
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("--help");

    match command {
        "high-score" => {
            let store = JsonHighScoreStore::open_default()?;
            println!("High Score: {}", store.high_score());
            println!("Stored in {}", store.path().display());
        }
        "reset-high-score" => {
            let mut store = JsonHighScoreStore::open_default()?;
            store.reset()?;
            println!("High score reset.");
        }
        "check-config" => {
            let config = load_config(args.get(2));
            println!(
                "Configuration OK: {} tiers, spawn every {}ms",
                config.tiers.len(),
                config.spawn.interval_ms
            );
        }
        "tiers" => print_tiers(&load_config(args.get(2))),
        "--version" | "-v" => {
            println!("treehop {}", env!("CARGO_PKG_VERSION"));
        }
        "--help" | "-h" => {
            println!("Treehop - flap-to-dodge obstacle director\n");
            println!("Usage: treehop <command>\n");
            println!("Commands:");
            println!("  high-score           Show the stored high score");
            println!("  reset-high-score     Forget the stored high score");
            println!("  check-config [FILE]  Validate a config (default: ~/.treehop/config.json)");
            println!("  tiers [FILE]         Print the difficulty tier table");
            println!("  --version            Show version information");
            println!("  --help               Show this help message");
            println!("\nRun the `simulator` binary to play headless sessions.");
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'treehop --help' for usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}
