//! Integration test: difficulty curve and spawn policy
//!
//! Checks the director across the whole score range: monotonic tiers, the
//! fixed opener, gap placement and column clearance.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use treehop::director::ObstacleKind;
use treehop::obstacles::{build_gate, segment_count, segment_layout, ObstacleId};
use treehop::{Edge, GameConfig, ObstacleDirector, SpawnInstruction};

fn director() -> ObstacleDirector {
    ObstacleDirector::new(&GameConfig::default()).expect("default config is valid")
}

#[test]
fn test_difficulty_never_eases_with_score() {
    let director = director();
    for s1 in 0..40u32 {
        for s2 in (s1 + 1)..41 {
            let easy = director.tier_for(s1);
            let hard = director.tier_for(s2);
            assert!(hard.gap_size <= easy.gap_size, "gap {s1} -> {s2}");
            assert!(hard.height.min >= easy.height.min, "min height {s1} -> {s2}");
            assert!(hard.height.max >= easy.height.max, "max height {s1} -> {s2}");
        }
    }
}

#[test]
fn test_first_obstacle_independent_of_seed() {
    let director = director();
    for seed in 0..500 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match director.next_spawn(0, true, &mut rng) {
            SpawnInstruction::Single {
                edge: Edge::Bottom,
                height,
            } => assert!((120.0..=180.0).contains(&height)),
            other => panic!("seed {seed}: unexpected opener {other:?}"),
        }
    }
}

#[test]
fn test_score_ten_double_share() {
    let director = director();
    let tier = director.tier_for(10);
    assert_eq!(tier.gap_size, 148.0);
    assert_eq!((tier.height.min, tier.height.max), (180.0, 360.0));

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let draws = 6000;
    let doubles = (0..draws)
        .filter(|_| director.next_spawn(10, false, &mut rng).kind() == ObstacleKind::Double)
        .count();
    let share = doubles as f64 / draws as f64;
    assert!((share - 4.0 / 6.0).abs() < 0.03, "double share {share}");
}

#[test]
fn test_double_gap_center_in_declared_range() {
    let config = GameConfig::default();
    let director = director();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for score in 0..30 {
        let range = config.gap_center_for(director.tier_for(score));
        for _ in 0..100 {
            if let SpawnInstruction::Double { gap_center, .. } =
                director.next_spawn(score, false, &mut rng)
            {
                assert!(range.contains(gap_center), "score {score}: {gap_center}");
            }
        }
    }
}

#[test]
fn test_every_gate_leaves_clearance_on_field() {
    let config = GameConfig::default();
    let ground_top = config.field.ground_top();
    let director = director();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for score in 0..40 {
        for _ in 0..100 {
            let instruction = director.next_spawn(score, false, &mut rng);
            let gate = build_gate(ObstacleId(0), &instruction, 450.0, ground_top);
            assert!(
                gate.clearance() >= config.spawn.min_clearance,
                "score {score}: {instruction:?}"
            );
            assert!(gate.opening.0 >= 0.0 && gate.opening.1 <= ground_top);
        }
    }
}

#[test]
fn test_segment_tiles_cover_columns() {
    let config = GameConfig::default();
    let director = director();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for score in [0, 4, 9, 20] {
        let instruction = director.next_spawn(score, false, &mut rng);
        let gate = build_gate(ObstacleId(1), &instruction, 450.0, config.field.ground_top());
        let segments = segment_layout(&gate, config.spawn.segment_size);
        let expected: u32 = gate
            .columns
            .iter()
            .map(|c| segment_count(c.extent(), config.spawn.segment_size))
            .sum();
        assert_eq!(segments.len() as u32, expected);
        assert_eq!(segments.iter().filter(|s| s.carries_score).count(), 1);
    }
}

#[test]
fn test_custom_tier_table_from_json() {
    let json = r#"{
        "tiers": [
            { "min_score": 0, "weights": { "top": 1, "bottom": 1, "double": 0 },
              "gap_size": 180, "height": { "min": 100, "max": 200 } },
            { "min_score": 20, "weights": { "top": 0, "bottom": 0, "double": 1 },
              "gap_size": 120, "height": { "min": 150, "max": 300 },
              "gap_center": { "min": 200, "max": 350 } }
        ]
    }"#;
    let config = GameConfig::from_json(json).expect("custom table is valid");
    let director = ObstacleDirector::new(&config).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    assert_eq!(director.tier_for(19).min_score, 0);
    for _ in 0..50 {
        match director.next_spawn(25, false, &mut rng) {
            SpawnInstruction::Double {
                gap_center,
                gap_size,
            } => {
                assert_eq!(gap_size, 120.0);
                assert!((200.0..=350.0).contains(&gap_center));
            }
            other => panic!("expected double, got {other:?}"),
        }
    }
}
