//! Gate geometry, tile layout, and the per-frame scoring/cleanup pass.

use super::types::{CleanupReport, Column, Obstacle, ObstacleId, Segment};
use crate::director::{Edge, SpawnInstruction};
use crate::session::RunState;
use log::debug;

/// Turn a spawn instruction into a gate at `spawn_x`.
///
/// `ground_top` is the bottom boundary of the play field; the top boundary is 0.
pub fn build_gate(
    id: ObstacleId,
    instruction: &SpawnInstruction,
    spawn_x: f64,
    ground_top: f64,
) -> Obstacle {
    let (columns, opening) = match *instruction {
        SpawnInstruction::Single {
            edge: Edge::Top,
            height,
        } => (
            vec![Column {
                edge: Edge::Top,
                top: 0.0,
                bottom: height,
            }],
            (height, ground_top),
        ),
        SpawnInstruction::Single {
            edge: Edge::Bottom,
            height,
        } => (
            vec![Column {
                edge: Edge::Bottom,
                top: ground_top - height,
                bottom: ground_top,
            }],
            (0.0, ground_top - height),
        ),
        SpawnInstruction::Double {
            gap_center,
            gap_size,
        } => {
            let gap_top = gap_center - gap_size / 2.0;
            let gap_bottom = gap_center + gap_size / 2.0;
            (
                vec![
                    Column {
                        edge: Edge::Top,
                        top: 0.0,
                        bottom: gap_top,
                    },
                    Column {
                        edge: Edge::Bottom,
                        top: gap_bottom,
                        bottom: ground_top,
                    },
                ],
                (gap_top, gap_bottom),
            )
        }
    };

    Obstacle {
        id,
        x: spawn_x,
        columns,
        scored: false,
        opening,
    }
}

/// Tiles needed to cover `extent`.
pub fn segment_count(extent: f64, segment_size: f64) -> u32 {
    if extent <= 0.0 || segment_size <= 0.0 {
        return 0;
    }
    (extent / segment_size).ceil() as u32
}

/// Tile a gate's columns into fixed-size segments, stacked from each column's top.
pub fn segment_layout(obstacle: &Obstacle, segment_size: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (index, column) in obstacle.columns.iter().enumerate() {
        let count = segment_count(column.extent(), segment_size);
        for i in 0..count {
            segments.push(Segment {
                column: index,
                center_y: column.top + i as f64 * segment_size + segment_size / 2.0,
                carries_score: index == 0 && i == 0,
            });
        }
    }
    segments
}

/// Score gates the player has passed and drop the ones past `offscreen_x`.
///
/// A gate scores when its x falls behind `player_x`; the `scored` flag makes
/// this idempotent across frames. Nothing is scored once the run is over.
pub fn score_and_cleanup(
    run: &mut RunState,
    obstacles: &mut Vec<Obstacle>,
    player_x: f64,
    offscreen_x: f64,
) -> CleanupReport {
    let mut report = CleanupReport::default();

    for obstacle in obstacles.iter_mut() {
        if !obstacle.scored && obstacle.x < player_x && run.award_point() {
            obstacle.scored = true;
            report.scored.push(obstacle.id);
        }
    }

    obstacles.retain(|o| {
        if o.x < offscreen_x {
            debug!("removing off-screen obstacle {} at x={:.1}", o.id.0, o.x);
            report.removed.push(o.id);
            false
        } else {
            true
        }
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f64 = 560.0;

    fn gate(id: u64, x: f64) -> Obstacle {
        build_gate(
            ObstacleId(id),
            &SpawnInstruction::Single {
                edge: Edge::Bottom,
                height: 150.0,
            },
            x,
            GROUND,
        )
    }

    fn playing() -> RunState {
        let mut run = RunState::new();
        run.start();
        run
    }

    #[test]
    fn test_top_column_geometry() {
        let o = build_gate(
            ObstacleId(1),
            &SpawnInstruction::Single {
                edge: Edge::Top,
                height: 200.0,
            },
            450.0,
            GROUND,
        );
        assert_eq!(o.columns.len(), 1);
        assert_eq!(o.columns[0].top, 0.0);
        assert_eq!(o.columns[0].bottom, 200.0);
        assert_eq!(o.opening, (200.0, GROUND));
        assert_eq!(o.vertical_extent(), (0.0, 200.0));
        assert!(!o.scored);
        assert_eq!(o.x, 450.0);
    }

    #[test]
    fn test_bottom_column_geometry() {
        let o = gate(1, 450.0);
        assert_eq!(o.columns[0].edge, Edge::Bottom);
        assert_eq!(o.columns[0].top, 410.0);
        assert_eq!(o.columns[0].bottom, GROUND);
        assert_eq!(o.opening, (0.0, 410.0));
    }

    #[test]
    fn test_double_gate_geometry() {
        let o = build_gate(
            ObstacleId(2),
            &SpawnInstruction::Double {
                gap_center: 300.0,
                gap_size: 148.0,
            },
            450.0,
            GROUND,
        );
        assert_eq!(o.columns.len(), 2);
        assert_eq!(o.columns[0].bottom, 226.0);
        assert_eq!(o.columns[1].top, 374.0);
        assert_eq!(o.opening, (226.0, 374.0));
        assert!((o.clearance() - 148.0).abs() < 1e-9);
        assert_eq!(o.vertical_extent(), (0.0, GROUND));
    }

    #[test]
    fn test_segment_count_rounds_up() {
        assert_eq!(segment_count(150.0, 50.0), 3);
        assert_eq!(segment_count(151.0, 50.0), 4);
        assert_eq!(segment_count(1.0, 50.0), 1);
        assert_eq!(segment_count(0.0, 50.0), 0);
        assert_eq!(segment_count(-10.0, 50.0), 0);
    }

    #[test]
    fn test_only_leading_segment_carries_score() {
        let o = build_gate(
            ObstacleId(3),
            &SpawnInstruction::Double {
                gap_center: 300.0,
                gap_size: 160.0,
            },
            450.0,
            GROUND,
        );
        let segments = segment_layout(&o, 50.0);
        // top: 220 -> 5 tiles, bottom: 180 -> 4 tiles
        assert_eq!(segments.len(), 9);
        assert_eq!(segments.iter().filter(|s| s.carries_score).count(), 1);
        assert!(segments[0].carries_score);
        assert_eq!(segments[0].column, 0);
        assert_eq!(segments[0].center_y, 25.0);
    }

    #[test]
    fn test_bottom_segments_start_at_column_top() {
        let o = gate(4, 450.0);
        let segments = segment_layout(&o, 50.0);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].center_y, 435.0);
        assert!(segments[0].carries_score);
        assert!(!segments[1].carries_score);
    }

    #[test]
    fn test_passed_gate_scores_once() {
        let mut run = playing();
        let mut obstacles = vec![gate(1, 99.0)];
        let report = score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
        assert_eq!(report.scored, vec![ObstacleId(1)]);
        assert_eq!(run.score(), 1);

        // Later frames see the flag and leave the score alone.
        for _ in 0..5 {
            let report = score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
            assert!(report.scored.is_empty());
        }
        assert_eq!(run.score(), 1);
        assert!(obstacles[0].scored);
    }

    #[test]
    fn test_gate_level_with_player_not_scored() {
        let mut run = playing();
        let mut obstacles = vec![gate(1, 100.0)];
        score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn test_multiple_gates_each_score() {
        let mut run = playing();
        let mut obstacles = vec![gate(1, 10.0), gate(2, 50.0), gate(3, 300.0)];
        let report = score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
        assert_eq!(report.scored.len(), 2);
        assert_eq!(run.score(), 2);
    }

    #[test]
    fn test_offscreen_gate_removed() {
        let mut run = playing();
        let mut obstacles = vec![gate(1, -51.0), gate(2, 200.0)];
        obstacles[0].scored = true;
        let report = score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
        assert_eq!(report.removed, vec![ObstacleId(1)]);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, ObstacleId(2));
    }

    #[test]
    fn test_gate_at_threshold_kept() {
        let mut run = playing();
        let mut obstacles = vec![gate(1, -50.0)];
        let report = score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
        assert!(report.removed.is_empty());
        assert_eq!(obstacles.len(), 1);
    }

    #[test]
    fn test_no_scoring_after_run_over() {
        let mut run = playing();
        run.finish();
        let mut obstacles = vec![gate(1, 20.0)];
        let report = score_and_cleanup(&mut run, &mut obstacles, 100.0, -50.0);
        assert!(report.scored.is_empty());
        assert_eq!(run.score(), 0);
        assert!(!obstacles[0].scored);
    }
}
