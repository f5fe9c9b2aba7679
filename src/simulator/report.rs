//! Simulation report generation.

use std::collections::BTreeMap;

/// Statistics for one simulated session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub frames: u64,
    pub spawned: u32,
    pub double_spawns: u32,
    pub removed: u32,
    /// Threshold of the tier in force when the session ended.
    pub final_tier: u32,
    pub new_high_score: bool,
    pub timed_out: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub new_high_scores: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub min_score: u32,
    pub avg_seconds: f64,
    pub double_share: f64,
    pub total_spawned: u64,
    pub total_removed: u64,

    /// Sessions ending in each tier, keyed by tier threshold.
    pub tier_distribution: BTreeMap<u32, u32>,
    pub score_distribution: BTreeMap<u32, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, frame_ms: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_seconds = runs
            .iter()
            .map(|r| (r.frames * frame_ms) as f64 / 1000.0)
            .sum::<f64>()
            / divisor;

        let total_spawned: u64 = runs.iter().map(|r| r.spawned as u64).sum();
        let total_removed: u64 = runs.iter().map(|r| r.removed as u64).sum();
        let doubles: u64 = runs.iter().map(|r| r.double_spawns as u64).sum();
        let double_share = if total_spawned == 0 {
            0.0
        } else {
            doubles as f64 / total_spawned as f64
        };

        let mut tier_distribution = BTreeMap::new();
        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *tier_distribution.entry(run.final_tier).or_insert(0) += 1;
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out: runs.iter().filter(|r| r.timed_out).count() as u32,
            new_high_scores: runs.iter().filter(|r| r.new_high_score).count() as u32,
            avg_score,
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            avg_seconds,
            double_share,
            total_spawned,
            total_removed,
            tier_distribution,
            score_distribution,
            run_stats: runs,
        }
    }

    /// One-line summary for `--quiet` output.
    pub fn summary_line(&self) -> String {
        format!(
            "runs={} avg_score={:.2} max={} min={} timeouts={} doubles={:.1}%",
            self.num_runs,
            self.avg_score,
            self.max_score,
            self.min_score,
            self.runs_timed_out,
            self.double_share * 100.0
        )
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out, {} new high scores\n\n",
            self.num_runs, self.runs_timed_out, self.new_high_scores
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:        {:.2}\n", self.avg_score));
        report.push_str(&format!(
            "  Best / Worst:     {} / {}\n",
            self.max_score, self.min_score
        ));
        report.push_str(&format!("  Avg Session:      {:.1}s\n\n", self.avg_seconds));

        report.push_str("── OBSTACLES ────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Spawned:          {}\n", self.total_spawned));
        report.push_str(&format!("  Removed:          {}\n", self.total_removed));
        report.push_str(&format!(
            "  Double Share:     {:.1}%\n\n",
            self.double_share * 100.0
        ));

        report.push_str("── FINAL TIER ───────────────────────────────────────────────────\n");
        for (tier, count) in &self.tier_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Tier {:>3}+: {:>5.1}% {}\n", tier, pct, bar));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, final_tier: u32, timed_out: bool) -> RunStats {
        RunStats {
            score,
            frames: 600,
            spawned: score + 2,
            double_spawns: 1,
            removed: score,
            final_tier,
            timed_out,
            ..Default::default()
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(
            vec![run(2, 0, false), run(6, 5, false), run(13, 12, true)],
            16,
        );
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.max_score, 13);
        assert_eq!(report.min_score, 2);
        assert!((report.avg_score - 7.0).abs() < 1e-9);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.total_spawned, 27);
        assert!((report.double_share - 3.0 / 27.0).abs() < 1e-9);
        assert!((report.avg_seconds - 9.6).abs() < 1e-9);
        assert_eq!(report.tier_distribution.get(&12), Some(&1));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 16);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert_eq!(report.double_share, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_summary_line() {
        let report = SimReport::from_runs(vec![run(4, 3, false)], 16);
        assert!(report.summary_line().starts_with("runs=1 avg_score=4.00"));
    }
}
