use ahash::RandomState;
use std::collections::HashMap;

use super::differential::expected_nine_differential;
use super::evaluator::{EvaluatedRound, evaluate_rounds_chronological};
use crate::model::{RecentStats, RoundWithCourse};

/// Number of most recent rounds the stat summary covers.
pub const RECENT_WINDOW: usize = 10;

/// A nine's score lifted to an 18-hole scale; eighteens are unchanged.
#[must_use]
pub fn adjusted_score(evaluated: &EvaluatedRound<'_>) -> f64 {
    let round = evaluated.round;
    let score = f64::from(round.round.score);
    if round.is_nine() {
        score
            + round.par_for_played_holes()
            + expected_nine_differential(evaluated.index_at_time)
    } else {
        score
    }
}

/// Most recently played first. Same-day rounds fall back to the later entry
/// first, then id, matching the storage listing order.
#[must_use]
pub fn most_recent(rounds: &[RoundWithCourse], n: usize) -> Vec<&RoundWithCourse> {
    let mut recent: Vec<&RoundWithCourse> = rounds.iter().collect();
    recent.sort_by(|a, b| {
        b.round
            .played_at
            .cmp(&a.round.played_at)
            .then_with(|| b.round.created_at.cmp(&a.round.created_at))
            .then_with(|| b.round.id.cmp(&a.round.id))
    });
    recent.truncate(n);
    recent
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Holes-weighted percentage over the rounds that recorded the stat.
fn holes_weighted_pct(
    rounds: &[&RoundWithCourse],
    stat: impl Fn(&RoundWithCourse) -> Option<u32>,
) -> Option<f64> {
    let recorded: Vec<(u32, u32)> = rounds
        .iter()
        .filter_map(|r| stat(*r).map(|hit| (hit, u32::from(r.round.holes))))
        .collect();
    if recorded.is_empty() {
        return None;
    }
    let hit: u32 = recorded.iter().map(|(hit, _)| hit).sum();
    let holes: u32 = recorded.iter().map(|(_, holes)| holes).sum();
    Some(f64::from(hit) / f64::from(holes) * 100.0)
}

#[must_use]
pub fn compute_recent_stats(rounds: &[RoundWithCourse]) -> RecentStats {
    let evaluation = evaluate_rounds_chronological(rounds);
    let adjusted: HashMap<&str, f64, RandomState> = evaluation
        .evaluated
        .iter()
        .map(|e| (e.round.round.id.as_str(), adjusted_score(e)))
        .collect();

    let recent = most_recent(rounds, RECENT_WINDOW);

    RecentStats {
        avg_score: mean(recent.iter().map(|r| {
            adjusted
                .get(r.round.id.as_str())
                .copied()
                .unwrap_or_else(|| f64::from(r.round.score))
        })),
        avg_putts: mean(recent.iter().filter_map(|r| r.round.putts).map(f64::from)),
        gir_pct: holes_weighted_pct(&recent, |r| r.round.gir),
        fir_pct: holes_weighted_pct(&recent, |r| r.round.fir),
        three_putt_rate: mean(
            recent
                .iter()
                .filter_map(|r| r.round.three_putts)
                .map(f64::from),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::test_support::round;

    #[test]
    fn no_rounds_means_no_stats() {
        assert_eq!(compute_recent_stats(&[]), RecentStats::default());
    }

    #[test]
    fn nine_hole_scores_are_adjusted() {
        let rounds = vec![round("a", 9, 45, "2026-01-01")];
        let stats = compute_recent_stats(&rounds);
        // 45 + half of par 72 + expected nine at index 0
        let expected = 45.0 + 36.0 + 1.197;
        assert!((stats.avg_score.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn nine_on_a_nine_hole_course_adds_its_full_par() {
        let mut nine = round("a", 9, 42, "2026-01-01");
        nine.course.holes = 9;
        nine.course.par = 36;
        nine.course.course_rating = 35.5;
        let stats = compute_recent_stats(&[nine]);
        let expected = 42.0 + 36.0 + expected_nine_differential(0.0);
        assert!((stats.avg_score.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn only_the_last_ten_rounds_count() {
        let rounds: Vec<_> = (1..=12)
            .map(|d| {
                let score = if d <= 2 { 120 } else { 80 };
                round(&format!("r{d}"), 18, score, &format!("2026-04-{d:02}"))
            })
            .collect();
        let stats = compute_recent_stats(&rounds);
        assert_eq!(stats.avg_score, Some(80.0));
    }

    #[test]
    fn green_percentage_is_weighted_by_holes() {
        let mut nine = round("a", 9, 45, "2026-01-01");
        nine.round.gir = Some(9);
        let mut eighteen = round("b", 18, 90, "2026-01-02");
        eighteen.round.gir = Some(0);
        let skipped = round("c", 18, 90, "2026-01-03");
        let stats = compute_recent_stats(&[nine, eighteen, skipped]);
        // 9 of 27 holes rather than the mean of 100% and 0%
        let pct = stats.gir_pct.unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.fir_pct, None);
    }

    #[test]
    fn putting_stats_skip_missing_values() {
        let mut a = round("a", 18, 90, "2026-01-01");
        a.round.putts = Some(30);
        a.round.three_putts = Some(2);
        let mut b = round("b", 18, 90, "2026-01-02");
        b.round.putts = Some(34);
        let c = round("c", 18, 90, "2026-01-03");
        let stats = compute_recent_stats(&[a, b, c]);
        assert_eq!(stats.avg_putts, Some(32.0));
        assert_eq!(stats.three_putt_rate, Some(2.0));
    }
}
