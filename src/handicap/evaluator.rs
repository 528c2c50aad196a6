use tracing::trace;

use super::aggregator::compute_handicap_index;
use super::differential::effective_differential;
use crate::model::{DifferentialSource, EffectiveDifferential, RoundWithCourse};

/// A round together with the index it was normalized against.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedRound<'a> {
    pub round: &'a RoundWithCourse,
    pub index_at_time: f64,
    pub effective_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation<'a> {
    pub effective: Vec<EffectiveDifferential>,
    pub evaluated: Vec<EvaluatedRound<'a>>,
}

/// Rounds in the order they count: date played, then entry time. The id
/// breaks any remaining tie so storage order never leaks into the result.
#[must_use]
pub fn chronological_order(rounds: &[RoundWithCourse]) -> Vec<&RoundWithCourse> {
    let mut ordered: Vec<&RoundWithCourse> = rounds.iter().collect();
    ordered.sort_by(|a, b| {
        a.round
            .played_at
            .cmp(&b.round.played_at)
            .then_with(|| a.round.created_at.cmp(&b.round.created_at))
            .then_with(|| a.round.id.cmp(&b.round.id))
    });
    ordered
}

/// Replays the rounds oldest first. Each round is normalized against the
/// index implied by the rounds before it, never by itself.
#[must_use]
pub fn evaluate_rounds_chronological(rounds: &[RoundWithCourse]) -> Evaluation<'_> {
    chronological_order(rounds)
        .into_iter()
        .fold(Evaluation::default(), |mut acc, round| {
            let index_at_time = compute_handicap_index(&acc.effective).index.unwrap_or(0.0);
            let effective_value = effective_differential(round, index_at_time);
            trace!(
                round_id = %round.round.id,
                index_at_time,
                effective_value,
                "evaluated round"
            );

            acc.effective.push(EffectiveDifferential {
                date: round.round.played_at,
                value: effective_value,
                source: if round.is_nine() {
                    DifferentialSource::NineConverted
                } else {
                    DifferentialSource::Eighteen
                },
                round_ids: vec![round.round.id.clone()],
            });
            acc.evaluated.push(EvaluatedRound {
                round,
                index_at_time,
                effective_value,
            });
            acc
        })
}

#[must_use]
pub fn build_effective_differentials(rounds: &[RoundWithCourse]) -> Vec<EffectiveDifferential> {
    evaluate_rounds_chronological(rounds).effective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::test_support::round;

    #[test]
    fn each_nine_is_its_own_converted_entry() {
        let rounds = vec![
            round("a", 9, 43, "2026-01-01"),
            round("b", 9, 45, "2026-01-02"),
            round("c", 9, 44, "2026-01-03"),
        ];
        let effective = build_effective_differentials(&rounds);
        assert_eq!(effective.len(), 3);
        assert!(effective.iter().all(|e| e.source == DifferentialSource::NineConverted));
        assert_eq!(effective[0].round_ids, vec!["a".to_string()]);
        assert_eq!(effective[2].round_ids, vec!["c".to_string()]);
    }

    #[test]
    fn nine_converts_against_the_running_index() {
        let rounds = vec![
            round("a", 9, 45, "2026-01-01"),
            round("b", 9, 47, "2026-01-02"),
        ];
        let evaluation = evaluate_rounds_chronological(&rounds);
        assert!((evaluation.effective[0].value - 9.67).abs() < 0.02);
        assert!((evaluation.effective[1].value - 16.16).abs() < 0.02);
        assert_eq!(evaluation.evaluated[0].index_at_time, 0.0);
        assert_eq!(evaluation.evaluated[1].index_at_time, 9.2);
    }

    #[test]
    fn eighteen_passes_through_unchanged() {
        let rounds = vec![round("a", 18, 85, "2026-01-01")];
        let effective = build_effective_differentials(&rounds);
        assert_eq!(effective[0].source, DifferentialSource::Eighteen);
        assert!((effective[0].value - 113.0 / 120.0 * 13.0).abs() < 1e-9);
    }

    #[test]
    fn storage_order_does_not_matter() {
        let rounds = vec![
            round("c", 9, 44, "2026-01-03"),
            round("a", 18, 88, "2026-01-01"),
            round("b", 9, 47, "2026-01-02"),
        ];
        let mut reversed = rounds.clone();
        reversed.reverse();
        assert_eq!(
            build_effective_differentials(&rounds),
            build_effective_differentials(&reversed)
        );
    }

    #[test]
    fn same_day_rounds_follow_entry_time() {
        let mut first = round("z", 9, 40, "2026-02-01");
        let mut second = round("a", 9, 50, "2026-02-01");
        first.round.created_at = "2026-02-01T08:00:00Z".parse().unwrap();
        second.round.created_at = "2026-02-01T12:00:00Z".parse().unwrap();
        let ordered_ids: Vec<String> = build_effective_differentials(&[second, first])
            .into_iter()
            .flat_map(|e| e.round_ids)
            .collect();
        assert_eq!(ordered_ids, vec!["z".to_string(), "a".to_string()]);
    }
}
