//! Handicap index computation.
//!
//! Everything here is a pure function of a player's round list. Nothing is
//! cached or persisted; callers recompute from the full history.

pub mod aggregator;
pub mod differential;
pub mod evaluator;
pub mod recent;
pub mod series;

pub use aggregator::{compute_handicap_index, select_best, used_round_ids};
pub use differential::{
    compute_differential, compute_round_differential, effective_differential,
    expected_nine_differential, truncate_one_decimal,
};
pub use evaluator::{
    EvaluatedRound, Evaluation, build_effective_differentials, chronological_order,
    evaluate_rounds_chronological,
};
pub use recent::{adjusted_score, compute_recent_stats, most_recent};
pub use series::{compute_index_series, index_series_from_effective};

use crate::model::{EffectiveDifferential, IndexResult, RoundWithCourse};

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentHandicap {
    pub result: IndexResult,
    pub effective: Vec<EffectiveDifferential>,
}

#[must_use]
pub fn compute_current_handicap(rounds: &[RoundWithCourse]) -> CurrentHandicap {
    let effective = build_effective_differentials(rounds);
    CurrentHandicap {
        result: compute_handicap_index(&effective),
        effective,
    }
}
