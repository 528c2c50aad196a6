use super::aggregator::compute_handicap_index;
use super::evaluator::build_effective_differentials;
use crate::model::{EffectiveDifferential, IndexPoint, RoundWithCourse};

/// The index as it read after each effective differential was added.
///
/// Every prefix re-ranks its own trailing window, so this is quadratic in
/// history length. Fine for a few hundred rounds per player.
#[must_use]
pub fn index_series_from_effective(effective: &[EffectiveDifferential]) -> Vec<IndexPoint> {
    (1..=effective.len())
        .map(|len| {
            let current = compute_handicap_index(&effective[..len]);
            IndexPoint {
                date: effective[len - 1].date,
                index: current.index,
                provisional: current.provisional,
                effective_count: current.effective_count,
            }
        })
        .collect()
}

#[must_use]
pub fn compute_index_series(rounds: &[RoundWithCourse]) -> Vec<IndexPoint> {
    index_series_from_effective(&build_effective_differentials(rounds))
}
