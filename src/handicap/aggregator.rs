use ahash::RandomState;
use std::collections::HashSet;

use super::differential::truncate_one_decimal;
use crate::model::{EffectiveDifferential, IndexResult};

/// Trailing window the best differentials are picked from.
pub const INDEX_WINDOW: usize = 20;
/// How many of the window's lowest differentials are averaged.
pub const BEST_OF: usize = 8;
/// Below this many effective differentials the index is provisional.
pub const MIN_FOR_ESTABLISHED: usize = 8;
pub const INDEX_MULTIPLIER: f64 = 0.96;
pub const NOT_ENOUGH_ROUNDS: &str = "Not enough rounds yet";

/// The lowest `min(8, window)` entries of the trailing 20-entry window.
///
/// The sort is stable, so equal values keep their chronological order and
/// the earlier entry wins a tie at the cut-off.
#[must_use]
pub fn select_best(effective: &[EffectiveDifferential]) -> Vec<&EffectiveDifferential> {
    let window = &effective[effective.len().saturating_sub(INDEX_WINDOW)..];
    let mut ranked: Vec<&EffectiveDifferential> = window.iter().collect();
    ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
    ranked.truncate(BEST_OF.min(window.len()));
    ranked
}

/// Reduces a chronological list of effective differentials to an index.
#[must_use]
pub fn compute_handicap_index(effective: &[EffectiveDifferential]) -> IndexResult {
    if effective.is_empty() {
        return IndexResult {
            index: None,
            provisional: false,
            message: Some(NOT_ENOUGH_ROUNDS.to_string()),
            effective_count: 0,
        };
    }

    let best = select_best(effective);
    let avg = best.iter().map(|d| d.value).sum::<f64>() / best.len() as f64;
    let provisional = effective.len() < MIN_FOR_ESTABLISHED;

    IndexResult {
        index: Some(truncate_one_decimal(avg * INDEX_MULTIPLIER)),
        provisional,
        message: provisional.then(|| NOT_ENOUGH_ROUNDS.to_string()),
        effective_count: effective.len(),
    }
}

/// Round ids behind the differentials the current index is built from.
#[must_use]
pub fn used_round_ids(effective: &[EffectiveDifferential]) -> HashSet<String, RandomState> {
    select_best(effective)
        .into_iter()
        .flat_map(|d| d.round_ids.iter().cloned())
        .collect()
}
