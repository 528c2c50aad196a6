use ahash::RandomState;
use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::HandicapError;
use crate::handicap::{
    compute_current_handicap, compute_recent_stats, index_series_from_effective, used_round_ids,
};
use crate::model::{
    ComparisonRow, Course, Dashboard, ExportDocument, IndexPoint, Player, PlayerId, Round,
    RoundListingRow, RoundWithCourse,
};

/// Builds everything the player dashboard shows from the full round history.
#[must_use]
pub fn build_dashboard(player: Player, rounds: &[RoundWithCourse]) -> Dashboard {
    let current = compute_current_handicap(rounds);
    Dashboard {
        player,
        current_index: current.result.index,
        provisional: current.result.provisional,
        index_message: current.result.message,
        index_series: index_series_from_effective(&current.effective),
        recent_stats: compute_recent_stats(rounds),
        rounds_count: rounds.len(),
        effective_count: current.effective.len(),
    }
}

/// Annotates `shown` with each round's effective differential and whether
/// it is one of the differentials behind the current index.
///
/// Both come from `all_rounds`; `shown` may be any filtered or limited
/// subset of it.
#[must_use]
pub fn build_round_listing(
    all_rounds: &[RoundWithCourse],
    shown: Vec<RoundWithCourse>,
) -> Vec<RoundListingRow> {
    let effective = compute_current_handicap(all_rounds).effective;
    let used = used_round_ids(&effective);
    let differential_by_round: HashMap<&str, f64, RandomState> = effective
        .iter()
        .filter_map(|e| e.round_ids.first().map(|id| (id.as_str(), e.value)))
        .collect();

    shown
        .into_iter()
        .map(|round| {
            let id = round.round.id.as_str();
            RoundListingRow {
                differential: differential_by_round.get(id).copied(),
                used_in_index: used.contains(id),
                round,
            }
        })
        .collect()
}

/// Anything plotted against the date it happened.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for IndexPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ComparisonRow {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Last90Days,
    SixMonths,
    OneYear,
    All,
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::Last90Days => "90d",
            Timeframe::SixMonths => "6m",
            Timeframe::OneYear => "1y",
            Timeframe::All => "all",
            Timeframe::Custom { .. } => "custom",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Timeframe {
    type Err = HandicapError;

    /// `custom` parses with open bounds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "90d" => Ok(Timeframe::Last90Days),
            "6m" => Ok(Timeframe::SixMonths),
            "1y" => Ok(Timeframe::OneYear),
            "all" => Ok(Timeframe::All),
            "custom" => Ok(Timeframe::Custom {
                start: None,
                end: None,
            }),
            other => Err(HandicapError::Parse(format!("unknown timeframe: {other}"))),
        }
    }
}

/// Keeps the points inside `timeframe`, sorted by date. Rolling windows end
/// at the latest point rather than today.
#[must_use]
pub fn filter_series_by_timeframe<T: Dated + Clone>(data: &[T], timeframe: Timeframe) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by_key(|row| row.date());
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return sorted;
    };
    let (first, last) = (first.date(), last.date());

    let (start, end) = match timeframe {
        Timeframe::Last90Days => (last.checked_sub_days(Days::new(90)), Some(last)),
        Timeframe::SixMonths => (last.checked_sub_months(Months::new(6)), Some(last)),
        Timeframe::OneYear => (last.checked_sub_months(Months::new(12)), Some(last)),
        Timeframe::All => (Some(first), Some(last)),
        Timeframe::Custom { start, end } => {
            (Some(start.unwrap_or(first)), Some(end.unwrap_or(last)))
        }
    };

    sorted
        .into_iter()
        .filter(|row| start.is_none_or(|s| row.date() >= s))
        .filter(|row| end.is_none_or(|e| row.date() <= e))
        .collect()
}

/// Merges several players' index series onto one date axis. Each player's
/// last known index carries forward across dates where they have no point.
#[must_use]
pub fn comparison_series(series: &[(PlayerId, &[IndexPoint])]) -> Vec<ComparisonRow> {
    let mut by_date: BTreeMap<NaiveDate, BTreeMap<PlayerId, Option<f64>>> = BTreeMap::new();
    for (player, points) in series {
        for point in *points {
            by_date
                .entry(point.date)
                .or_default()
                .insert(*player, point.index);
        }
    }

    let mut last_known: BTreeMap<PlayerId, f64> = BTreeMap::new();
    by_date
        .into_iter()
        .map(|(date, mut indexes)| {
            for (player, _) in series {
                match indexes.get(player).copied().flatten() {
                    Some(index) => {
                        last_known.insert(*player, index);
                    }
                    None => {
                        indexes.insert(*player, last_known.get(player).copied());
                    }
                }
            }
            ComparisonRow { date, indexes }
        })
        .collect()
}

/// A full dump of players, courses and rounds, rounds oldest first. The
/// result loads back into a `JsonRoundStore`.
#[must_use]
pub fn build_export_document(
    players: Vec<Player>,
    courses: Vec<Course>,
    mut rounds: Vec<Round>,
    exported_at: DateTime<Utc>,
) -> ExportDocument {
    rounds.sort_by(|a, b| {
        a.played_at
            .cmp(&b.played_at)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ExportDocument {
        exported_at,
        players,
        courses,
        rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::test_support::round;

    fn point(date: &str, index: f64) -> IndexPoint {
        IndexPoint {
            date: date.parse().unwrap(),
            index: Some(index),
            provisional: false,
            effective_count: 8,
        }
    }

    fn dates<T: Dated>(rows: &[T]) -> Vec<String> {
        rows.iter().map(|r| r.date().to_string()).collect()
    }

    #[test]
    fn ninety_days_back_from_the_latest_point() {
        let data = vec![
            point("2026-06-30", 3.0),
            point("2026-01-01", 1.0),
            point("2026-04-01", 2.0),
        ];
        let filtered = filter_series_by_timeframe(&data, Timeframe::Last90Days);
        assert_eq!(dates(&filtered), vec!["2026-04-01", "2026-06-30"]);
    }

    #[test]
    fn six_months_clamps_at_month_end() {
        let data = vec![
            point("2026-02-27", 1.0),
            point("2026-02-28", 2.0),
            point("2026-08-31", 3.0),
        ];
        let filtered = filter_series_by_timeframe(&data, Timeframe::SixMonths);
        assert_eq!(dates(&filtered), vec!["2026-02-28", "2026-08-31"]);
    }

    #[test]
    fn custom_bounds_default_to_the_data() {
        let data = vec![
            point("2026-01-01", 1.0),
            point("2026-02-01", 2.0),
            point("2026-03-01", 3.0),
        ];
        let tf = Timeframe::Custom {
            start: Some("2026-01-15".parse().unwrap()),
            end: None,
        };
        assert_eq!(
            dates(&filter_series_by_timeframe(&data, tf)),
            vec!["2026-02-01", "2026-03-01"]
        );
        assert_eq!(filter_series_by_timeframe(&data, Timeframe::All).len(), 3);
    }

    #[test]
    fn empty_series_stays_empty() {
        let data: Vec<IndexPoint> = Vec::new();
        assert!(filter_series_by_timeframe(&data, Timeframe::OneYear).is_empty());
    }

    #[test]
    fn timeframe_names_parse() {
        assert_eq!("6m".parse::<Timeframe>().unwrap(), Timeframe::SixMonths);
        assert!("2w".parse::<Timeframe>().is_err());
    }

    #[test]
    fn comparison_carries_the_last_index_forward() {
        let randall = vec![point("2026-01-01", 10.0), point("2026-01-05", 9.0)];
        let jaden = vec![point("2026-01-03", 20.0)];
        let rows = comparison_series(&[
            (PlayerId::Randall, randall.as_slice()),
            (PlayerId::Jaden, jaden.as_slice()),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].indexes[&PlayerId::Randall], Some(10.0));
        assert_eq!(rows[0].indexes[&PlayerId::Jaden], None);
        assert_eq!(rows[1].indexes[&PlayerId::Randall], Some(10.0));
        assert_eq!(rows[1].indexes[&PlayerId::Jaden], Some(20.0));
        assert_eq!(rows[2].indexes[&PlayerId::Randall], Some(9.0));
        assert_eq!(rows[2].indexes[&PlayerId::Jaden], Some(20.0));
    }

    #[test]
    fn listing_uses_the_full_history() {
        let all: Vec<_> = (1..=10)
            .map(|d| round(&format!("r{d}"), 18, 80 + d, &format!("2026-05-{d:02}")))
            .collect();
        let shown = vec![all[9].clone(), all[0].clone()];
        let rows = build_round_listing(&all, shown);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].round.round.id, "r10");
        assert!(!rows[0].used_in_index);
        assert!(rows[1].used_in_index);
        assert!(rows.iter().all(|r| r.differential.is_some()));
    }

    #[test]
    fn listing_of_unknown_round_has_no_differential() {
        let all = vec![round("a", 18, 90, "2026-01-01")];
        let stray = round("b", 18, 90, "2026-01-02");
        let rows = build_round_listing(&all, vec![stray]);
        assert_eq!(rows[0].differential, None);
        assert!(!rows[0].used_in_index);
    }
}
