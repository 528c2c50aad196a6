use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::course::Course;
use super::differential::{IndexPoint, RecentStats};
use super::player::{Player, PlayerId};
use super::round::{Round, RoundWithCourse};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub player: Player,
    pub current_index: Option<f64>,
    pub provisional: bool,
    pub index_message: Option<String>,
    pub index_series: Vec<IndexPoint>,
    pub recent_stats: RecentStats,
    pub rounds_count: usize,
    pub effective_count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundListingRow {
    pub round: RoundWithCourse,
    pub differential: Option<f64>,
    pub used_in_index: bool,
}

/// One date on a multi-player index chart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub indexes: BTreeMap<PlayerId, Option<f64>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub exported_at: DateTime<Utc>,
    pub players: Vec<Player>,
    pub courses: Vec<Course>,
    pub rounds: Vec<Round>,
}
