use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifferentialSource {
    #[serde(rename = "18")]
    Eighteen,
    #[serde(rename = "9-converted")]
    NineConverted,
}

/// The differential value the index is computed from, after 9-hole
/// normalization where it applies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveDifferential {
    pub date: NaiveDate,
    pub value: f64,
    pub source: DifferentialSource,
    /// Always a single id today; a list so paired nines can share one entry.
    pub round_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexResult {
    pub index: Option<f64>,
    pub provisional: bool,
    pub message: Option<String>,
    pub effective_count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexPoint {
    pub date: NaiveDate,
    pub index: Option<f64>,
    pub provisional: bool,
    pub effective_count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentStats {
    pub avg_score: Option<f64>,
    pub avg_putts: Option<f64>,
    pub gir_pct: Option<f64>,
    pub fir_pct: Option<f64>,
    pub three_putt_rate: Option<f64>,
}
