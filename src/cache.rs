use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::dashboard::build_dashboard;
use crate::error::HandicapError;
use crate::model::{Dashboard, Player, PlayerId, RoundWithCourse};

#[derive(Clone, Debug)]
pub struct CachedDashboard {
    pub fingerprint: String,
    pub dashboard: Dashboard,
    pub cached_time: DateTime<Utc>,
}

pub type DashboardMap = Arc<RwLock<HashMap<PlayerId, CachedDashboard>>>;

/// Canonical encoding of everything a dashboard is derived from. Rounds are
/// ordered by id so the storage listing order can't change it.
///
/// # Errors
///
/// Will return `Err` if the rounds can't be serialized
pub fn round_set_fingerprint(
    player: &Player,
    rounds: &[RoundWithCourse],
) -> Result<String, HandicapError> {
    let mut ordered: Vec<&RoundWithCourse> = rounds.iter().collect();
    ordered.sort_by(|a, b| a.round.id.cmp(&b.round.id));
    Ok(serde_json::to_string(&(player, ordered))?)
}

/// Dashboards keyed by player and checked against the full round-set
/// fingerprint, so a hit is always equal to a fresh recomputation.
#[derive(Clone, Debug, Default)]
pub struct DashboardCache {
    map: DashboardMap,
}

impl DashboardCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Will return `Err` if the round set can't be fingerprinted
    pub async fn get_or_compute(
        &self,
        player: Player,
        rounds: &[RoundWithCourse],
    ) -> Result<Dashboard, HandicapError> {
        let fingerprint = round_set_fingerprint(&player, rounds)?;
        let player_id = player.id;

        if let Some(cached) = self.map.read().await.get(&player_id) {
            if cached.fingerprint == fingerprint {
                debug!(%player_id, cached_time = %cached.cached_time, "dashboard cache hit");
                return Ok(cached.dashboard.clone());
            }
        }

        debug!(%player_id, "dashboard cache miss");
        let dashboard = build_dashboard(player, rounds);
        self.map.write().await.insert(
            player_id,
            CachedDashboard {
                fingerprint,
                dashboard: dashboard.clone(),
                cached_time: Utc::now(),
            },
        );
        Ok(dashboard)
    }

    pub async fn invalidate(&self, player_id: PlayerId) {
        self.map.write().await.remove(&player_id);
    }

    pub async fn clear(&self) {
        self.map.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }
}
