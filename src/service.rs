use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::cache::DashboardCache;
use crate::dashboard::{
    Timeframe, build_export_document, build_round_listing, comparison_series,
    filter_series_by_timeframe,
};
use crate::error::HandicapError;
use crate::handicap::compute_index_series;
use crate::model::{
    ComparisonRow, Dashboard, ExportDocument, IndexPoint, Player, PlayerId, RoundListingRow,
};
use crate::storage::{RoundQuery, RoundStore};

/// Reads rounds from a store and runs them through the handicap engine.
#[derive(Clone)]
pub struct HandicapService {
    store: Arc<dyn RoundStore>,
    cache: Option<DashboardCache>,
}

impl HandicapService {
    #[must_use]
    pub fn new(store: Arc<dyn RoundStore>) -> Self {
        Self { store, cache: None }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: DashboardCache) -> Self {
        self.cache = Some(cache);
        self
    }

    async fn require_player(&self, player_id: PlayerId) -> Result<Player, HandicapError> {
        self.store
            .get_player(player_id)
            .await?
            .ok_or_else(|| HandicapError::NotFound(format!("player {player_id}")))
    }

    /// # Errors
    ///
    /// Will return `Err` if the player is unknown or the store fails
    #[instrument(skip(self))]
    pub async fn dashboard(&self, player_id: PlayerId) -> Result<Dashboard, HandicapError> {
        let player = self.require_player(player_id).await?;
        let rounds = self
            .store
            .list_rounds_for_player(player_id, &RoundQuery::default())
            .await?;

        let dashboard = match &self.cache {
            Some(cache) => cache.get_or_compute(player, &rounds).await?,
            None => crate::dashboard::build_dashboard(player, &rounds),
        };
        info!(
            rounds = dashboard.rounds_count,
            current_index = ?dashboard.current_index,
            provisional = dashboard.provisional,
            "built dashboard"
        );
        Ok(dashboard)
    }

    /// Rounds matching `query`, annotated against the player's full history.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the player is unknown or the store fails
    #[instrument(skip(self))]
    pub async fn round_listing(
        &self,
        player_id: PlayerId,
        query: &RoundQuery,
    ) -> Result<Vec<RoundListingRow>, HandicapError> {
        self.require_player(player_id).await?;
        let all_rounds = self
            .store
            .list_rounds_for_player(player_id, &RoundQuery::default())
            .await?;
        let shown = if *query == RoundQuery::default() {
            all_rounds.clone()
        } else {
            self.store.list_rounds_for_player(player_id, query).await?
        };
        Ok(build_round_listing(&all_rounds, shown))
    }

    /// # Errors
    ///
    /// Will return `Err` if the player is unknown or the store fails
    #[instrument(skip(self))]
    pub async fn index_series(
        &self,
        player_id: PlayerId,
        timeframe: Timeframe,
    ) -> Result<Vec<IndexPoint>, HandicapError> {
        self.require_player(player_id).await?;
        let rounds = self
            .store
            .list_rounds_for_player(player_id, &RoundQuery::default())
            .await?;
        Ok(filter_series_by_timeframe(
            &compute_index_series(&rounds),
            timeframe,
        ))
    }

    /// Every known player's index on one date axis.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store fails
    #[instrument(skip(self))]
    pub async fn comparison(
        &self,
        timeframe: Timeframe,
    ) -> Result<Vec<ComparisonRow>, HandicapError> {
        let players = self.store.list_players().await?;
        let mut all_series: Vec<(PlayerId, Vec<IndexPoint>)> =
            Vec::with_capacity(players.len());
        for player in &players {
            let rounds = self
                .store
                .list_rounds_for_player(player.id, &RoundQuery::default())
                .await?;
            all_series.push((player.id, compute_index_series(&rounds)));
        }

        let borrowed: Vec<(PlayerId, &[IndexPoint])> = all_series
            .iter()
            .map(|(id, points)| (*id, points.as_slice()))
            .collect();
        Ok(filter_series_by_timeframe(
            &comparison_series(&borrowed),
            timeframe,
        ))
    }

    /// # Errors
    ///
    /// Will return `Err` if the store fails
    #[instrument(skip(self))]
    pub async fn export(&self) -> Result<ExportDocument, HandicapError> {
        let players = self.store.list_players().await?;
        let courses = self.store.list_courses().await?;
        let rounds: Vec<_> = self
            .store
            .list_rounds()
            .await?
            .into_iter()
            .map(|r| r.round)
            .collect();
        info!(courses = courses.len(), rounds = rounds.len(), "exporting");
        Ok(build_export_document(players, courses, rounds, Utc::now()))
    }
}
