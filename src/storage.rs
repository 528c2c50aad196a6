use ahash::RandomState;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::error::HandicapError;
use crate::model::{Course, Player, PlayerId, Round, RoundWithCourse};

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Filters for a player's round listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundQuery {
    pub limit: Option<usize>,
    pub course_id: Option<String>,
}

/// Where rounds come from. Implementations hand back rounds that already
/// passed validation; the handicap engine does not check them again.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>, StorageError>;
    async fn list_players(&self) -> Result<Vec<Player>, StorageError>;
    /// Newest first: date played descending, then entry time descending.
    async fn list_rounds_for_player(
        &self,
        player_id: PlayerId,
        query: &RoundQuery,
    ) -> Result<Vec<RoundWithCourse>, StorageError>;
    /// Every stored round regardless of player, in no particular order.
    async fn list_rounds(&self) -> Result<Vec<RoundWithCourse>, StorageError>;
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;
}

#[derive(Deserialize)]
struct StoreDocument {
    #[serde(default)]
    players: Vec<Player>,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    rounds: Vec<Round>,
}

/// Read-only store over a JSON snapshot of players, courses and rounds.
#[derive(Debug, Clone, Default)]
pub struct JsonRoundStore {
    players: Vec<Player>,
    courses: Vec<Course>,
    rounds: Vec<RoundWithCourse>,
}

impl JsonRoundStore {
    /// # Errors
    ///
    /// Will return `Err` if the document does not parse or a round names a
    /// course that is not in it
    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        let document: StoreDocument = serde_json::from_str(json)
            .map_err(|e| StorageError::new(format!("invalid round document: {e}")))?;
        Self::from_document(document)
    }

    /// # Errors
    ///
    /// Will return `Err` if the value is not a round document or a round
    /// names a course that is not in it
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, StorageError> {
        let document: StoreDocument = serde_json::from_value(value)
            .map_err(|e| StorageError::new(format!("invalid round document: {e}")))?;
        Self::from_document(document)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file can't be read or its contents are not a
    /// valid round document
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, HandicapError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HandicapError::Io(format!("reading {}: {e}", path.display())))?;
        let store = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            players = store.players.len(),
            courses = store.courses.len(),
            rounds = store.rounds.len(),
            "loaded round store"
        );
        Ok(store)
    }

    fn from_document(document: StoreDocument) -> Result<Self, StorageError> {
        let courses_by_id: HashMap<&str, &Course, RandomState> = document
            .courses
            .iter()
            .map(|c| (c.id.as_str(), c))
            .collect();

        let rounds = document
            .rounds
            .into_iter()
            .map(|round| {
                let course = courses_by_id
                    .get(round.course_id.as_str())
                    .map(|c| (*c).clone())
                    .ok_or_else(|| {
                        StorageError::new(format!(
                            "round {} references unknown course {}",
                            round.id, round.course_id
                        ))
                    })?;
                Ok(RoundWithCourse { round, course })
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        Ok(Self {
            players: document.players,
            courses: document.courses,
            rounds,
        })
    }
}

#[async_trait]
impl RoundStore for JsonRoundStore {
    async fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>, StorageError> {
        Ok(self.players.iter().find(|p| p.id == player_id).cloned())
    }

    async fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }

    async fn list_rounds_for_player(
        &self,
        player_id: PlayerId,
        query: &RoundQuery,
    ) -> Result<Vec<RoundWithCourse>, StorageError> {
        let mut rounds: Vec<RoundWithCourse> = self
            .rounds
            .iter()
            .filter(|r| r.round.player_id == player_id)
            .filter(|r| {
                query
                    .course_id
                    .as_deref()
                    .is_none_or(|course_id| r.round.course_id == course_id)
            })
            .cloned()
            .collect();

        rounds.sort_by(|a, b| {
            b.round
                .played_at
                .cmp(&a.round.played_at)
                .then_with(|| b.round.created_at.cmp(&a.round.created_at))
        });
        if let Some(limit) = query.limit {
            rounds.truncate(limit);
        }

        debug!(%player_id, ?query, returned = rounds.len(), "listed rounds");
        Ok(rounds)
    }

    async fn list_rounds(&self) -> Result<Vec<RoundWithCourse>, StorageError> {
        Ok(self.rounds.clone())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        let mut courses = self.courses.clone();
        courses.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.tee.cmp(&b.tee)));
        Ok(courses)
    }
}
