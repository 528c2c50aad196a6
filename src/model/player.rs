use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HandicapError;

/// The fixed roster this tracker keeps rounds for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    Randall,
    Jaden,
}

impl PlayerId {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::Randall => "randall",
            PlayerId::Jaden => "jaden",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerId {
    type Err = HandicapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "randall" => Ok(PlayerId::Randall),
            "jaden" => Ok(PlayerId::Jaden),
            other => Err(HandicapError::InvalidPlayer(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
