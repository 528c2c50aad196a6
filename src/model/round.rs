use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::course::Course;
use super::player::PlayerId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub id: String,
    pub player_id: PlayerId,
    pub played_at: NaiveDate,
    pub course_id: String,
    /// 9 or 18.
    pub holes: u8,
    pub score: i32,
    #[serde(default)]
    pub putts: Option<u32>,
    #[serde(default)]
    pub balls_lost: Option<u32>,
    #[serde(default)]
    pub gir: Option<u32>,
    #[serde(default)]
    pub fir: Option<u32>,
    #[serde(default)]
    pub three_putts: Option<u32>,
    /// Playing Conditions Calculation.
    #[serde(default)]
    pub pcc: i32,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A round joined with the course it was played on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundWithCourse {
    #[serde(flatten)]
    pub round: Round,
    pub course: Course,
}

impl RoundWithCourse {
    #[must_use]
    pub fn is_nine(&self) -> bool {
        self.round.holes == 9
    }

    /// A 9-hole round at an 18-hole course plays against half the course.
    #[must_use]
    pub fn plays_half_course(&self) -> bool {
        self.round.holes == 9 && self.course.holes == 18
    }

    #[must_use]
    pub fn rating_for_played_holes(&self) -> f64 {
        if self.plays_half_course() {
            self.course.course_rating / 2.0
        } else {
            self.course.course_rating
        }
    }

    #[must_use]
    pub fn par_for_played_holes(&self) -> f64 {
        if self.plays_half_course() {
            f64::from(self.course.par) / 2.0
        } else {
            f64::from(self.course.par)
        }
    }
}
