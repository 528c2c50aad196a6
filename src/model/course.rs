use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub tee: String,
    /// Number of holes the rating is defined for, 9 or 18.
    pub holes: u8,
    pub course_rating: f64,
    pub slope_rating: u32,
    pub par: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
