#![allow(dead_code)]

use rusty_handicap::JsonRoundStore;
use rusty_handicap::model::{Course, PlayerId, Round, RoundWithCourse};
use serde_json::{Value, json};

pub const EIGHTEEN: &str = "course-18";
pub const NINE: &str = "course-9";

pub fn course(id: &str, holes: u8, rating: f64, slope: u32, par: i32) -> Value {
    json!({
        "id": id,
        "name": format!("Course {id}"),
        "tee": "Blue",
        "holes": holes,
        "course_rating": rating,
        "slope_rating": slope,
        "par": par,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

pub fn round(
    id: &str,
    player: &str,
    played_at: &str,
    course_id: &str,
    holes: u8,
    score: i32,
) -> Value {
    json!({
        "id": id,
        "player_id": player,
        "played_at": played_at,
        "course_id": course_id,
        "holes": holes,
        "score": score,
        "created_at": format!("{played_at}T12:00:00Z"),
        "updated_at": format!("{played_at}T12:00:00Z")
    })
}

pub fn document(rounds: Vec<Value>) -> Value {
    json!({
        "players": [
            { "id": "randall", "name": "Randall", "created_at": "2025-01-01T00:00:00Z" },
            { "id": "jaden", "name": "Jaden", "created_at": "2025-01-01T00:00:00Z" }
        ],
        "courses": [
            course(EIGHTEEN, 18, 72.0, 120, 72),
            course(NINE, 9, 35.5, 115, 36)
        ],
        "rounds": rounds
    })
}

/// A season for randall mixing nines and eighteens, plus a few for jaden.
pub fn season() -> Value {
    let mut rounds = Vec::new();
    for i in 0..14 {
        let date = format!("2026-03-{:02}", i + 1);
        if i % 4 == 0 {
            rounds.push(round(&format!("r{i}"), "randall", &date, EIGHTEEN, 9, 44 + i % 3));
        } else if i % 4 == 1 {
            rounds.push(round(&format!("r{i}"), "randall", &date, NINE, 9, 42 + i % 5));
        } else {
            rounds.push(round(&format!("r{i}"), "randall", &date, EIGHTEEN, 18, 84 + i % 7));
        }
    }
    for i in 0..3 {
        let date = format!("2026-03-{:02}", 2 * i + 2);
        rounds.push(round(&format!("j{i}"), "jaden", &date, EIGHTEEN, 18, 100 - i));
    }
    document(rounds)
}

pub fn store(doc: Value) -> JsonRoundStore {
    JsonRoundStore::from_json_value(doc).expect("fixture document loads")
}

/// Rounds joined with courses straight from a fixture document.
pub fn rounds_with_course(doc: &Value, player: PlayerId) -> Vec<RoundWithCourse> {
    let courses: Vec<Course> = serde_json::from_value(doc["courses"].clone()).unwrap();
    let rounds: Vec<Round> = serde_json::from_value(doc["rounds"].clone()).unwrap();
    rounds
        .into_iter()
        .filter(|r| r.player_id == player)
        .map(|round| {
            let course = courses
                .iter()
                .find(|c| c.id == round.course_id)
                .cloned()
                .unwrap();
            RoundWithCourse { round, course }
        })
        .collect()
}
