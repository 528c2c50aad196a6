use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable, is not json, or is not an
/// object whose `players`, `courses` and `rounds` keys (when present) are arrays
pub fn check_readable_round_document(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The round document '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The round document '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The round document '{file}' is not valid json: {e}"))?;
    validate_document_shape(&json)?;
    Ok(path)
}

/// Expected shape:
/// { "players": [{"id", "name", "created_at"}...]
/// , "courses": [{"id", "name", "tee", "holes", "course_rating", "slope_rating", "par", ...}...]
/// , "rounds": [{"id", "player_id", "played_at", "course_id", "holes", "score", ...}...]
/// }
///
/// # Errors
///
/// Will return `Err` if the json is not in the expected shape
fn validate_document_shape(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The round document must be a json object.".to_string());
    };

    let expected_keys = ["players", "courses", "rounds", "exportedAt"];
    for key in object.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "Unexpected key '{key}' in the round document. Expected keys: {expected_keys:?}"
            ));
        }
    }

    for key in ["players", "courses", "rounds"] {
        if let Some(value) = object.get(key) {
            let Some(items) = value.as_array() else {
                return Err(format!("The json key {key} must be an array."));
            };
            if items.iter().any(|item| !item.is_object()) {
                return Err(format!("The json key {key} must contain only objects."));
            }
        }
    }

    Ok(())
}
