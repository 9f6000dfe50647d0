use crate::domain::model::Unit;
use crate::utils::error::{Result, StandardsError};
use regex::Regex;
use url::Url;

/// Exercises the source site publishes standards tables for.
pub const SUPPORTED_EXERCISES: [&str; 15] = [
    "bench press",
    "deadlift",
    "squat",
    "shoulder press",
    "pull ups",
    "barbell curl",
    "dips",
    "front squat",
    "bent over row",
    "power clean",
    "clean",
    "push press",
    "clean and jerk",
    "snatch",
    "clean and press",
];

/// Lowercase with inner whitespace collapsed, so "Bench  Press" matches the
/// allow-list entry.
fn canonical_name(exercise: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace
        .replace_all(exercise.trim(), " ")
        .to_ascii_lowercase()
}

pub fn is_supported(exercise: &str) -> bool {
    SUPPORTED_EXERCISES.contains(&canonical_name(exercise).as_str())
}

/// Form the retrieval target for an exercise: `<base>/<slug>/<unit>`.
/// Unsupported exercises are rejected here, before any fetch happens.
pub fn build_target(base_url: &str, exercise: &str, unit: Unit) -> Result<Url> {
    let name = canonical_name(exercise);
    if !SUPPORTED_EXERCISES.contains(&name.as_str()) {
        return Err(StandardsError::UnsupportedExercise {
            name: exercise.to_string(),
        });
    }
    let slug = name.replace(' ', "-");
    let joined = format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        slug,
        unit.as_str()
    );
    Url::parse(&joined).map_err(|e| StandardsError::ConfigError {
        message: format!("invalid target URL {:?}: {}", joined, e),
    })
}
