use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One table row: ordered cell strings, read by position.
pub type Row = Vec<String>;

/// One extracted table. The first row is the header row of tier labels;
/// the rows after it are data rows keyed by body-weight bucket.
pub type Table = Vec<Row>;

/// Every table found in one document, in document order. The source site
/// publishes two per page: index 0 is the male table, index 1 the female.
pub type TableSet = Vec<Table>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn table_index(self) -> usize {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Lb,
    Kg,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Lb => "lb",
            Unit::Kg => "kg",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one tier lookup. `next_tier` is `None` when the lifter has
/// passed every tabulated threshold; `next_goal` then carries the final
/// tier's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierResult {
    pub current_tier: String,
    pub next_tier: Option<String>,
    pub next_goal: u32,
}

/// Full tier labels for the abbreviated header cells the source site uses.
/// Unknown labels pass through unchanged.
pub fn tier_full_name(label: &str) -> &str {
    match label {
        "Beg." => "Beginner",
        "Nov." => "Novice",
        "Int." => "Intermediate",
        "Adv." => "Advanced",
        "Elite" => "Elite",
        other => other,
    }
}

/// A resolved lookup plus the request it answered, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TierReport {
    pub exercise: String,
    pub gender: Gender,
    pub unit: Unit,
    pub body_weight: f64,
    pub one_rep_max: u32,
    pub result: TierResult,
    pub generated_at: DateTime<Utc>,
}

impl TierReport {
    pub fn new(
        exercise: String,
        gender: Gender,
        unit: Unit,
        body_weight: f64,
        one_rep_max: u32,
        result: TierResult,
    ) -> Self {
        Self {
            exercise,
            gender,
            unit,
            body_weight,
            one_rep_max,
            result,
            generated_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> String {
        match &self.result.next_tier {
            Some(next) => format!(
                "You are currently {} at {}. The next class ({}) will be achieved at a one rep max of {} {}.",
                tier_full_name(&self.result.current_tier),
                self.exercise,
                tier_full_name(next),
                self.result.next_goal,
                self.unit,
            ),
            None => format!(
                "You are currently {} at {}, the highest class in the table (final threshold {} {}).",
                tier_full_name(&self.result.current_tier),
                self.exercise,
                self.result.next_goal,
                self.unit,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_the_next_class() {
        let report = TierReport::new(
            "bench press".to_string(),
            Gender::Male,
            Unit::Lb,
            150.0,
            140,
            TierResult {
                current_tier: "Nov.".to_string(),
                next_tier: Some("Int.".to_string()),
                next_goal: 184,
            },
        );
        assert_eq!(
            report.summary(),
            "You are currently Novice at bench press. The next class (Intermediate) will be achieved at a one rep max of 184 lb."
        );
    }

    #[test]
    fn summary_for_the_top_class() {
        let report = TierReport::new(
            "deadlift".to_string(),
            Gender::Female,
            Unit::Kg,
            70.0,
            500,
            TierResult {
                current_tier: "Elite".to_string(),
                next_tier: None,
                next_goal: 300,
            },
        );
        assert_eq!(
            report.summary(),
            "You are currently Elite at deadlift, the highest class in the table (final threshold 300 kg)."
        );
    }

    #[test]
    fn unknown_tier_labels_pass_through() {
        assert_eq!(tier_full_name("Adv."), "Advanced");
        assert_eq!(tier_full_name("BW"), "BW");
    }
}
