use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::file::FileConfig;
use crate::domain::model::{Gender, Unit};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};

pub const DEFAULT_BASE_URL: &str = "https://strengthlevel.com/strength-standards";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lift-standards")]
#[command(about = "Look up strength-standards tiers for an exercise")]
pub struct CliConfig {
    /// Exercise to look up, e.g. "bench press".
    #[arg(long)]
    pub exercise: String,

    #[arg(long, value_enum)]
    pub gender: Gender,

    /// Body weight in the selected unit.
    #[arg(long)]
    pub body_weight: f64,

    /// Current one-rep-max in the selected unit.
    #[arg(long)]
    pub one_rep_max: u32,

    #[arg(long, value_enum, default_value_t = Unit::Lb)]
    pub unit: Unit,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Decode character references while extracting cells.
    #[arg(long)]
    pub decode_entities: bool,

    /// Separator joining text fragments within one cell.
    #[arg(long, default_value = " ")]
    pub cell_separator: String,

    /// TOML file with base_url / user_agent / timeout_seconds overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "lift-standards/0.1")]
    pub user_agent: String,

    #[arg(long, default_value = "15")]
    pub timeout_seconds: u64,

    /// Print the report as JSON instead of the summary sentence.
    #[arg(long)]
    pub json: bool,

    /// Write the selected gender's table as CSV to this path and exit.
    #[arg(long)]
    pub dump_table: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Apply file-level overrides. Values present in the file win over the
    /// corresponding flags.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(base_url) = &file.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(user_agent) = &file.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(timeout_seconds) = file.timeout_seconds {
            self.timeout_seconds = timeout_seconds;
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn exercise(&self) -> &str {
        &self.exercise
    }

    fn gender(&self) -> Gender {
        self.gender
    }

    fn unit(&self) -> Unit {
        self.unit
    }

    fn body_weight(&self) -> f64 {
        self.body_weight
    }

    fn one_rep_max(&self) -> u32 {
        self.one_rep_max
    }

    fn decode_entities(&self) -> bool {
        self.decode_entities
    }

    fn cell_separator(&self) -> &str {
        &self.cell_separator
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("exercise", &self.exercise)?;
        validate_positive_number("body_weight", self.body_weight, 1.0)?;
        validate_positive_number("one_rep_max", self.one_rep_max, 1)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            exercise: "bench press".to_string(),
            gender: Gender::Male,
            body_weight: 150.0,
            one_rep_max: 140,
            unit: Unit::Lb,
            base_url: DEFAULT_BASE_URL.to_string(),
            decode_entities: false,
            cell_separator: " ".to_string(),
            config: None,
            user_agent: "lift-standards/0.1".to_string(),
            timeout_seconds: 15,
            json: false,
            dump_table: None,
            verbose: false,
        }
    }

    #[test]
    fn default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn zero_inputs_fail_validation() {
        let mut config = base_config();
        config.one_rep_max = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.body_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn file_values_override_flags() {
        let mut config = base_config();
        config.apply_file(&FileConfig {
            base_url: Some("https://mirror.example/standards".to_string()),
            user_agent: None,
            timeout_seconds: Some(30),
        });
        assert_eq!(config.base_url, "https://mirror.example/standards");
        assert_eq!(config.user_agent, "lift-standards/0.1");
        assert_eq!(config.timeout_seconds, 30);
    }
}
