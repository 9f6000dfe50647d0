use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, StandardsError};

/// Optional TOML overrides for the fetch collaborator. Everything else is
/// per-invocation and stays on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| StandardsError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}
