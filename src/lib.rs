pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::HttpDocumentSource;
pub use crate::core::engine::StandardsEngine;
pub use crate::core::extractor::{extract_tables, ExtractOptions};
pub use crate::core::pipeline::LookupPipeline;
pub use crate::core::resolver::{resolve_tier, select_table};
pub use crate::core::target::{build_target, SUPPORTED_EXERCISES};
pub use crate::domain::model::{Gender, TierReport, TierResult, Unit};
pub use crate::utils::error::{Result, StandardsError};
