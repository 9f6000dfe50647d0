pub mod engine;
pub mod export;
pub mod extractor;
pub mod markup;
pub mod pipeline;
pub mod resolver;
pub mod target;

pub use crate::domain::model::{Row, Table, TableSet, TierResult};
pub use crate::domain::ports::{ConfigProvider, DocumentSource, Pipeline};
pub use crate::utils::error::Result;
