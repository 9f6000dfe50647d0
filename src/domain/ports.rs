use crate::domain::model::{Gender, TableSet, TierResult, Unit};
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Retrieves the raw document behind a locator. The production impl speaks
/// HTTP; tests substitute canned documents.
pub trait DocumentSource: Send + Sync {
    fn fetch_document(
        &self,
        target: &Url,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Parameters of one lookup request, independent of where they came from
/// (CLI flags, config file, test fixture).
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn exercise(&self) -> &str;
    fn gender(&self) -> Gender;
    fn unit(&self) -> Unit;
    fn body_weight(&self) -> f64;
    fn one_rep_max(&self) -> u32;
    fn decode_entities(&self) -> bool;
    fn cell_separator(&self) -> &str;
}

/// The three lookup stages. Only the fetch touches the outside world;
/// extract and resolve are pure.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    fn extract(&self, document: &str) -> Result<TableSet>;
    fn resolve(&self, tables: &TableSet) -> Result<TierResult>;
}
