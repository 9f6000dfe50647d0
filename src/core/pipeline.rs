use crate::core::extractor::{extract_tables, ExtractOptions};
use crate::core::resolver::{resolve_tier, select_table};
use crate::core::target::build_target;
use crate::domain::model::{TableSet, TierResult};
use crate::domain::ports::{ConfigProvider, DocumentSource, Pipeline};
use crate::utils::error::{Result, StandardsError};

pub struct LookupPipeline<D: DocumentSource, C: ConfigProvider> {
    source: D,
    config: C,
}

impl<D: DocumentSource, C: ConfigProvider> LookupPipeline<D, C> {
    pub fn new(source: D, config: C) -> Self {
        Self { source, config }
    }
}

#[async_trait::async_trait]
impl<D: DocumentSource, C: ConfigProvider> Pipeline for LookupPipeline<D, C> {
    async fn fetch(&self) -> Result<String> {
        let target = build_target(
            self.config.base_url(),
            self.config.exercise(),
            self.config.unit(),
        )?;
        tracing::debug!("Requesting standards page: {}", target);
        let document = self.source.fetch_document(&target).await?;
        tracing::debug!("Received {} bytes", document.len());
        Ok(document)
    }

    fn extract(&self, document: &str) -> Result<TableSet> {
        let options = ExtractOptions {
            decode_entities: self.config.decode_entities(),
            cell_separator: self.config.cell_separator().to_string(),
        };
        let tables = extract_tables(document, &options);
        if tables.is_empty() {
            return Err(StandardsError::MalformedTable {
                reason: "document contains no tables".to_string(),
            });
        }
        Ok(tables)
    }

    fn resolve(&self, tables: &TableSet) -> Result<TierResult> {
        let table = select_table(tables, self.config.gender())?;
        resolve_tier(table, self.config.body_weight(), self.config.one_rep_max())
    }
}
