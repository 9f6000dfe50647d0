use crate::domain::model::TierResult;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives the lookup stages in order: one fetch, one extraction, one
/// resolution per run.
pub struct StandardsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> StandardsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<TierResult> {
        tracing::info!("Fetching standards document...");
        let document = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} bytes", document.len());

        tracing::info!("Extracting tables...");
        let tables = self.pipeline.extract(&document)?;
        tracing::info!("Extracted {} table(s)", tables.len());

        tracing::info!("Resolving tier...");
        let result = self.pipeline.resolve(&tables)?;
        tracing::debug!("Resolved: {:?}", result);

        Ok(result)
    }
}
