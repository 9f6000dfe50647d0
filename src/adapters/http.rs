use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::domain::ports::DocumentSource;
use crate::utils::error::Result;

/// Production document source: one shared client with an explicit user
/// agent and request timeout.
#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    client: Client,
}

impl HttpDocumentSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpDocumentSource {
    async fn fetch_document(&self, target: &Url) -> Result<String> {
        let response = self.client.get(target.clone()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
