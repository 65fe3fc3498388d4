///! HTTP transport for the ARRL advanced call sign search

use reqwest::{Client, StatusCode};

use super::types::CallsignQuery;
use crate::config::SearchConfig;
use crate::error::SearchError;

/// Posts search forms to the registry and hands back the result page body.
pub struct RegistryClient {
    client: Client,
    url: String,
}

impl RegistryClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(SearchError::Transport)?;

        Ok(Self {
            client,
            url: config.registry_url.clone(),
        })
    }

    /// Send one search request. Only a 200 response counts as success.
    pub async fn search(&self, query: &CallsignQuery) -> Result<String, SearchError> {
        tracing::debug!("Searching {} for {}", self.url, query.callsign());

        let response = self
            .client
            .post(&self.url)
            .form(&query.payload())
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Registry answered HTTP {}", status);
            return Err(SearchError::BadStatus(status));
        }

        response.text().await.map_err(SearchError::Transport)
    }
}
