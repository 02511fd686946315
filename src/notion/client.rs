//! reqwest-backed Notion client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{BlockList, ContentSource, DatabaseQuery, ErrorBody, NotionError, QueryResponse};
use crate::config::Config;

/// Largest page size the block children endpoint accepts.
const BLOCK_PAGE_SIZE: u32 = 100;

/// HTTP client for the Notion REST API.
///
/// `reqwest::Client` pools connections internally, so one instance is built at startup and
/// shared by every request.
#[derive(Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
    version: String,
}

impl NotionClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.notion_api_base.clone(),
            token: config.notion_token.clone(),
            version: config.notion_version.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach auth headers, send, and decode a JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NotionError> {
        let response = request
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotionError::Status {
                status: status.as_u16(),
                message: status_message(response.text().await),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Detail for a non-success status: Notion's `code: message` when the body is an error
/// object, the raw body otherwise, or the read failure itself.
fn status_message<E: std::fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) if !err.message.is_empty() => format!("{}: {}", err.code, err.message),
            _ => body,
        },
        Err(e) => {
            tracing::warn!("Failed to read upstream error body: {}", e);
            format!("<error body unreadable: {}>", e)
        }
    }
}

#[async_trait]
impl ContentSource for NotionClient {
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<QueryResponse, NotionError> {
        let url = format!("{}/databases/{}/query", self.base_url, database_id);
        tracing::debug!("Querying Notion database {}", database_id);
        self.send(self.http.post(url).json(&query.to_body())).await
    }

    async fn list_block_children(&self, block_id: &str) -> Result<BlockList, NotionError> {
        let url = format!("{}/blocks/{}/children", self.base_url, block_id);
        tracing::debug!("Listing children of block {}", block_id);
        self.send(
            self.http
                .get(url)
                .query(&[("page_size", BLOCK_PAGE_SIZE)]),
        )
        .await
    }
}
