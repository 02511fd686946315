//! Notion upstream access.
//!
//! Handlers never talk to reqwest directly; they go through [`ContentSource`] so the HTTP
//! client can be swapped for an in-memory source in tests.

mod client;
mod model;
mod query;

pub use client::*;
pub use model::*;
pub use query::*;

use async_trait::async_trait;

/// Read operations the site needs from the content database service.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Query a database and return the first page of matching rows.
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<QueryResponse, NotionError>;

    /// List the child blocks of a page in stored order (first page only).
    async fn list_block_children(&self, block_id: &str) -> Result<BlockList, NotionError>;
}

/// Upstream failure detail. Logged for operators, never returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionError {
    /// The request could not be sent or the response body could not be read
    Transport(String),
    /// Notion answered with a non-success status
    Status { status: u16, message: String },
    /// The response or one of its payloads did not have the expected shape
    Decode(String),
}

impl std::fmt::Display for NotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotionError::Transport(msg) => write!(f, "transport error: {}", msg),
            NotionError::Status { status, message } => {
                write!(f, "upstream returned {}: {}", status, message)
            }
            NotionError::Decode(msg) => write!(f, "unexpected data shape: {}", msg),
        }
    }
}

impl std::error::Error for NotionError {}

impl From<serde_json::Error> for NotionError {
    fn from(err: serde_json::Error) -> Self {
        NotionError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for NotionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            NotionError::Decode(err.to_string())
        } else {
            NotionError::Transport(err.to_string())
        }
    }
}
