//! Post models.

use serde::Serialize;

/// One row of the posts list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Publish date as stored upstream, `null` when unset
    pub date: Option<String>,
    /// Short label such as "Jan 2024"; empty when there is no date
    pub month_year: String,
    pub tag: String,
    pub excerpt: String,
}

/// Body of `GET /api/posts`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostList {
    pub posts: Vec<PostSummary>,
}

/// One content block with its flattened text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Body of `GET /api/post`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    pub title: String,
    /// Long label such as "January 2024"
    pub month_year: String,
    pub tag: String,
    pub blocks: Vec<ContentBlock>,
}
