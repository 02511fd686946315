//! Post API endpoints.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiResult;
use crate::errors::{messages, AppError};
use crate::models::{PostContent, PostList};
use crate::AppState;

/// Query string of `GET /api/post`.
#[derive(Debug, Deserialize)]
pub struct PostParams {
    #[serde(default)]
    pub slug: Option<String>,
}

/// GET /api/posts - List published posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<PostList> {
    let posts = state
        .repo
        .list_posts()
        .await
        .map_err(AppError::upstream(messages::POSTS_FAILED))?;

    Ok(Json(PostList { posts }))
}

/// GET /api/post?slug=... - Get one published post with its content blocks.
pub async fn get_post(
    State(state): State<AppState>,
    params: Result<Query<PostParams>, QueryRejection>,
) -> ApiResult<PostContent> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Rejected post query: {}", rejection);
        AppError::BadRequest(messages::INVALID_QUERY.to_string())
    })?;

    let Some(slug) = params.slug.filter(|s| !s.is_empty()) else {
        return Err(AppError::BadRequest(messages::MISSING_SLUG.to_string()));
    };

    match state.repo.get_post(&slug).await {
        Ok(Some(post)) => Ok(Json(post)),
        Ok(None) => Err(AppError::NotFound(messages::POST_NOT_FOUND.to_string())),
        Err(e) => Err(AppError::upstream(messages::POST_FAILED)(e)),
    }
}
