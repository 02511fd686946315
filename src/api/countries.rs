//! Visited-countries API endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::errors::{messages, AppError};
use crate::models::CountryList;
use crate::AppState;

/// GET /api/countries - Visited countries for the map widget.
pub async fn list_countries(State(state): State<AppState>) -> ApiResult<CountryList> {
    let countries = state
        .repo
        .list_countries()
        .await
        .map_err(AppError::upstream(messages::COUNTRIES_FAILED))?;

    Ok(Json(countries))
}
