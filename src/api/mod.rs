//! REST API module.
//!
//! Read-only endpoints consumed by the site front end.

mod countries;
mod posts;

pub use countries::*;
pub use posts::*;

use axum::Json;

use crate::errors::AppError;

/// Handler result: a JSON body on success, an `{error}` body otherwise.
pub type ApiResult<T> = Result<Json<T>, AppError>;
