//! The API's root resource.

use axum::http::StatusCode;
use axum_macros::debug_handler;
use serde::Serialize;

use crate::api::{Json, Response};

/// A `GET` response body for this API route.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct GetResponse {
    /// A human-readable identification of the API.
    pub message: &'static str,
}

/// Returns a welcome message identifying the API.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[allow(clippy::unused_async)] // Axum route handlers must be async.
#[debug_handler]
pub async fn get() -> Response<GetResponse> {
    Ok((
        StatusCode::OK,
        Json(GetResponse {
            message: "Notion to Website API",
        }),
    ))
}
