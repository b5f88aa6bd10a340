//! The read-only catalog of available website templates.

use axum::http::StatusCode;
use axum_macros::debug_handler;
use serde::Serialize;

use crate::{
    api::{Json, Response},
    templates::{Template, CATALOG},
};

/// A `GET` response body for this API route.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct GetResponse {
    /// Every available template, in display order.
    pub templates: &'static [Template],
}

/// Returns the fixed template catalog.
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
            templates: CATALOG,
        }),
    ))
}
