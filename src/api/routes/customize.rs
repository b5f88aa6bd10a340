//! AI customization of website records.

use axum::http::StatusCode;
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::{
    api::{Json, Response},
    website::Status,
};

/// A `POST` request body for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PostRequest {
    /// The ID of the website to customize. Accepted without checking that the record exists.
    pub website_id: String,

    /// The customization prompt.
    pub prompt: String,
}

/// Acknowledges an AI customization prompt for a website.
///
/// Prompt processing is stubbed: the stored record is left untouched, and the response only
/// echoes the acknowledgement the frontend expects.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[allow(clippy::unused_async)] // Axum route handlers must be async.
#[debug_handler]
pub async fn post(Json(body): Json<PostRequest>) -> Response<PostResponse> {
    tracing::info!(website_id = %body.website_id, "acknowledging customization");

    Ok((
        StatusCode::OK,
        Json(PostResponse {
            website_id: body.website_id,
            message: format!("Applied changes: {}", body.prompt),
            status: Status::Updated,
        }),
    ))
}

/// A `POST` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct PostResponse {
    /// The ID of the website the prompt was submitted for.
    pub website_id: String,

    /// A description of the changes that would have been applied.
    pub message: String,

    /// The acknowledged lifecycle status (always `updated`).
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Json;

    #[tokio::test]
    async fn echoes_the_prompt_without_touching_the_store() {
        let (_status, Json(response)) = post(Json(PostRequest {
            website_id: "website_deadbeef".into(),
            prompt: "swap the hero image".into(),
        }))
        .await
        .expect("customization should always be acknowledged");

        assert_eq!(response.website_id, "website_deadbeef");
        assert_eq!(response.status, Status::Updated);
        assert!(
            response.message.contains("swap the hero image"),
            "message should contain the prompt: {}",
            response.message
        );
    }
}
