//! Conversion of Notion pages into website records.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::{
    api::{Json, Response},
    id::WebsiteId,
    website::{self, Status},
    AppState,
};

/// A `POST` request body for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PostRequest {
    /// The Notion page to convert: a raw page ID or a full `notion.so` URL.
    pub page_id: String,

    /// The ID of the template to build the website with. Informational only; not checked against
    /// the template catalog.
    pub template_id: String,

    /// An optional Notion integration token for private pages.
    pub notion_token: Option<String>,
}

/// Converts a Notion page into a new website record and returns its preview location.
///
/// Content fetching is stubbed: the record is stored with a fixed mock payload instead of the
/// page's real blocks.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler(state = AppState)]
pub async fn post(
    State(state): State<AppState>,
    Json(body): Json<PostRequest>,
) -> Response<PostResponse> {
    let page_id = website::extract_page_id(&body.page_id);

    tracing::info!(page_id, "converting Notion page");

    if body.notion_token.is_some() {
        // A real converter would authenticate with the Notion API here.
        tracing::info!("using provided Notion token for authentication");
    }

    let mut website_id = WebsiteId::generate();
    let content = website::mock_content();

    loop {
        match sqlx::query(
            "INSERT INTO websites (website_id, notion_page_id, template_id, status, content)
                VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(website_id.to_string())
        .bind(page_id)
        .bind(&body.template_id)
        .bind(Status::Created.as_str())
        .bind(&content)
        .execute(&state.db_pool)
        .await
        {
            Err(sqlx::Error::Database(error)) if error.constraint() == Some("websites_pkey") => {
                website_id.reroll();
            }
            result => {
                result?;
                break;
            }
        }
    }

    Ok((
        StatusCode::OK,
        Json(PostResponse {
            website_id,
            status: Status::Created,
            preview_url: format!("/preview/{website_id}"),
        }),
    ))
}

/// A `POST` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct PostResponse {
    /// The new website's unique ID.
    pub website_id: WebsiteId,

    /// The new record's lifecycle status (always `created`).
    pub status: Status,

    /// The path the new website can be previewed at.
    pub preview_url: String,
}
