//! Read-only previews of website records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use axum_macros::debug_handler;

use crate::{
    api::{Error, Json, Response},
    website::WebsiteRecord,
    AppState,
};

/// Returns the stored fields of the website record with the given ID.
///
/// # Errors
///
/// Returns [`Error::WebsiteNotFound`] if no record has the given ID.
#[debug_handler(state = AppState)]
pub async fn get(
    State(state): State<AppState>,
    Path(website_id): Path<String>,
) -> Response<WebsiteRecord> {
    let website = sqlx::query_as::<_, WebsiteRecord>(
        "SELECT website_id, notion_page_id, template_id, status, content FROM websites
            WHERE website_id = $1",
    )
    .bind(&website_id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or(Error::WebsiteNotFound)?;

    Ok((StatusCode::OK, Json(website)))
}
