//! Website records and their conversion from Notion page references.

use serde::Serialize;
use serde_json::{json, Value};
use sqlx::FromRow;

/// The URL marker identifying a Notion page URL.
const NOTION_URL_MARKER: &str = "notion.so/";

/// The lifecycle status of a website record.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The record was created by a conversion request.
    Created,

    /// The record was acknowledged by a customization request.
    Updated,
}

impl Status {
    /// Returns the status as the text stored in the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// One persisted website record: the outcome of a single conversion request.
#[derive(FromRow, Serialize, Clone, PartialEq, Debug)]
pub struct WebsiteRecord {
    /// The website's unique ID.
    pub website_id: String,

    /// The Notion page the website was converted from.
    pub notion_page_id: String,

    /// The template the website was built with. Informational only; not checked against the
    /// template catalog.
    pub template_id: String,

    /// The stored status text (`created` or `updated`).
    pub status: String,

    /// The website's content blocks, where present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// Extracts the effective Notion page ID from a page reference.
///
/// A reference containing `notion.so/` is treated as a page URL: the page ID is the part after
/// the last `-` of the URL's last path segment. Any other reference is used verbatim.
pub fn extract_page_id(page_ref: &str) -> &str {
    let Some((_, rest)) = page_ref.split_once(NOTION_URL_MARKER) else {
        return page_ref;
    };

    let segment = rest.split('/').next_back().unwrap_or(rest);

    segment.split('-').next_back().unwrap_or(segment)
}

/// Returns the fixed content payload attached to new website records.
///
/// Stands in for fetching the page's real blocks from the Notion API.
pub fn mock_content() -> Value {
    json!({
        "title": "My Notion Page",
        "blocks": [
            { "type": "heading", "content": "Welcome to my website" },
            { "type": "paragraph", "content": "This website was generated from a Notion page" },
            { "type": "image", "url": "https://images.unsplash.com/photo-1499750310107-5fef28a66643" }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_page_id_from_url() {
        assert_eq!(
            extract_page_id("https://www.notion.so/myworkspace/My-Page-123456789"),
            "123456789"
        );
    }

    #[test]
    fn extracts_page_id_from_url_without_workspace() {
        assert_eq!(
            extract_page_id("https://notion.so/My-Page-abcdef123456"),
            "abcdef123456"
        );
    }

    #[test]
    fn passes_raw_page_ids_through() {
        assert_eq!(extract_page_id("123456789abcdef"), "123456789abcdef");
    }

    #[test]
    fn uses_whole_segment_when_undashed() {
        assert_eq!(
            extract_page_id("https://www.notion.so/myworkspace/123456789"),
            "123456789"
        );
    }

    #[test]
    fn mock_content_has_title_and_blocks() {
        let content = mock_content();

        assert_eq!(content["title"], "My Notion Page");
        assert_eq!(
            content["blocks"]
                .as_array()
                .expect("blocks should be an array")
                .len(),
            3
        );
    }
}
