//! The Notion-to-website backend web server.

pub mod api;
pub mod db;
pub mod id;
pub mod templates;
pub mod website;

use sqlx::PgPool;

/// State shared across all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The SQLx database pool.
    pub db_pool: PgPool,
}
