//! General database handling.

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Initializes the SQLx database pool and runs pending database migrations, returning the pool
/// once complete.
///
/// # Errors
///
/// Returns an error if the initial database connection or its migrations fail.
pub async fn initialize(db_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(db_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
