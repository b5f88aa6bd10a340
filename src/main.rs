//! The server binary: loads configuration, opens the database pool, and serves the HTTP API.

use backend::{api, db, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,backend=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let address = dotenvy::var("ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let db_url = dotenvy::var("DATABASE_URL")?;

    tracing::info!("connecting to database");

    let db_pool = db::initialize(&db_url).await?;

    let app = api::routes::app(AppState {
        db_pool: db_pool.clone(),
    });

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;

    tracing::info!("shut down");

    Ok(())
}

/// Resolves once the process receives a shutdown signal (ctrl-c).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for the shutdown signal");
    }
}
