//! All routes for the HTTP API.

pub mod convert;
pub mod customize;
pub mod preview;
pub mod root;
pub mod templates;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, AppState};

/// The API router, without middleware or state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::get))
        .route("/api/templates", get(templates::get))
        .route("/api/convert", post(convert::post))
        .route("/api/customize", post(customize::post))
        .route("/api/preview/:website_id", get(preview::get))
        .fallback(|| async { api::Error::RouteNotFound })
}

/// Builds the application with its middleware layers and state.
pub fn app(state: AppState) -> Router {
    // The frontend is served from a separate origin, so the API answers any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
