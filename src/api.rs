//! The HTTP API: its routes, error type, and response plumbing.

pub mod routes;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use axum_macros::FromRequest;
use serde::Serialize;
use thiserror::Error;

/// The response type for an API route handler.
pub type Response<T> = Result<(StatusCode, Json<T>), Error>;

/// An error response from an API route.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request body couldn't be deserialized.
    #[error("{0}")]
    RequestBody(#[from] JsonRejection),

    /// The requested API route doesn't exist.
    #[error("Not Found")]
    RouteNotFound,

    /// No website record has the requested ID.
    #[error("Website not found")]
    WebsiteNotFound,

    /// Any other error while processing the request.
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl Error {
    /// The HTTP status code for this error.
    const fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound | Self::WebsiteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::Internal(error.into())
    }
}

/// The body of an API error response.
#[derive(Serialize, Debug)]
struct ErrorBody {
    /// The error message.
    detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> AxumResponse {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            axum::Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// A JSON request or response body, with rejections mapped to [`Error`].
#[derive(FromRequest, Clone, Copy, PartialEq, Eq, Debug)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> AxumResponse {
        axum::Json(self.0).into_response()
    }
}
