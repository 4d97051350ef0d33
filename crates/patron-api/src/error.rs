//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Handlers never fail on the content
/// of a collective; the only failure modes are the lookup itself.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The requested slug resolves to no collective.
  #[error("no collective with slug {0:?}")]
  UnknownCollective(String),

  /// The directory backend failed the lookup.
  #[error("directory lookup failed: {0}")]
  Directory(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::UnknownCollective(_) => StatusCode::NOT_FOUND,
      ApiError::Directory(source) => {
        tracing::error!(error = %source, "directory lookup failed");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
