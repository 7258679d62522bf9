//! Error wrapper for the HTTP edge.
//!
//! Wraps [`EnvelopeError`] and implements [`IntoResponse`] so handlers can
//! return [`RespondResult`] directly from axum routes.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use jsend_core::EnvelopeError;

// Literal body for the case where the envelope itself cannot be encoded, so
// the fallback path has nothing left that can fail.
const ENCODING_FALLBACK_BODY: &str =
    r#"{"status":"error","message":"Failed to encode response body"}"#;

/// An envelope that could not be built or encoded.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RespondError(#[from] pub EnvelopeError);

/// Convenience type alias for builder and handler return values.
pub type RespondResult = Result<Response, RespondError>;

impl IntoResponse for RespondError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to build response envelope");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json")],
            ENCODING_FALLBACK_BODY,
        )
            .into_response()
    }
}
