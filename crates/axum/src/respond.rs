//! Response builders pairing envelopes with HTTP status codes.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use jsend_core::{Envelope, EnvelopeError, ErrorItem, Meta};
use serde::Serialize;

use crate::error::RespondResult;

/// Builds JSON responses in the standard envelope shapes.
///
/// Stateless and `Copy`; handlers own one and call a builder per request.
/// Every builder is a pure function of its arguments, so the same call yields
/// a byte-identical body and concurrent use needs no coordination.
///
/// Builders come in pairs: a short form with the contract defaults and a
/// `*_with` form taking every parameter. Serialization goes through
/// `serde_json` directly so encoding failures propagate instead of being
/// swallowed into an opaque 500, and unicode and forward slashes are emitted
/// literally.
#[derive(Debug, Default, Clone, Copy)]
pub struct Responder;

impl Responder {
    pub fn new() -> Self {
        Responder
    }

    /// `success` envelope with status 200 and an empty (but present) `meta`.
    pub fn success<T: Serialize>(&self, data: T) -> RespondResult {
        self.success_with(data, StatusCode::OK, Meta::new())
    }

    /// `success` envelope with an explicit status code and metadata.
    ///
    /// `meta` is always emitted, empty map included.
    pub fn success_with<T: Serialize>(
        &self,
        data: T,
        code: StatusCode,
        meta: Meta,
    ) -> RespondResult {
        self.encode(code, &Envelope::success(data, meta))
    }

    /// `fail` envelope with status 400 and an empty (but present) `meta`.
    pub fn fail(&self, errors: Vec<ErrorItem>) -> RespondResult {
        self.fail_with(errors, StatusCode::BAD_REQUEST, Meta::new())
    }

    /// `fail` envelope with an explicit status code and metadata.
    ///
    /// The error list is echoed verbatim; no shape validation.
    pub fn fail_with(
        &self,
        errors: Vec<ErrorItem>,
        code: StatusCode,
        meta: Meta,
    ) -> RespondResult {
        self.encode(code, &Envelope::<()>::fail(errors, meta))
    }

    /// `error` envelope with status 500 and no `data` key.
    pub fn error(&self, message: impl Into<String>) -> RespondResult {
        self.error_with(message, StatusCode::INTERNAL_SERVER_ERROR, None::<()>)
    }

    /// `error` envelope with an explicit status code and optional payload.
    ///
    /// The `data` key appears only when `data` is `Some`; a blank message is
    /// rejected as caller misuse. Server-error responses are also logged.
    pub fn error_with<T: Serialize>(
        &self,
        message: impl Into<String>,
        code: StatusCode,
        data: Option<T>,
    ) -> RespondResult {
        let envelope = Envelope::error(message, data)?;
        if code.is_server_error() {
            if let Envelope::Error { message, .. } = &envelope {
                tracing::error!(status = code.as_u16(), %message, "Error response");
            }
        }
        self.encode(code, &envelope)
    }

    /// `success` envelope with a `null` payload, no `meta` key, status 200.
    pub fn no_content(&self) -> RespondResult {
        self.no_content_with(StatusCode::OK)
    }

    /// Same as [`no_content`](Self::no_content) with an explicit status code.
    pub fn no_content_with(&self, code: StatusCode) -> RespondResult {
        self.encode(code, &Envelope::no_content())
    }

    /// 400 `fail` response for a malformed uuid path parameter.
    pub fn invalid_uuid(&self) -> RespondResult {
        self.fail(vec![ErrorItem::invalid_uuid()])
    }

    /// 404 `fail` response for a lookup that matched nothing.
    pub fn record_not_found(&self) -> RespondResult {
        self.fail_with(
            vec![ErrorItem::record_not_found()],
            StatusCode::NOT_FOUND,
            Meta::new(),
        )
    }

    /// 400 `fail` response for a request with no payload.
    pub fn empty_payload(&self) -> RespondResult {
        self.fail(vec![ErrorItem::empty_payload()])
    }

    /// 400 `fail` response for a missing mandatory field.
    pub fn required(&self, field: &str) -> RespondResult {
        self.fail(vec![ErrorItem::required(field)])
    }

    /// 400 `fail` response for a reference to an unknown column.
    pub fn column_not_found(&self, column: &str) -> RespondResult {
        self.fail(vec![ErrorItem::column_not_found(column)])
    }

    fn encode<T: Serialize>(&self, code: StatusCode, envelope: &Envelope<T>) -> RespondResult {
        let body = serde_json::to_vec(envelope).map_err(EnvelopeError::from)?;
        Ok((code, [(header::CONTENT_TYPE, "application/json")], body).into_response())
    }
}
