//! Framework-agnostic response envelope types.
//!
//! Every API response body is one of three shapes, discriminated by a
//! `status` field: `success` (the request worked), `fail` (the client sent
//! something wrong), or `error` (the server broke). This crate models those
//! shapes and the error taxonomy around building them; the HTTP edge that
//! pairs an envelope with a status code lives in `jsend-axum`.

pub mod envelope;
pub mod error;

pub use envelope::{Envelope, ErrorItem, Meta};
pub use error::EnvelopeError;
