//! Axum edge for the response envelope: builders that pair an envelope with
//! an HTTP status code and serialize it to a JSON response.
//!
//! Handlers hold a [`Responder`] and pick the builder that matches the
//! outcome:
//!
//! ```ignore
//! async fn show(State(state): State<AppState>, Path(id): Path<String>) -> RespondResult {
//!     let respond = Responder::new();
//!     let Ok(id) = Uuid::parse_str(&id) else {
//!         return respond.invalid_uuid();
//!     };
//!     match state.repo.find(id).await {
//!         Some(record) => respond.success(record),
//!         None => respond.record_not_found(),
//!     }
//! }
//! ```

pub mod error;
pub mod respond;

pub use error::{RespondError, RespondResult};
pub use respond::Responder;

pub use jsend_core::{Envelope, EnvelopeError, ErrorItem, Meta};
