//! The three-variant response envelope and the error-item catalog.
//!
//! `meta` rides along on success/fail envelopes whenever it is supplied,
//! including as an empty map; the no-content envelope supplies none, so the
//! key is absent there. Error envelopes never carry `meta`, and their `data`
//! key appears only when a payload was explicitly provided. Envelopes are
//! built fresh per call, serialized once, and discarded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Side-channel metadata (pagination, tracing) for success/fail envelopes.
///
/// An `IndexMap` keeps key order stable under repeated serialization, so
/// identical calls produce byte-identical bodies.
pub type Meta = IndexMap<String, serde_json::Value>;

/// Top-level response body, tagged by a `status` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T = serde_json::Value> {
    Success {
        data: T,
        #[serde(skip_serializing_if = "Option::is_none")]
        meta: Option<Meta>,
    },
    Fail {
        data: Vec<ErrorItem>,
        #[serde(skip_serializing_if = "Option::is_none")]
        meta: Option<Meta>,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<T>,
    },
}

impl<T> Envelope<T> {
    /// Success envelope. `meta` is emitted even when the map is empty.
    pub fn success(data: T, meta: Meta) -> Self {
        Envelope::Success {
            data,
            meta: Some(meta),
        }
    }

    /// Fail envelope. The error list is echoed verbatim, never validated.
    pub fn fail(errors: Vec<ErrorItem>, meta: Meta) -> Self {
        Envelope::Fail {
            data: errors,
            meta: Some(meta),
        }
    }

    /// Error envelope. The `data` key is emitted only for `Some`.
    ///
    /// A blank message is caller misuse and is rejected before any envelope
    /// exists.
    pub fn error(message: impl Into<String>, data: Option<T>) -> Result<Self, EnvelopeError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(EnvelopeError::InvalidArgument(
                "error envelopes require a non-blank message".into(),
            ));
        }
        Ok(Envelope::Error { message, data })
    }
}

impl Envelope<()> {
    /// Success envelope with a `null` payload and no `meta` key.
    pub fn no_content() -> Self {
        Envelope::Success {
            data: (),
            meta: None,
        }
    }
}

/// A single entry in a `fail` envelope's `data` list.
///
/// `field` is omitted from the JSON for payload-level problems rather than
/// serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub error: String,
    pub message: String,
}

impl ErrorItem {
    /// Payload-level item with no `field`.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorItem {
            field: None,
            error: error.into(),
            message: message.into(),
        }
    }

    /// Item tied to a named field.
    pub fn for_field(
        field: impl Into<String>,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ErrorItem {
            field: Some(field.into()),
            error: error.into(),
            message: message.into(),
        }
    }

    /// The supplied id is not a well-formed uuid.
    pub fn invalid_uuid() -> Self {
        Self::for_field(
            "id",
            "invalidUuidFormat",
            "The provided uuid format is invalid",
        )
    }

    /// No record matched the supplied id.
    pub fn record_not_found() -> Self {
        Self::for_field(
            "id",
            "recordNotFound",
            "The record was not found with the given id",
        )
    }

    /// The request body carried no payload at all.
    pub fn empty_payload() -> Self {
        Self::new("emptyPayload", "It was send a empty payload")
    }

    /// A mandatory field is missing from the payload.
    pub fn required(field: &str) -> Self {
        Self::for_field(
            field,
            "required",
            format!("The \"{field}\" field is required"),
        )
    }

    /// A referenced column does not exist.
    pub fn column_not_found(column: &str) -> Self {
        Self::for_field(
            column,
            "columnNotFound",
            format!("The \"{column}\" column was not found"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn success_keeps_empty_meta() {
        let envelope = Envelope::success(json!({"id": 7}), Meta::new());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"status": "success", "data": {"id": 7}, "meta": {}})
        );
    }

    #[test]
    fn fail_echoes_items_verbatim() {
        let items = vec![
            ErrorItem::for_field("name", "tooLong", "The name is too long"),
            ErrorItem::new("oops", "Something odd"),
        ];
        let envelope = Envelope::<()>::fail(items, Meta::new());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": "fail",
                "data": [
                    {"field": "name", "error": "tooLong", "message": "The name is too long"},
                    {"error": "oops", "message": "Something odd"},
                ],
                "meta": {},
            })
        );
    }

    #[test]
    fn error_omits_data_when_none() {
        let envelope = Envelope::<()>::error("boom", None).unwrap();
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"status":"error","message":"boom"}"#
        );
    }

    #[test]
    fn error_includes_data_when_some() {
        let envelope = Envelope::error("boom", Some(json!({"hint": "retry later"}))).unwrap();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"status": "error", "message": "boom", "data": {"hint": "retry later"}})
        );
    }

    #[test]
    fn error_rejects_blank_message() {
        assert_matches!(
            Envelope::<()>::error("   ", None),
            Err(EnvelopeError::InvalidArgument(_))
        );
    }

    #[test]
    fn no_content_serializes_null_data_without_meta() {
        assert_eq!(
            serde_json::to_string(&Envelope::no_content()).unwrap(),
            r#"{"status":"success","data":null}"#
        );
    }

    #[test]
    fn payload_level_item_omits_field_key() {
        let value = serde_json::to_value(ErrorItem::empty_payload()).unwrap();
        assert!(value.get("field").is_none());
        assert_eq!(value["error"], "emptyPayload");
        assert_eq!(value["message"], "It was send a empty payload");
    }

    #[test]
    fn required_quotes_the_field_name() {
        let item = ErrorItem::required("email");
        assert_eq!(item.field.as_deref(), Some("email"));
        assert_eq!(item.error, "required");
        assert_eq!(item.message, "The \"email\" field is required");
    }

    #[test]
    fn column_not_found_names_the_column() {
        let item = ErrorItem::column_not_found("age");
        assert_eq!(item.field.as_deref(), Some("age"));
        assert_eq!(item.error, "columnNotFound");
        assert_eq!(item.message, "The \"age\" column was not found");
    }

    #[test]
    fn meta_keys_keep_insertion_order() {
        let mut meta = Meta::new();
        meta.insert("page".into(), json!(2));
        meta.insert("count".into(), json!(50));
        let body = serde_json::to_string(&Envelope::success(json!(null), meta)).unwrap();
        assert_eq!(
            body,
            r#"{"status":"success","data":null,"meta":{"page":2,"count":50}}"#
        );
    }
}
