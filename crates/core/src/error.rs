/// Errors raised while constructing or encoding a response envelope.
///
/// Both variants reflect conditions that should surface directly to the
/// caller: an unserializable payload or a programmer mistake upstream. There
/// is no retry or recovery path in a pure formatting layer.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// JSON encoding could not represent the supplied payload.
    #[error("Encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// A mandatory argument was blank or missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
