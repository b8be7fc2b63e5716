//! Parse and decode errors.
//!
//! Resolution itself never fails. These errors only come from turning
//! backend strings and JSON payloads into typed values.

/// A backend string did not name a known value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown card type `{0}`")]
    UnknownCardType(String),

    #[error("unknown infrastructure state `{0}`")]
    UnknownState(String),
}

/// A JSON payload could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed card payload: {0}")]
    Card(#[source] serde_json::Error),

    #[error("malformed infrastructure payload: {0}")]
    Infrastructure(#[source] serde_json::Error),

    #[error("malformed resolver config: {0}")]
    Config(#[source] serde_json::Error),
}
