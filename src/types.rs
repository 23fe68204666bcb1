//! Payload types carried by [`SystemError`](crate::SystemError).
//!
//! Each payload is also a standalone error, so host code can raise it directly and
//! let [`normalize`](crate::normalize) wrap it at the boundary. String fields are
//! dropped from the wire when empty and default to empty when missing.

use serde::{Deserialize, Serialize};

/// The caller's request was malformed.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[error("invalid request: {message}")]
pub struct InvalidRequest {
    /// Why the request was rejected. Wire name `error`.
    #[serde(rename = "error", default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl InvalidRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The referenced contract does not exist.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[error("no such contract: {address}")]
pub struct NoSuchContract {
    /// Address the caller referenced. Wire name `addr`.
    #[serde(rename = "addr", default, skip_serializing_if = "String::is_empty")]
    pub address: String,
}

impl NoSuchContract {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// A failure with no further detail. Encodes as `{}`.
#[derive(thiserror::Error, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("unknown system error")]
pub struct Unknown {}

/// The request names an operation the receiver does not implement.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[error("unsupported request: {kind}")]
pub struct UnsupportedRequest {
    /// Name of the request type the receiver does not handle.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl UnsupportedRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}
