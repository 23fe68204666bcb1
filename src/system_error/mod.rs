pub mod wire;

use serde::{Deserialize, Serialize};

use crate::types::{InvalidRequest, NoSuchContract, Unknown, UnsupportedRequest};
use wire::SystemErrorRecord;

/// Failure raised by the native execution layer, in the shape that crosses the
/// host/contract boundary.
///
/// Exactly one variant is active. On the wire it is a [`SystemErrorRecord`] with the
/// matching field populated and the rest omitted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SystemErrorRecord", try_from = "SystemErrorRecord")]
pub enum SystemError {
    #[error(transparent)]
    InvalidRequest(InvalidRequest),
    #[error(transparent)]
    NoSuchContract(NoSuchContract),
    #[error(transparent)]
    Unknown(Unknown),
    #[error(transparent)]
    UnsupportedRequest(UnsupportedRequest),
}

/// Discriminant of a [`SystemError`]; string forms match the wire field names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SystemErrorKind {
    InvalidRequest,
    NoSuchContract,
    Unknown,
    UnsupportedRequest,
}

impl SystemError {
    pub fn kind(&self) -> SystemErrorKind {
        match self {
            Self::InvalidRequest(_) => SystemErrorKind::InvalidRequest,
            Self::NoSuchContract(_) => SystemErrorKind::NoSuchContract,
            Self::Unknown(_) => SystemErrorKind::Unknown,
            Self::UnsupportedRequest(_) => SystemErrorKind::UnsupportedRequest,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(InvalidRequest::new(message))
    }

    pub fn no_such_contract(address: impl Into<String>) -> Self {
        Self::NoSuchContract(NoSuchContract::new(address))
    }

    pub fn unknown() -> Self {
        Self::Unknown(Unknown {})
    }

    pub fn unsupported_request(kind: impl Into<String>) -> Self {
        Self::UnsupportedRequest(UnsupportedRequest::new(kind))
    }
}

macro_rules! impl_from_payload {
    ($($payload:ident),+ $(,)?) => {
        $(
            impl From<$payload> for SystemError {
                fn from(payload: $payload) -> Self {
                    Self::$payload(payload)
                }
            }

            impl From<&$payload> for SystemError {
                fn from(payload: &$payload) -> Self {
                    Self::$payload(payload.clone())
                }
            }
        )+
    };
}

impl_from_payload!(InvalidRequest, NoSuchContract, Unknown, UnsupportedRequest);
