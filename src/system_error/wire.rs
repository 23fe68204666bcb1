use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::system_error::{SystemError, SystemErrorKind};
use crate::types::{InvalidRequest, NoSuchContract, Unknown, UnsupportedRequest};

/// Flat wire record for a [`SystemError`]: one optional field per variant, unset
/// fields omitted entirely.
///
/// A well-formed record has exactly one field set. The empty record means "no error".
/// Unrecognised variant names are rejected so they never read as "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemErrorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_request: Option<InvalidRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_such_contract: Option<NoSuchContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<Unknown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsupported_request: Option<UnsupportedRequest>,
}

impl SystemErrorRecord {
    /// Kinds of every populated field, in declaration order.
    pub fn populated(&self) -> Vec<SystemErrorKind> {
        let mut kinds = Vec::with_capacity(1);
        if self.invalid_request.is_some() {
            kinds.push(SystemErrorKind::InvalidRequest);
        }
        if self.no_such_contract.is_some() {
            kinds.push(SystemErrorKind::NoSuchContract);
        }
        if self.unknown.is_some() {
            kinds.push(SystemErrorKind::Unknown);
        }
        if self.unsupported_request.is_some() {
            kinds.push(SystemErrorKind::UnsupportedRequest);
        }
        kinds
    }

    pub fn is_empty(&self) -> bool {
        self.invalid_request.is_none()
            && self.no_such_contract.is_none()
            && self.unknown.is_none()
            && self.unsupported_request.is_none()
    }

    /// Like `SystemError::try_from`, but the empty record decodes to `None`.
    pub fn into_optional(self) -> Result<Option<SystemError>, Error> {
        if self.is_empty() {
            return Ok(None);
        }
        SystemError::try_from(self).map(Some)
    }
}

impl From<SystemError> for SystemErrorRecord {
    fn from(err: SystemError) -> Self {
        let mut record = Self::default();
        match err {
            SystemError::InvalidRequest(e) => record.invalid_request = Some(e),
            SystemError::NoSuchContract(e) => record.no_such_contract = Some(e),
            SystemError::Unknown(e) => record.unknown = Some(e),
            SystemError::UnsupportedRequest(e) => record.unsupported_request = Some(e),
        }
        record
    }
}

impl TryFrom<SystemErrorRecord> for SystemError {
    type Error = Error;

    fn try_from(record: SystemErrorRecord) -> Result<Self, Self::Error> {
        match record {
            SystemErrorRecord {
                invalid_request: Some(e),
                no_such_contract: None,
                unknown: None,
                unsupported_request: None,
            } => Ok(Self::InvalidRequest(e)),
            SystemErrorRecord {
                invalid_request: None,
                no_such_contract: Some(e),
                unknown: None,
                unsupported_request: None,
            } => Ok(Self::NoSuchContract(e)),
            SystemErrorRecord {
                invalid_request: None,
                no_such_contract: None,
                unknown: Some(e),
                unsupported_request: None,
            } => Ok(Self::Unknown(e)),
            SystemErrorRecord {
                invalid_request: None,
                no_such_contract: None,
                unknown: None,
                unsupported_request: Some(e),
            } => Ok(Self::UnsupportedRequest(e)),
            record if record.is_empty() => Err(Error::EmptyRecord),
            record => Err(Error::AmbiguousRecord {
                populated: record.populated(),
            }),
        }
    }
}

impl fmt::Display for SystemErrorRecord {
    /// Renders the first populated field. A record with nothing populated is a
    /// construction bug upstream and panics.
    #[expect(
        clippy::panic,
        reason = "an empty record at render time violates the one-variant invariant"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(e) = &self.invalid_request {
            e.fmt(f)
        } else if let Some(e) = &self.no_such_contract {
            e.fmt(f)
        } else if let Some(e) = &self.unknown {
            e.fmt(f)
        } else if let Some(e) = &self.unsupported_request {
            e.fmt(f)
        } else {
            panic!("unknown error variant")
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]
mod tests {
    use super::*;

    #[test]
    fn record_from_error_populates_single_field() {
        let record = SystemErrorRecord::from(SystemError::invalid_request("bad amount"));
        assert_eq!(record.populated(), vec![SystemErrorKind::InvalidRequest]);
        assert_eq!(
            record.invalid_request,
            Some(InvalidRequest::new("bad amount"))
        );
        assert_eq!(record.to_string(), "invalid request: bad amount");
    }

    #[test]
    fn unset_fields_are_omitted_not_null() {
        let json =
            serde_json::to_string(&SystemErrorRecord::from(SystemError::no_such_contract("0xabc")))
                .unwrap();
        assert_eq!(json, r#"{"no_such_contract":{"addr":"0xabc"}}"#);
        assert_eq!(
            serde_json::to_string(&SystemErrorRecord::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn empty_record_is_no_error_but_not_a_system_error() {
        assert!(SystemErrorRecord::default().into_optional().unwrap().is_none());
        assert!(matches!(
            SystemError::try_from(SystemErrorRecord::default()),
            Err(Error::EmptyRecord)
        ));
    }

    #[test]
    fn is_empty_tracks_each_field() {
        assert!(SystemErrorRecord::default().is_empty());
        for err in [
            SystemError::invalid_request(""),
            SystemError::no_such_contract(""),
            SystemError::unknown(),
            SystemError::unsupported_request(""),
        ] {
            assert!(!SystemErrorRecord::from(err).is_empty());
        }
    }

    #[test]
    fn unrecognised_variant_names_are_rejected() {
        assert!(serde_json::from_str::<SystemErrorRecord>(r#"{"out_of_gas":{}}"#).is_err());
        assert!(
            serde_json::from_str::<SystemErrorRecord>(r#"{"unknown":{},"extra":1}"#).is_err()
        );
    }

    #[test]
    fn ambiguous_record_lists_populated_kinds() {
        let record = SystemErrorRecord {
            unknown: Some(Unknown {}),
            unsupported_request: Some(UnsupportedRequest::new("ibc")),
            ..SystemErrorRecord::default()
        };
        match SystemError::try_from(record.clone()) {
            Err(Error::AmbiguousRecord { populated }) => assert_eq!(
                populated,
                vec![SystemErrorKind::Unknown, SystemErrorKind::UnsupportedRequest]
            ),
            other => panic!("expected ambiguous record, got {other:?}"),
        }
        assert!(record.into_optional().is_err());
    }

    #[test]
    fn display_prefers_first_populated_field() {
        let record = SystemErrorRecord {
            no_such_contract: Some(NoSuchContract::new("0xabc")),
            unsupported_request: Some(UnsupportedRequest::new("ibc")),
            ..SystemErrorRecord::default()
        };
        assert_eq!(record.to_string(), "no such contract: 0xabc");
    }

    #[test]
    #[should_panic(expected = "unknown error variant")]
    fn rendering_empty_record_panics() {
        let _ = SystemErrorRecord::default().to_string();
    }
}
