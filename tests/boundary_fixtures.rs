#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use std::error::Error as StdError;

use contract_system_error::{
    Error, InvalidRequest, NoSuchContract, SystemError, SystemErrorKind, SystemErrorRecord,
    decode, encode, encode_optional, normalize, normalize_boxed, to_system_error,
};

#[derive(serde::Deserialize)]
struct Case {
    name: String,
    wire: serde_json::Value,
    kind: String,
    message: String,
}

fn load_fixture<T: serde::de::DeserializeOwned>(filename: &str) -> T {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

#[test]
fn fixtures_decode_render_and_reencode() {
    let cases: Vec<Case> = load_fixture("system_errors.json");
    assert!(!cases.is_empty());

    for case in cases {
        let bytes = serde_json::to_vec(&case.wire).unwrap();
        let err = decode(&bytes)
            .unwrap_or_else(|e| panic!("{}: decode failed: {e}", case.name))
            .unwrap_or_else(|| panic!("{}: decoded as no error", case.name));

        assert_eq!(err.kind().to_string(), case.kind, "{}", case.name);
        assert_eq!(err.to_string(), case.message, "{}", case.name);

        let record = SystemErrorRecord::from(err.clone());
        assert_eq!(record.populated().len(), 1, "{}", case.name);
        assert_eq!(record.to_string(), case.message, "{}", case.name);

        let reencoded: serde_json::Value = serde_json::from_slice(&encode(&err).unwrap()).unwrap();
        assert_eq!(reencoded, case.wire, "{}", case.name);
    }
}

#[derive(serde::Deserialize)]
struct Rejected {
    rejection: String,
    wire: serde_json::Value,
}

#[test]
fn rejected_fixtures_never_decode() {
    let records: Vec<Rejected> = load_fixture("rejected_records.json");
    for record in records {
        let bytes = serde_json::to_vec(&record.wire).unwrap();
        match (record.rejection.as_str(), decode(&bytes)) {
            ("ambiguous", Err(Error::AmbiguousRecord { populated })) => {
                assert!(populated.len() > 1);
            }
            ("malformed", Err(Error::Json(_))) => {}
            (expected, other) => panic!(
                "expected {expected} rejection for {}, got {other:?}",
                record.wire
            ),
        }
    }
}

#[test]
fn invalid_request_scenario_end_to_end() {
    let host_error = InvalidRequest::new("bad amount");
    let normalized = normalize(Some(&host_error)).unwrap();
    assert_eq!(
        serde_json::to_value(&normalized).unwrap(),
        serde_json::json!({"invalid_request": {"error": "bad amount"}})
    );
    assert_eq!(normalized.to_string(), "invalid request: bad amount");
}

#[test]
fn caller_decides_what_to_do_with_unrepresentable_errors() {
    let host_error: Box<dyn StdError + Send + Sync> = "storage backend unavailable".into();
    assert!(to_system_error(host_error.as_ref()).is_none());

    let err = normalize_boxed(host_error).unwrap_or_else(|_| SystemError::unknown());
    assert_eq!(err.kind(), SystemErrorKind::Unknown);
    assert_eq!(
        encode_optional(Some(&err)).unwrap(),
        br#"{"unknown":{}}"#.to_vec()
    );
}

#[test]
fn no_error_crosses_the_boundary_as_empty_payload() {
    let bytes = encode_optional(None).unwrap();
    assert!(bytes.is_empty());
    assert_eq!(decode(&bytes).unwrap(), None);
}

#[test]
fn payload_structs_normalize_through_trait_objects() {
    let errors: Vec<Box<dyn StdError + Send + Sync>> = vec![
        Box::new(NoSuchContract::new("0xabc")),
        Box::new(SystemError::unsupported_request("ibc")),
    ];
    let kinds: Vec<SystemErrorKind> = errors
        .into_iter()
        .map(|e| normalize_boxed(e).unwrap().kind())
        .collect();
    assert_eq!(
        kinds,
        [SystemErrorKind::NoSuchContract, SystemErrorKind::UnsupportedRequest]
    );
}
