use crate::error::Error;
use crate::system_error::SystemError;
use crate::system_error::wire::SystemErrorRecord;

/// JSON-encodes a system error in its wire shape.
pub fn encode(err: &SystemError) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(err)?)
}

/// Encodes "no error" as an empty buffer, mirroring what [`decode`] accepts.
pub fn encode_optional(err: Option<&SystemError>) -> Result<Vec<u8>, Error> {
    match err {
        Some(err) => encode(err),
        None => Ok(Vec::new()),
    }
}

/// Decodes a wire-shaped buffer.
///
/// An empty buffer, JSON `null` and `{}` all mean "no error" and yield `Ok(None)`.
/// Records with more than one populated field, or naming a variant or payload field
/// we do not know, are rejected.
pub fn decode(bytes: &[u8]) -> Result<Option<SystemError>, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let record: Option<SystemErrorRecord> = serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(error = %e, len = bytes.len(), "malformed system error payload");
        Error::from(e)
    })?;

    record
        .map_or(Ok(None), SystemErrorRecord::into_optional)
        .inspect_err(|e| tracing::warn!(error = %e, "rejected system error record"))
}
