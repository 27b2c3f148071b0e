use serde::Serialize;

use super::Envelope;
use crate::error::Error;

/// Full internal representation used by the compact binary form.
///
/// Unlike the JSON wire form this includes the status code. The encoding is
/// only decodable by an implementation using the same scheme; it is not a
/// public interchange format.
#[derive(Serialize)]
struct CompactRecord<'a> {
    status_code: u16,
    success: bool,
    message: &'a str,
    error_code: Option<&'a str>,
    data: Option<&'a serde_json::Value>,
    meta: Option<&'a serde_json::Value>,
}

impl Envelope {
    /// Encodes the full internal representation, status code included, into
    /// a dense binary form for transport between trusted components.
    pub fn to_compact_bytes(&self) -> Result<Vec<u8>, Error> {
        let record = CompactRecord {
            status_code: self.status_code,
            success: self.success,
            message: &self.message,
            error_code: self.error_code.as_deref(),
            data: self.data.as_ref(),
            meta: self.meta.as_ref(),
        };
        Ok(bincode::serialize(&record)?)
    }

    /// Encodes the client-facing subset as JSON text. The status code never
    /// appears in this form.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON wire body back into an envelope.
    ///
    /// The status code is not part of the wire form and comes back as zero.
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        let mut envelope: Envelope = serde_json::from_slice(bytes).inspect_err(|e| {
            tracing::debug!(error = %e, "envelope JSON decode failed");
        })?;

        // Wire bodies may carry an explicit empty errorCode; absent and
        // empty are the same thing.
        if envelope
            .error_code
            .as_deref()
            .is_some_and(|code| code.trim().is_empty())
        {
            envelope.error_code = None;
        }

        Ok(envelope)
    }
}
