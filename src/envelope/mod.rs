pub mod builders;
pub mod codec;

use serde::{Deserialize, Serialize};

/// Standardized outcome of one API operation.
///
/// The JSON wire form carries only the client-facing subset; the status code
/// stays internal, driving the construction guards and the compact binary
/// form. Fields normalize at construction, so reads go through accessors and
/// the only post-construction mutation is [`Envelope::set_meta`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Transport status code. Never part of the JSON wire form.
    #[serde(skip)]
    status_code: u16,
    /// Whether the operation succeeded.
    success: bool,
    /// Human-readable description of the outcome.
    message: String,
    /// Application-specific error code; absent when empty.
    #[serde(
        rename = "errorCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    error_code: Option<String>,
    /// Response payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
    /// Auxiliary payload such as pagination details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<serde_json::Value>,
}

impl Envelope {
    /// Raw constructor. Normalizes `error_code` (trimmed-empty becomes
    /// absent) and performs no status/success consistency check; the checked
    /// paths are [`Envelope::error`] and [`Envelope::success`].
    pub fn new(
        status_code: u16,
        success: bool,
        message: &str,
        error_code: &str,
        data: Option<serde_json::Value>,
    ) -> Self {
        let error_code = if error_code.trim().is_empty() {
            None
        } else {
            Some(error_code.to_string())
        };

        Self {
            status_code,
            success,
            message: message.to_string(),
            error_code,
            data,
            meta: None,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    pub fn meta(&self) -> Option<&serde_json::Value> {
        self.meta.as_ref()
    }

    /// The one documented mutation: attach or clear auxiliary metadata.
    pub fn set_meta(&mut self, meta: Option<serde_json::Value>) {
        self.meta = meta;
    }

    /// Wraps the envelope so it can travel through error-propagation paths.
    pub fn into_error(self) -> EnvelopeError {
        EnvelopeError(self)
    }
}

/// Adapter that surfaces an [`Envelope`] as a standard error.
///
/// The envelope stays a plain value; wrap it only at the boundary where an
/// `std::error::Error` is required. `Display` is the envelope message.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{}", .0.message)]
pub struct EnvelopeError(Envelope);

impl EnvelopeError {
    pub fn into_inner(self) -> Envelope {
        self.0
    }

    pub fn envelope(&self) -> &Envelope {
        &self.0
    }
}
