use super::Envelope;
use crate::status;

const DEFAULT_SUCCESS_MESSAGE: &str = "Request was successful";

impl Envelope {
    /// Builds an error envelope.
    ///
    /// Only error-range status codes are accepted; anything below 400 is a
    /// caller bug and aborts at construction.
    pub fn error(status_code: u16, message: &str, error_code: &str) -> Self {
        assert!(
            status::is_error_code(status_code),
            "error envelope requires an error status code, got {status_code}"
        );

        Self::new(status_code, false, message, error_code, None)
    }

    /// Builds a success envelope.
    ///
    /// Only success-range status codes are accepted; 400 and above is a
    /// caller bug and aborts at construction. An empty message falls back to
    /// the default.
    pub fn success(status_code: u16, message: &str, data: Option<serde_json::Value>) -> Self {
        assert!(
            status::is_success_code(status_code),
            "success envelope requires a non-error status code, got {status_code}"
        );

        let message = if message.is_empty() {
            DEFAULT_SUCCESS_MESSAGE
        } else {
            message
        };
        Self::new(status_code, true, message, "", data)
    }

    /// Success envelope with HTTP 200.
    pub fn ok(message: &str, data: Option<serde_json::Value>) -> Self {
        Self::success(status::OK, message, data)
    }

    /// Success envelope with HTTP 201.
    pub fn created(message: &str, data: Option<serde_json::Value>) -> Self {
        Self::success(status::CREATED, message, data)
    }

    /// Success envelope with HTTP 200 carrying a list payload plus metadata
    /// such as pagination details.
    pub fn list(
        message: &str,
        data: Option<serde_json::Value>,
        meta: Option<serde_json::Value>,
    ) -> Self {
        let mut envelope = Self::success(status::OK, message, data);
        envelope.set_meta(meta);
        envelope
    }

    /// Error envelope with HTTP 400.
    pub fn bad_request(message: &str, error_code: &str) -> Self {
        let message = if message.is_empty() {
            "Request is in a bad format"
        } else {
            message
        };
        Self::error(status::BAD_REQUEST, message, error_code)
    }

    /// Error envelope with HTTP 401.
    pub fn unauthorized(message: &str, error_code: &str) -> Self {
        let message = if message.is_empty() {
            "Not authenticated to perform the requested action"
        } else {
            message
        };
        Self::error(status::UNAUTHORIZED, message, error_code)
    }

    /// Error envelope with HTTP 403.
    pub fn forbidden(message: &str, error_code: &str) -> Self {
        let message = if message.is_empty() {
            "Not authorized to perform the requested action"
        } else {
            message
        };
        Self::error(status::FORBIDDEN, message, error_code)
    }

    /// Error envelope with HTTP 404.
    pub fn not_found(message: &str, error_code: &str) -> Self {
        let message = if message.is_empty() {
            "Requested resource not found"
        } else {
            message
        };
        Self::error(status::NOT_FOUND, message, error_code)
    }

    /// Error envelope with HTTP 409.
    pub fn conflict(message: &str, error_code: &str) -> Self {
        let message = if message.is_empty() {
            "Requested resource already exist"
        } else {
            message
        };
        Self::error(status::CONFLICT, message, error_code)
    }

    /// Error envelope with HTTP 500.
    pub fn internal_server_error(message: &str, error_code: &str) -> Self {
        let message = if message.is_empty() {
            "Something went wrong on our end."
        } else {
            message
        };
        Self::error(status::INTERNAL_SERVER_ERROR, message, error_code)
    }
}
