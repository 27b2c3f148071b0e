use std::error::Error as StdError;

/// Structured error reported by a JSON-decoding collaborator.
///
/// Each kind carries its own payload so the classifier can read offsets and
/// field names structurally instead of parsing message strings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("syntax error at byte offset {offset}")]
    Syntax { offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("type mismatch for field \"{field}\" at byte offset {offset}")]
    TypeMismatch { field: String, offset: usize },

    #[error("input was empty")]
    EmptyInput,
}

/// Client-facing diagnostic for a JSON decode failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonBodyError {
    #[error("body contains badly-formed JSON (at character {offset})")]
    Malformed { offset: usize },

    #[error("body contains badly-formed JSON")]
    Truncated,

    #[error("body contains incorrect JSON type [for field \"{field}\"] (at character {offset})")]
    WrongType { field: String, offset: usize },

    #[error("body must not be empty")]
    Empty,
}

/// Outcome of [`classify_json_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No error was supplied.
    Clean,
    /// JSON decode problem; the refined diagnostic replaces the original.
    JsonBody(JsonBodyError),
    /// Not a JSON decode problem; the caller keeps the original error.
    Unrelated,
}

impl Classification {
    pub fn is_json_error(&self) -> bool {
        matches!(self, Self::JsonBody(_))
    }
}

/// Determines whether `err` is, or wraps, a JSON decode error and refines it
/// into a client-facing diagnostic.
///
/// Walks the `source()` chain and inspects each cause structurally, first as
/// a [`DecodeError`], then as a [`serde_json::Error`]. Anything else passes
/// through as [`Classification::Unrelated`], leaving the caller's error
/// untouched.
pub fn classify_json_error(err: Option<&(dyn StdError + 'static)>) -> Classification {
    let Some(err) = err else {
        return Classification::Clean;
    };

    let mut cause: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(current) = cause {
        if let Some(decode) = current.downcast_ref::<DecodeError>() {
            let detail = refine_decode(decode);
            tracing::debug!(%detail, "classified JSON decode error");
            return Classification::JsonBody(detail);
        }
        if let Some(json) = current.downcast_ref::<serde_json::Error>()
            && let Some(detail) = refine_serde(json)
        {
            tracing::debug!(%detail, "classified JSON decode error");
            return Classification::JsonBody(detail);
        }
        cause = current.source();
    }

    Classification::Unrelated
}

fn refine_decode(err: &DecodeError) -> JsonBodyError {
    match err {
        DecodeError::Syntax { offset } => JsonBodyError::Malformed { offset: *offset },
        DecodeError::UnexpectedEof => JsonBodyError::Truncated,
        DecodeError::TypeMismatch { field, offset } => JsonBodyError::WrongType {
            field: field.clone(),
            offset: *offset,
        },
        DecodeError::EmptyInput => JsonBodyError::Empty,
    }
}

/// serde_json reports positions as line/column and carries no field path, so
/// the refined offset is the column and the field stays empty.
fn refine_serde(err: &serde_json::Error) -> Option<JsonBodyError> {
    use serde_json::error::Category;

    match err.classify() {
        Category::Syntax => Some(JsonBodyError::Malformed {
            offset: err.column(),
        }),
        Category::Eof => {
            // Column 0 on line 1 means nothing was consumed at all.
            if err.line() == 1 && err.column() == 0 {
                Some(JsonBodyError::Empty)
            } else {
                Some(JsonBodyError::Truncated)
            }
        }
        Category::Data => Some(JsonBodyError::WrongType {
            field: String::new(),
            offset: err.column(),
        }),
        Category::Io => None,
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

    /// Stand-in for a host-side wrapper around a decode failure.
    #[derive(thiserror::Error, Debug)]
    #[error("failed to read request body")]
    struct ReadBodyError {
        #[source]
        source: DecodeError,
    }

    #[derive(thiserror::Error, Debug)]
    #[error("handler failed")]
    struct HandlerError {
        #[source]
        source: ReadBodyError,
    }

    #[test]
    fn nothing_to_classify_is_clean() {
        assert_eq!(classify_json_error(None), Classification::Clean);
    }

    #[test]
    fn syntax_error_reports_its_offset() {
        let err = DecodeError::Syntax { offset: 5 };
        let classification = classify_json_error(Some(&err));

        assert!(classification.is_json_error());
        assert_eq!(
            classification,
            Classification::JsonBody(JsonBodyError::Malformed { offset: 5 })
        );
        if let Classification::JsonBody(detail) = classification {
            assert_eq!(
                detail.to_string(),
                "body contains badly-formed JSON (at character 5)"
            );
        }
    }

    #[test]
    fn unexpected_eof_reports_without_offset() {
        let classification = classify_json_error(Some(&DecodeError::UnexpectedEof));
        assert_eq!(
            classification,
            Classification::JsonBody(JsonBodyError::Truncated)
        );
        assert_eq!(
            JsonBodyError::Truncated.to_string(),
            "body contains badly-formed JSON"
        );
    }

    #[test]
    fn type_mismatch_reports_field_and_offset() {
        let err = DecodeError::TypeMismatch {
            field: "age".to_string(),
            offset: 90,
        };
        let classification = classify_json_error(Some(&err));

        assert_eq!(
            classification,
            Classification::JsonBody(JsonBodyError::WrongType {
                field: "age".to_string(),
                offset: 90,
            })
        );
        if let Classification::JsonBody(detail) = classification {
            assert_eq!(
                detail.to_string(),
                "body contains incorrect JSON type [for field \"age\"] (at character 90)"
            );
        }
    }

    #[test]
    fn type_mismatch_field_may_be_empty() {
        let err = DecodeError::TypeMismatch {
            field: String::new(),
            offset: 12,
        };
        let Classification::JsonBody(detail) = classify_json_error(Some(&err)) else {
            panic!("expected a JSON classification");
        };
        assert_eq!(
            detail.to_string(),
            "body contains incorrect JSON type [for field \"\"] (at character 12)"
        );
    }

    #[test]
    fn empty_input_reports_empty_body() {
        let classification = classify_json_error(Some(&DecodeError::EmptyInput));
        assert_eq!(
            classification,
            Classification::JsonBody(JsonBodyError::Empty)
        );
        assert_eq!(JsonBodyError::Empty.to_string(), "body must not be empty");
    }

    #[test]
    fn unrelated_errors_pass_through() {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer went away");
        let classification = classify_json_error(Some(&err));

        assert_eq!(classification, Classification::Unrelated);
        assert!(!classification.is_json_error());
        // The original error was only borrowed and stays usable as-is.
        assert_eq!(err.to_string(), "peer went away");
    }

    #[test]
    fn wrapped_causes_classify_like_bare_ones() {
        let wrapped = ReadBodyError {
            source: DecodeError::Syntax { offset: 5 },
        };
        assert_eq!(
            classify_json_error(Some(&wrapped)),
            Classification::JsonBody(JsonBodyError::Malformed { offset: 5 })
        );

        let doubly_wrapped = HandlerError {
            source: ReadBodyError {
                source: DecodeError::EmptyInput,
            },
        };
        assert_eq!(
            classify_json_error(Some(&doubly_wrapped)),
            Classification::JsonBody(JsonBodyError::Empty)
        );
    }

    #[test]
    fn serde_syntax_errors_are_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{bad json}").unwrap_err();
        let classification = classify_json_error(Some(&err));
        assert!(matches!(
            classification,
            Classification::JsonBody(JsonBodyError::Malformed { .. })
        ));
    }

    #[test]
    fn serde_empty_input_is_an_empty_body() {
        let err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        assert_eq!(
            classify_json_error(Some(&err)),
            Classification::JsonBody(JsonBodyError::Empty)
        );
    }

    #[test]
    fn serde_truncated_input_is_badly_formed() {
        let err = serde_json::from_str::<serde_json::Value>(r#"{"success": true,"#).unwrap_err();
        assert_eq!(
            classify_json_error(Some(&err)),
            Classification::JsonBody(JsonBodyError::Truncated)
        );
    }

    #[test]
    fn serde_data_errors_are_wrong_type_with_empty_field() {
        let err = serde_json::from_str::<u64>(r#""not a number""#).unwrap_err();
        let Classification::JsonBody(detail) = classify_json_error(Some(&err)) else {
            panic!("expected a JSON classification");
        };
        assert!(matches!(
            detail,
            JsonBodyError::WrongType { ref field, .. } if field.is_empty()
        ));
    }

    #[test]
    fn crate_errors_wrapping_serde_failures_classify() {
        let err = crate::Envelope::from_json(b"{\"success\":").unwrap_err();
        assert!(matches!(
            classify_json_error(Some(&err)),
            Classification::JsonBody(JsonBodyError::Truncated)
        ));
    }
}
