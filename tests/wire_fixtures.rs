#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use api_response_envelope::{
    Classification, Envelope, Error, JsonBodyError, classify_json_error,
};

#[derive(serde::Deserialize)]
struct WireCase {
    name: String,
    body: serde_json::Value,
    expect_success: bool,
    expect_message: String,
    expect_error_code: Option<String>,
    expect_data: Option<serde_json::Value>,
    expect_meta: Option<serde_json::Value>,
}

#[derive(serde::Deserialize)]
struct InvalidCase {
    name: String,
    raw: String,
    kind: String,
}

fn load_fixture(filename: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

fn load_wire_cases() -> Vec<WireCase> {
    serde_json::from_str(&load_fixture("envelopes.json"))
        .unwrap_or_else(|e| panic!("failed to parse envelopes.json: {e}"))
}

fn load_invalid_cases() -> Vec<InvalidCase> {
    serde_json::from_str(&load_fixture("invalid_bodies.json"))
        .unwrap_or_else(|e| panic!("failed to parse invalid_bodies.json: {e}"))
}

#[test]
fn wire_bodies_parse_to_the_expected_envelopes() {
    for case in load_wire_cases() {
        let bytes = serde_json::to_vec(&case.body).unwrap();
        let envelope = Envelope::from_json(&bytes)
            .unwrap_or_else(|e| panic!("{}: parse failed: {e}", case.name));

        assert_eq!(envelope.status_code(), 0, "{}", case.name);
        assert_eq!(envelope.is_success(), case.expect_success, "{}", case.name);
        assert_eq!(envelope.message(), case.expect_message, "{}", case.name);
        assert_eq!(
            envelope.error_code(),
            case.expect_error_code.as_deref(),
            "{}",
            case.name
        );
        assert_eq!(envelope.data(), case.expect_data.as_ref(), "{}", case.name);
        assert_eq!(envelope.meta(), case.expect_meta.as_ref(), "{}", case.name);
    }
}

#[test]
fn parsed_envelopes_reserialize_to_a_stable_wire_form() {
    for case in load_wire_cases() {
        let bytes = serde_json::to_vec(&case.body).unwrap();
        let envelope = Envelope::from_json(&bytes).unwrap();

        let json = envelope
            .to_json()
            .unwrap_or_else(|e| panic!("{}: serialize failed: {e}", case.name));
        let reparsed = Envelope::from_json(json.as_bytes())
            .unwrap_or_else(|e| panic!("{}: reparse failed: {e}", case.name));

        assert_eq!(envelope, reparsed, "{}", case.name);
        assert!(!json.contains("statusCode"), "{}", case.name);
    }
}

#[test]
fn invalid_bodies_classify_to_their_diagnostics() {
    for case in load_invalid_cases() {
        let err = match Envelope::from_json(case.raw.as_bytes()) {
            Err(err) => err,
            Ok(_) => panic!("{}: expected a decode failure", case.name),
        };
        assert!(matches!(err, Error::Json(_)), "{}", case.name);

        let Classification::JsonBody(detail) = classify_json_error(Some(&err)) else {
            panic!("{}: expected a JSON classification", case.name);
        };

        match case.kind.as_str() {
            "malformed" => assert!(
                matches!(detail, JsonBodyError::Malformed { .. }),
                "{}: got {detail:?}",
                case.name
            ),
            "truncated" => assert_eq!(detail, JsonBodyError::Truncated, "{}", case.name),
            "empty" => assert_eq!(detail, JsonBodyError::Empty, "{}", case.name),
            "wrong_type" => assert!(
                matches!(detail, JsonBodyError::WrongType { .. }),
                "{}: got {detail:?}",
                case.name
            ),
            other => panic!("{}: unknown fixture kind {other}", case.name),
        }
    }
}

#[test]
fn built_envelopes_survive_the_wire_subset() {
    let data = serde_json::json!({"orders": [{"id": 1}, {"id": 2}]});
    let meta = serde_json::json!({"page": 1, "per_page": 2});
    let envelope = Envelope::list("", Some(data.clone()), Some(meta.clone()));

    let json = envelope.to_json().unwrap();
    let parsed = Envelope::from_json(json.as_bytes()).unwrap();

    assert!(parsed.is_success());
    assert_eq!(parsed.message(), "Request was successful");
    assert_eq!(parsed.data(), Some(&data));
    assert_eq!(parsed.meta(), Some(&meta));
    // Only the wire subset survives; the transport code does not.
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(parsed.status_code(), 0);
}

#[test]
fn compact_form_carries_what_the_wire_form_drops() {
    let not_found = Envelope::not_found("gone", "E_NF");
    let conflict = Envelope::conflict("gone", "E_NF");

    let not_found_bytes = not_found.to_compact_bytes().unwrap();
    let conflict_bytes = conflict.to_compact_bytes().unwrap();

    assert_ne!(not_found_bytes, conflict_bytes);
    assert!(!not_found_bytes.is_empty());
}
