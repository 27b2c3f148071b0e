use wasm_bindgen::prelude::*;

use crate::classify::{Classification, classify_json_error};
use crate::envelope::Envelope;
use crate::status;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}

fn parse_payload(raw: Option<String>) -> Result<Option<serde_json::Value>, JsValue> {
    match raw {
        None => Ok(None),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(error_result("Payload is not valid JSON")),
        },
    }
}

fn envelope_to_js(envelope: &Envelope) -> JsValue {
    match envelope.to_json() {
        Ok(json) => parse(&json),
        Err(_) => error_result("Envelope is not JSON-representable"),
    }
}

/// Build a success envelope and return its wire-JSON object.
/// Status codes outside the success range yield an error object instead of
/// trapping.
#[wasm_bindgen]
pub fn success_json(status_code: u16, message: &str, data_json: Option<String>) -> JsValue {
    if !status::is_success_code(status_code) {
        return error_result("Status code is outside the success range");
    }
    let data = match parse_payload(data_json) {
        Ok(data) => data,
        Err(err) => return err,
    };
    envelope_to_js(&Envelope::success(status_code, message, data))
}

/// Build an error envelope and return its wire-JSON object.
#[wasm_bindgen]
pub fn error_json(status_code: u16, message: &str, error_code: &str) -> JsValue {
    if !status::is_error_code(status_code) {
        return error_result("Status code is outside the error range");
    }
    envelope_to_js(&Envelope::error(status_code, message, error_code))
}

/// Build a list envelope with optional metadata and return its wire-JSON
/// object.
#[wasm_bindgen]
pub fn list_json(
    message: &str,
    data_json: Option<String>,
    meta_json: Option<String>,
) -> JsValue {
    let data = match parse_payload(data_json) {
        Ok(data) => data,
        Err(err) => return err,
    };
    let meta = match parse_payload(meta_json) {
        Ok(meta) => meta,
        Err(err) => return err,
    };
    envelope_to_js(&Envelope::list(message, data, meta))
}

/// Try to parse `body` as JSON and classify the failure, if any.
#[wasm_bindgen]
pub fn classify_body(body: &str) -> JsValue {
    let obj = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(_) => serde_json::json!({"jsonError": false, "detail": null}),
        Err(err) => match classify_json_error(Some(&err)) {
            Classification::JsonBody(detail) => serde_json::json!({
                "jsonError": true,
                "detail": detail.to_string(),
            }),
            Classification::Clean | Classification::Unrelated => serde_json::json!({
                "jsonError": false,
                "detail": err.to_string(),
            }),
        },
    };
    to_js(&obj)
}
