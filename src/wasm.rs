use strum::VariantNames;
use wasm_bindgen::prelude::*;

use crate::classify::classify_json;
use crate::messages;
use crate::rejection::ReasonCode;

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

/// Classify a raw broadcast response body.
#[wasm_bindgen]
pub fn classify_response(json: &str) -> JsValue {
    let result = match classify_json(json) {
        Ok(result) => result,
        Err(err) => return error_result(&err.to_string()),
    };

    let summary = serde_json::json!({
        "outcome": if result.is_accepted() { "accepted" } else { "rejected" },
        "txid": result.txid(),
        "reason": result.reason().map(|code| code.to_string()),
        "friendlyMessage": result.reason().map(ReasonCode::friendly_message),
        "result": result,
    });
    to_js(&summary)
}

/// Resolve a reason code to its user-facing sentence.
#[wasm_bindgen]
pub fn friendly_message(error_code: &str) -> String {
    messages::friendly_error_message(error_code)
}

/// List every reason code the classifier recognizes.
#[wasm_bindgen]
pub fn known_reason_codes() -> JsValue {
    let codes: Vec<serde_json::Value> = ReasonCode::VARIANTS
        .iter()
        .map(|name| serde_json::Value::String((*name).to_string()))
        .collect();
    to_js(&serde_json::Value::Array(codes))
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
