use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::system_error::SystemError;
use crate::system_error::wire::SystemErrorRecord;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({"error": msg}))
}

fn decode_json(json: &str) -> Result<Option<SystemError>, JsValue> {
    codec::decode(json.as_bytes())
        .map_err(|e| error_result(&format!("invalid system error: {e}")))
}

/// Render a wire-shaped JSON string as `{"kind", "message"}`, `null` for "no error".
#[wasm_bindgen]
pub fn render_system_error(json: &str) -> JsValue {
    match decode_json(json) {
        Ok(Some(err)) => to_js(&serde_json::json!({
            "kind": err.kind().as_ref(),
            "message": err.to_string(),
        })),
        Ok(None) => JsValue::NULL,
        Err(result) => result,
    }
}

/// Wire field name of the populated variant, if the payload is a valid system error.
#[wasm_bindgen]
pub fn system_error_kind(json: &str) -> Option<String> {
    decode_json(json)
        .ok()
        .flatten()
        .map(|err| err.kind().to_string())
}

/// Validate a JS object in wire shape and return it with exactly one field set.
#[wasm_bindgen]
pub fn normalize_js(value: JsValue) -> JsValue {
    if value.is_null() || value.is_undefined() {
        return JsValue::NULL;
    }

    let record: SystemErrorRecord = match serde_wasm_bindgen::from_value(value) {
        Ok(r) => r,
        Err(e) => return error_result(&format!("invalid system error: {e}")),
    };

    match record.into_optional() {
        Ok(Some(err)) => to_js(&err),
        Ok(None) => JsValue::NULL,
        Err(e) => error_result(&format!("invalid system error: {e}")),
    }
}
