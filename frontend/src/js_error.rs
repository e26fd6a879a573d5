//! Conversion of browser exceptions into readable text.

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort message for a rejected promise or thrown exception.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{value:?}")
}
