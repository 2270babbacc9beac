/* src/transform/wasm/src/lib.rs */

use condition_transform::Transformed;
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;

fn result_value(result: Option<&Transformed>) -> Value {
  match result {
    Some(t) => json!({
      "code": t.code,
      "map": serde_json::to_value(&t.map).unwrap_or(Value::Null),
    }),
    None => Value::Null,
  }
}

/// `null` when nothing changed, else `{"code": ..., "map": {...}}`.
#[wasm_bindgen]
pub fn transform(code: &str) -> String {
  result_value(condition_transform::transform(code).as_ref()).to_string()
}

#[wasm_bindgen]
pub fn transform_include(id: &str) -> bool {
  condition_transform::is_transform_target(id)
}

/// `{"result": null | {...}, "diagnostics": [...]}`
#[wasm_bindgen]
pub fn transform_with_diagnostics(code: &str) -> String {
  let (result, diagnostics) = condition_transform::transform_with_diagnostics(code);
  json!({
    "result": result_value(result.as_ref()),
    "diagnostics": serde_json::to_value(&diagnostics).unwrap_or_else(|_| json!([])),
  })
  .to_string()
}
