//! ABI method-signature helpers over generic JSON values.

use serde_json::Value;

use crate::errors::Error;

/// Renders an ABI item as its canonical method signature,
/// `name(type1,type2,...)`.
///
/// A name that already contains `(` is returned verbatim. The item must be
/// a JSON object with a string `name` and an `inputs` array; anything else
/// fails with `InvalidInput`.
pub fn json_method_to_string(json: &Value) -> Result<String, Error> {
    let item = json
        .as_object()
        .ok_or_else(|| Error::InvalidInput("ABI item must be a JSON object".to_string()))?;
    let name = item
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidInput("ABI item has no name".to_string()))?;
    if name.contains('(') {
        return Ok(name.to_string());
    }

    let inputs = item
        .get("inputs")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidInput("ABI item has no inputs".to_string()))?;
    let types: Vec<&str> = inputs
        .iter()
        .filter_map(|param| param.get("type").and_then(Value::as_str))
        .collect();
    Ok(format!("{name}({})", types.join(",")))
}

/// Parses JSON text into a generic value; malformed input fails with
/// `DecodeError`.
pub fn json_to_value(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|e| Error::DecodeError(e.to_string()))
}
