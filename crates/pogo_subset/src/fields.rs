//! Tolerant field lookup over loosely structured Game Master JSON.
//!
//! The upstream schema flips between snake_case and camelCase, so every
//! lookup takes an ordered list of candidate keys.

use serde_json::{Map, Value};

/// First candidate key holding a non-null value.
pub fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

pub fn lookup_object<'a>(
    obj: &'a Map<String, Value>,
    keys: &[&str],
) -> Option<&'a Map<String, Value>> {
    lookup(obj, keys).and_then(Value::as_object)
}

/// First candidate holding a non-empty string, or a number rendered as text.
pub fn lookup_label(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|key| obj.get(*key)).find_map(|value| match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// True when any candidate key holds a non-empty array.
pub fn any_non_empty_array(obj: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .any(|value| value.as_array().is_some_and(|items| !items.is_empty()))
}

/// Coerce a JSON value to a non-negative integer.
///
/// Integers pass through, floats truncate toward zero, numeric strings parse.
pub fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                u32::try_from(i).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f.trunc() as u32)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
