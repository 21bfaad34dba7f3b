#![deny(missing_docs)]

//! # LDL Key Translation
//!
//! The remoting layer describes arguments with its own field names (`doc`,
//! `default`, `min`, `max`). Swagger 1.2 expects `description`,
//! `defaultValue`, `minimum` and `maximum`, with numeric bounds given as
//! strings.
//!
//! Presence is judged with JavaScript truthiness, so `0`, `""` and `false`
//! count as absent and are dropped rather than translated.

use serde_json::{Map, Value};

/// Source key -> destination key, applied in this order.
pub const KEY_TRANSLATIONS: [(&str, &str); 4] = [
    ("doc", "description"),
    ("default", "defaultValue"),
    ("min", "minimum"),
    ("max", "maximum"),
];

/// Renames LDL keys to their Swagger names in place and returns the same map.
///
/// Source keys are always removed, even when their value is falsy and nothing
/// gets written. Keys outside the table are left alone, so translating an
/// already translated map is a no-op.
pub fn translate_keys(object: &mut Map<String, Value>) -> &mut Map<String, Value> {
    for (from, to) in KEY_TRANSLATIONS {
        let Some(value) = object.shift_remove(from) else {
            continue;
        };
        if !is_truthy(&value) {
            continue;
        }
        let value = if is_bound(from) {
            Value::String(to_js_string(&value))
        } else {
            value
        };
        object.insert(to.to_string(), value);
    }
    object
}

fn is_bound(key: &str) -> bool {
    key == "min" || key == "max"
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringifies a value the way JavaScript's `String(value)` does.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or_default();
                // 10.0 prints as "10" in JavaScript.
                if f.fract() == 0.0 && f.abs() < 1e21 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
