use crate::error::CoreResult;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Serialize with keys sorted lexicographically, 2-space indentation, and a
/// trailing newline. Re-running the sanitizer over its own output must be
/// byte-identical.
pub fn to_sorted_pretty_string<T: Serialize>(value: &T) -> CoreResult<String> {
    let v = serde_json::to_value(value)?;
    let mut out = serde_json::to_string_pretty(&sort_keys(v))?;
    out.push('\n');
    Ok(out)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted: BTreeMap<String, Value> = BTreeMap::new();
            for (k, v) in map {
                sorted.insert(k, sort_keys(v));
            }
            // serde_json::Map preserves insertion order; rebuild in sorted order.
            let mut out = serde_json::Map::new();
            for (k, v) in sorted {
                out.insert(k, v);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
