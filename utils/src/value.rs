//! JSON value helpers and id generation.

use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Recursively copy a JSON value: arrays and objects are rebuilt element by
/// element, scalars are copied. `Value` cannot be cyclic, so the recursion
/// always terminates.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), deep_clone(field)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar.clone(),
    }
}

/// A unique id: millisecond timestamp in base-36, then a random suffix.
/// Ids created in the same millisecond differ in the suffix.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", base36(millis), &random[..8])
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}
