//! Payload redaction.
//!
//! Call sites are documented as responsible for redacting sensitive data
//! before recording an event. This module is the central backstop: any
//! payload key on the configured list is replaced before storage, however
//! deeply nested.

use serde_json::Value;

/// Placeholder written over redacted values.
pub const REDACTED: &str = "[REDACTED]";

/// Replace the value of every key on `keys` with [`REDACTED`], recursing
/// through nested objects and arrays. Key comparison is case-insensitive.
pub fn redact_payload(value: &mut Value, keys: &[String]) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_sensitive(key, keys) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_payload(val, keys);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                redact_payload(item, keys);
            }
        }
        _ => {}
    }
}

fn is_sensitive(key: &str, keys: &[String]) -> bool {
    keys.iter().any(|k| k.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys() -> Vec<String> {
        vec!["password".to_string(), "token".to_string()]
    }

    #[test]
    fn test_redacts_top_level_key() {
        let mut payload = json!({ "password": "hunter2", "reason": "reset" });
        redact_payload(&mut payload, &keys());
        assert_eq!(payload, json!({ "password": REDACTED, "reason": "reset" }));
    }

    #[test]
    fn test_redacts_nested_and_array_values() {
        let mut payload = json!({
            "attempts": [
                { "token": "abc", "ok": false },
                { "token": "def", "ok": true }
            ],
            "meta": { "inner": { "password": "x" } }
        });
        redact_payload(&mut payload, &keys());
        assert_eq!(payload["attempts"][0]["token"], REDACTED);
        assert_eq!(payload["attempts"][1]["token"], REDACTED);
        assert_eq!(payload["meta"]["inner"]["password"], REDACTED);
        assert_eq!(payload["attempts"][0]["ok"], json!(false));
    }

    #[test]
    fn test_key_match_is_case_insensitive() {
        let mut payload = json!({ "Password": "x" });
        redact_payload(&mut payload, &keys());
        assert_eq!(payload["Password"], REDACTED);
    }

    #[test]
    fn test_scalar_payload_untouched() {
        let mut payload = json!("free-form note");
        redact_payload(&mut payload, &keys());
        assert_eq!(payload, json!("free-form note"));
    }
}
