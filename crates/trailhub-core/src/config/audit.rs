//! Audit service configuration.

use serde::{Deserialize, Serialize};

/// Audit recording configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Payload keys stripped before an event is stored.
    ///
    /// Matching is case-insensitive and applies recursively through nested
    /// objects and arrays. Callers are still expected to redact sensitive
    /// data at the call site; this list is the central backstop.
    #[serde(default = "default_redact_keys")]
    pub redact_keys: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            redact_keys: default_redact_keys(),
        }
    }
}

fn default_redact_keys() -> Vec<String> {
    vec![
        "password".to_string(),
        "token".to_string(),
        "secret".to_string(),
        "authorization".to_string(),
        "api_key".to_string(),
    ]
}
