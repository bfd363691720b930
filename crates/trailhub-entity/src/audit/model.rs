//! Audit event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable audit event recording a privileged action.
///
/// `id` and `at` are assigned by the audit service at insertion time;
/// callers never supply them. Once stored, an event is never updated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AuditEvent {
    /// Unique event identifier, never reused.
    pub id: Uuid,
    /// When the action occurred (UTC). Sort and filter key.
    pub at: DateTime<Utc>,
    /// The principal who performed the action.
    pub actor_id: String,
    /// Actor email, denormalized for searchability.
    pub actor_email: String,
    /// Action category (open enumeration, e.g. `"USER_SUSPEND"`, `"FLAG_TOGGLE"`).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Namespaced target of the action (e.g. `"user:U123"`, `"flag:pos.v2"`).
    pub resource: String,
    /// Additional context (JSON). Sensitive keys are stripped before storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Data required to record a new audit event.
///
/// This is an [`AuditEvent`] minus the generated `id` and `at` fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAuditEvent {
    /// The principal who performed the action.
    pub actor_id: String,
    /// Actor email.
    pub actor_email: String,
    /// Action category.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Namespaced target of the action.
    pub resource: String,
    /// Additional context.
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

impl RecordAuditEvent {
    /// Promote to a full [`AuditEvent`] with a freshly generated identity.
    pub fn into_event(self, id: Uuid, at: DateTime<Utc>) -> AuditEvent {
        AuditEvent {
            id,
            at,
            actor_id: self.actor_id,
            actor_email: self.actor_email,
            event_type: self.event_type,
            resource: self.resource,
            payload: self.payload,
        }
    }
}
