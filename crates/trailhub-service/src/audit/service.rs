//! Audit recording and query orchestration.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use trailhub_core::config::audit::AuditConfig;
use trailhub_core::error::AppError;
use trailhub_core::result::AppResult;
use trailhub_entity::{AuditEvent, AuditFilter, RecordAuditEvent};
use trailhub_store::AuditStore;

use super::redact::redact_payload;

/// Records immutable audit events and answers filtered queries.
///
/// The service owns identity assignment: `id` and `at` are generated here,
/// never accepted from callers. There is no retry on a failed append —
/// retrying a write whose outcome is unknown risks duplicate trail entries,
/// so failures surface to the caller instead.
#[derive(Debug, Clone)]
pub struct AuditService {
    /// Storage backend (PostgreSQL in production, in-memory in tests).
    store: Arc<dyn AuditStore>,
    /// Redaction settings.
    config: AuditConfig,
}

impl AuditService {
    /// Create a new audit service.
    pub fn new(store: Arc<dyn AuditStore>, config: AuditConfig) -> Self {
        Self { store, config }
    }

    /// Record a privileged action.
    ///
    /// Validates required fields, strips sensitive payload keys, stamps a
    /// fresh `id` and `at`, and appends to the store. Returns the complete
    /// stored event so the caller can log or display it immediately.
    pub async fn record(&self, mut input: RecordAuditEvent) -> AppResult<AuditEvent> {
        validate(&input)?;

        if let Some(payload) = input.payload.as_mut() {
            redact_payload(payload, &self.config.redact_keys);
        }

        let event = input.into_event(Uuid::new_v4(), Utc::now());
        let stored = self.store.append(event).await?;

        tracing::info!(
            event_id = %stored.id,
            actor_id = %stored.actor_id,
            event_type = %stored.event_type,
            resource = %stored.resource,
            "Audit event recorded"
        );
        Ok(stored)
    }

    /// Query the trail, most recent first.
    ///
    /// All supplied filter fields must match. Storage failures propagate so
    /// an outage is never mistaken for "no matches".
    pub async fn query(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>> {
        self.store.search(filter).await
    }

    /// Total number of recorded events.
    pub async fn count(&self) -> AppResult<u64> {
        self.store.count().await
    }
}

/// Reject an event descriptor with missing required fields before any
/// state mutation.
fn validate(input: &RecordAuditEvent) -> AppResult<()> {
    let required = [
        ("actor_id", &input.actor_id),
        ("actor_email", &input.actor_email),
        ("type", &input.event_type),
        ("resource", &input.resource),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("Field '{name}' is required")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trailhub_store::MemoryAuditStore;

    fn service() -> AuditService {
        AuditService::new(Arc::new(MemoryAuditStore::new()), AuditConfig::default())
    }

    fn suspend_event() -> RecordAuditEvent {
        RecordAuditEvent {
            actor_id: "u1".to_string(),
            actor_email: "a@x.com".to_string(),
            event_type: "USER_SUSPEND".to_string(),
            resource: "user:U123".to_string(),
            payload: None,
        }
    }

    #[tokio::test]
    async fn test_record_assigns_id_and_timestamp() {
        let service = service();
        let before = Utc::now();
        let stored = service.record(suspend_event()).await.unwrap();
        let after = Utc::now();

        assert!(!stored.id.is_nil());
        assert!(stored.at >= before && stored.at <= after);
    }

    #[tokio::test]
    async fn test_record_rejects_missing_fields() {
        let service = service();
        for field in ["actor_id", "actor_email", "type", "resource"] {
            let mut input = suspend_event();
            match field {
                "actor_id" => input.actor_id.clear(),
                "actor_email" => input.actor_email.clear(),
                "type" => input.event_type.clear(),
                _ => input.resource.clear(),
            }
            let err = service.record(input).await.unwrap_err();
            assert_eq!(
                err.kind,
                trailhub_core::error::ErrorKind::Validation,
                "field {field}"
            );
        }
        // Nothing was stored.
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_generates_distinct_ids() {
        let service = service();
        let a = service.record(suspend_event()).await.unwrap();
        let b = service.record(suspend_event()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_record_redacts_sensitive_payload_keys() {
        let service = service();
        let mut input = suspend_event();
        input.payload = Some(json!({ "password": "hunter2", "reason": "abuse" }));

        let stored = service.record(input).await.unwrap();
        let payload = stored.payload.unwrap();
        assert_eq!(payload["password"], "[REDACTED]");
        assert_eq!(payload["reason"], "abuse");
    }

    #[tokio::test]
    async fn test_recorded_event_is_queryable_by_free_text() {
        let service = service();
        service.record(suspend_event()).await.unwrap();

        let filter = AuditFilter {
            q: Some("u123".to_string()),
            ..Default::default()
        };
        let results = service.query(&filter).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].resource, "user:U123");
    }
}
