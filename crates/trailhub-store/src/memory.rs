//! In-memory audit store.
//!
//! Keeps events in a `RwLock`-guarded vector for the lifetime of the
//! process. Used by tests and local development; data is lost on restart,
//! so production deployments should use the PostgreSQL backend.

use std::sync::RwLock;

use async_trait::async_trait;

use trailhub_core::error::AppError;
use trailhub_core::result::AppResult;
use trailhub_entity::{AuditEvent, AuditFilter};

use crate::store::AuditStore;

/// Process-lifetime in-memory audit store.
#[derive(Debug, Default)]
pub struct MemoryAuditStore {
    /// Events in insertion order. Ordering is an internal detail;
    /// `search` always re-sorts descending by `at`.
    events: RwLock<Vec<AuditEvent>>,
}

impl MemoryAuditStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::internal("Audit store lock poisoned")
    }
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    async fn append(&self, event: AuditEvent) -> AppResult<AuditEvent> {
        let mut events = self.events.write().map_err(|_| Self::poisoned())?;
        events.push(event.clone());
        Ok(event)
    }

    async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>> {
        // Snapshot under the read lock, sort after releasing it.
        let mut matched: Vec<AuditEvent> = {
            let events = self.events.read().map_err(|_| Self::poisoned())?;
            events.iter().filter(|e| filter.matches(e)).cloned().collect()
        };
        matched.sort_by(|a, b| b.at.cmp(&a.at));
        Ok(matched)
    }

    async fn count(&self) -> AppResult<u64> {
        let events = self.events.read().map_err(|_| Self::poisoned())?;
        Ok(events.len() as u64)
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn event_at(event_type: &str, at: &str) -> AuditEvent {
        AuditEvent {
            id: Uuid::new_v4(),
            at: at.parse::<DateTime<Utc>>().unwrap(),
            actor_id: "u1".to_string(),
            actor_email: "admin@example.com".to_string(),
            event_type: event_type.to_string(),
            resource: "user:U123".to_string(),
            payload: None,
        }
    }

    #[tokio::test]
    async fn test_append_grows_store_by_one() {
        let store = MemoryAuditStore::new();
        for n in 1..=5u64 {
            store
                .append(event_at("A", "2026-01-01T00:00:00Z"))
                .await
                .unwrap();
            assert_eq!(store.count().await.unwrap(), n);
        }
    }

    #[tokio::test]
    async fn test_search_sorts_descending_by_at() {
        let store = MemoryAuditStore::new();
        store
            .append(event_at("A", "2026-01-02T00:00:00Z"))
            .await
            .unwrap();
        store
            .append(event_at("B", "2026-01-03T00:00:00Z"))
            .await
            .unwrap();
        store
            .append(event_at("A", "2026-01-01T00:00:00Z"))
            .await
            .unwrap();

        let all = store.search(&AuditFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        for window in all.windows(2) {
            assert!(window[0].at >= window[1].at);
        }
    }

    #[tokio::test]
    async fn test_type_filter_preserves_order() {
        let store = MemoryAuditStore::new();
        store
            .append(event_at("A", "2026-01-01T00:00:00Z"))
            .await
            .unwrap();
        store
            .append(event_at("B", "2026-01-02T00:00:00Z"))
            .await
            .unwrap();
        store
            .append(event_at("A", "2026-01-03T00:00:00Z"))
            .await
            .unwrap();

        let filter = AuditFilter {
            event_type: Some("A".to_string()),
            ..Default::default()
        };
        let matched = store.search(&filter).await.unwrap();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].at.to_rfc3339(), "2026-01-03T00:00:00+00:00");
        assert_eq!(matched[1].at.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_unknown_type_returns_empty() {
        let store = MemoryAuditStore::new();
        store
            .append(event_at("A", "2026-01-01T00:00:00Z"))
            .await
            .unwrap();

        let filter = AuditFilter {
            event_type: Some("NEVER_RECORDED".to_string()),
            ..Default::default()
        };
        assert!(store.search(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_lose_nothing() {
        use std::sync::Arc;

        let store = Arc::new(MemoryAuditStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for _ in 0..25 {
                    store
                        .append(event_at("A", "2026-01-01T00:00:00Z"))
                        .await
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.count().await.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryAuditStore::new();
        for _ in 0..50 {
            store
                .append(event_at("A", "2026-01-01T00:00:00Z"))
                .await
                .unwrap();
        }
        let all = store.search(&AuditFilter::default()).await.unwrap();
        let mut ids: Vec<_> = all.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
