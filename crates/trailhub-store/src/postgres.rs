//! PostgreSQL audit store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use trailhub_core::error::{AppError, ErrorKind};
use trailhub_core::result::AppResult;
use trailhub_entity::{AuditEvent, AuditFilter};

use crate::store::AuditStore;

/// Audit store backed by the `audit_events` table.
///
/// One statement per call; the table carries an index on `at` so the
/// descending-order listing stays efficient as the trail grows.
#[derive(Debug, Clone)]
pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    /// Create a new PostgreSQL audit store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    async fn append(&self, event: AuditEvent) -> AppResult<AuditEvent> {
        sqlx::query_as::<_, AuditEvent>(
            "INSERT INTO audit_events (id, at, actor_id, actor_email, event_type, resource, payload) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(event.id)
        .bind(event.at)
        .bind(&event.actor_id)
        .bind(&event.actor_email)
        .bind(&event.event_type)
        .bind(&event.resource)
        .bind(&event.payload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append audit event", e))
    }

    async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.q.is_some() {
            conditions.push(format!(
                "(actor_email ILIKE ${param_idx} OR resource ILIKE ${param_idx} OR event_type ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }
        if filter.event_type.is_some() {
            conditions.push(format!("event_type = ${param_idx}"));
            param_idx += 1;
        }
        if filter.from.is_some() {
            conditions.push(format!("at >= ${param_idx}"));
            param_idx += 1;
        }
        if filter.to.is_some() {
            conditions.push(format!("at <= ${param_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("SELECT * FROM audit_events {where_clause} ORDER BY at DESC");

        let mut query = sqlx::query_as::<_, AuditEvent>(&sql);
        if let Some(q) = &filter.q {
            query = query.bind(format!("%{}%", escape_like(q)));
        }
        if let Some(event_type) = &filter.event_type {
            query = query.bind(event_type.clone());
        }
        if let Some(from) = filter.from {
            query = query.bind(from);
        }
        if let Some(to) = filter.to {
            query = query.bind(to);
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search audit events", e)
        })
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM audit_events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count audit events", e)
            })?;
        Ok(count as u64)
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Escape `%`, `_`, and `\` so user input is matched literally in ILIKE.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
