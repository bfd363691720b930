//! Audit trail handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use trailhub_entity::{AuditEvent, RecordAuditEvent};

use crate::dto::request::AuditQueryParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/audit
///
/// Records a privileged action. Called by admin handlers immediately after
/// the action completes server-side; the payload must already be free of
/// anything the caller does not want in the trail (the service strips the
/// configured sensitive keys as a backstop).
pub async fn record_audit(
    State(state): State<AppState>,
    Json(input): Json<RecordAuditEvent>,
) -> Result<(StatusCode, Json<ApiResponse<AuditEvent>>), ApiError> {
    let stored = state.audit_service.record(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(stored))))
}

/// GET /api/admin/audit
///
/// Lists the trail, most recent first. Query params: `q`, `type`, `from`,
/// `to`, all optional and combined conjunctively.
pub async fn list_audit(
    State(state): State<AppState>,
    Query(params): Query<AuditQueryParams>,
) -> Result<Json<ApiResponse<Vec<AuditEvent>>>, ApiError> {
    let filter = params.into_filter()?;
    let events = state.audit_service.query(&filter).await?;
    Ok(Json(ApiResponse::ok(events)))
}
