//! Request DTOs.

use serde::Deserialize;

use trailhub_core::result::AppResult;
use trailhub_entity::AuditFilter;
use trailhub_entity::audit::filter::parse_time_bound;

/// Query-string parameters for the audit listing endpoint.
///
/// Maps one-to-one onto [`AuditFilter`]; `from`/`to` arrive as strings and
/// are parsed (and validated) during conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQueryParams {
    /// Free-text search.
    pub q: Option<String>,
    /// Exact event type.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Inclusive lower bound on `at`.
    pub from: Option<String>,
    /// Inclusive upper bound on `at`.
    pub to: Option<String>,
}

impl AuditQueryParams {
    /// Convert into a domain filter, rejecting malformed time bounds.
    pub fn into_filter(self) -> AppResult<AuditFilter> {
        Ok(AuditFilter {
            q: self.q.filter(|s| !s.trim().is_empty()),
            event_type: self.event_type.filter(|s| !s.trim().is_empty()),
            from: self
                .from
                .as_deref()
                .map(parse_time_bound)
                .transpose()?,
            to: self.to.as_deref().map(parse_time_bound).transpose()?,
        })
    }
}
