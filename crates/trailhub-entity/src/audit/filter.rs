//! Audit query filter.

use chrono::{DateTime, NaiveDate, Utc};

use trailhub_core::error::AppError;
use trailhub_core::result::AppResult;

use super::model::AuditEvent;

/// Filter for audit queries. All fields are optional and combine
/// conjunctively: an event must satisfy every supplied predicate.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Free text, matched case-insensitively as a substring against
    /// `actor_email`, `resource`, and `event_type`.
    pub q: Option<String>,
    /// Exact match on `event_type`.
    pub event_type: Option<String>,
    /// Inclusive lower bound on `at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `at`.
    pub to: Option<DateTime<Utc>>,
}

impl AuditFilter {
    /// Whether this filter accepts every event.
    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.event_type.is_none() && self.from.is_none() && self.to.is_none()
    }

    /// Evaluate the filter against a single event.
    ///
    /// An inverted range (`from > to`) matches nothing, which falls out of
    /// the conjunction without a special case.
    pub fn matches(&self, event: &AuditEvent) -> bool {
        if let Some(q) = &self.q {
            let needle = q.to_lowercase();
            let hit = event.actor_email.to_lowercase().contains(&needle)
                || event.resource.to_lowercase().contains(&needle)
                || event.event_type.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(event_type) = &self.event_type {
            if &event.event_type != event_type {
                return false;
            }
        }
        if let Some(from) = self.from {
            if event.at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if event.at > to {
                return false;
            }
        }
        true
    }
}

/// Parse a `from`/`to` time bound from its query-string form.
///
/// Accepts a full RFC 3339 timestamp (`2026-08-23T10:15:00Z`) or a bare
/// date (`2026-08-23`), which is interpreted as UTC midnight.
pub fn parse_time_bound(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        // and_hms_opt(0, 0, 0) is always valid for midnight
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            AppError::validation(format!("Invalid time bound: '{raw}'"))
        })?;
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(AppError::validation(format!(
        "Invalid time bound '{raw}': expected RFC 3339 timestamp or YYYY-MM-DD date"
    )))
}
