//! Repair request entity model and DTOs.

use mend_core::browse::BrowseFilter;
use mend_core::status::{RequestStatus, Urgency};
use mend_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `repair_requests` table.
///
/// `requester_name` and `requester_location` are a denormalised snapshot of
/// the requester at submission time; they are not re-synced if the user
/// record later changes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RepairRequest {
    pub id: DbId,
    pub item: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub urgency: Urgency,
    /// Skill category, free text from the "Other" escape hatch, or empty.
    pub skill_needed: String,
    pub location_notes: Option<String>,
    pub notes: Option<String>,
    pub requester_id: DbId,
    pub requester_name: String,
    pub requester_location: String,
    #[sqlx(try_from = "String")]
    pub status: RequestStatus,
    /// Set exactly when the request leaves `open`; non-null iff the status
    /// is `assigned` or `resolved`.
    pub assigned_to_id: Option<DbId>,
    /// `Some("")` means "resolved without comment", distinct from not yet
    /// resolved.
    pub gratitude_note: Option<String>,
    pub created_at: Timestamp,
    /// Stamped once, at first resolution; a late gratitude note does not
    /// re-stamp it.
    pub resolved_at: Option<Timestamp>,
}

impl RepairRequest {
    /// Whether this request satisfies every criterion of a browse filter.
    pub fn matches(&self, filter: &BrowseFilter) -> bool {
        filter.matches(
            self.status,
            &self.skill_needed,
            &self.requester_location,
            self.urgency,
        )
    }
}

/// DTO for logging a new repair request.
///
/// Lifecycle fields (`status`, `assigned_to_id`, `resolved_at`,
/// `gratitude_note`) are not caller-suppliable: every new request starts
/// open and unclaimed regardless of what the caller intended.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRepairRequest {
    #[validate(length(min = 1, message = "item is required"))]
    pub item: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub urgency: Urgency,
    #[serde(default)]
    pub skill_needed: String,
    pub location_notes: Option<String>,
    pub notes: Option<String>,
    /// Snapshot of the requesting user at submission time.
    pub requester_id: DbId,
    pub requester_name: String,
    pub requester_location: String,
}

/// Which side of a request a user is on when listing "my requests".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// The user who logged the request (filters on `requester_id`).
    Requester,
    /// The user who claimed it (filters on `assigned_to_id`).
    Assignee,
}

impl UserRole {
    /// Column the role filters on.
    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::Requester => "requester_id",
            Self::Assignee => "assigned_to_id",
        }
    }
}
