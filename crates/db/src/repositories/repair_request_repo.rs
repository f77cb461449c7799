//! Repository for the `repair_requests` table.
//!
//! Lifecycle writes are guarded UPDATEs: the `WHERE` clause carries the
//! legal source statuses, and `rows_affected()` reports whether the
//! transition applied. No status literal appears inline — every one comes
//! from [`RequestStatus`].

use sqlx::FromRow;
use sqlx::PgPool;

use mend_core::stats::RequestStats;
use mend_core::status::RequestStatus;
use mend_core::types::DbId;

use crate::models::repair_request::{CreateRepairRequest, RepairRequest, UserRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item, description, urgency, skill_needed, location_notes, notes, \
                       requester_id, requester_name, requester_location, status, \
                       assigned_to_id, gratitude_note, created_at, resolved_at";

/// Aggregate row shape for [`RepairRequestRepo::stats`].
#[derive(FromRow)]
struct StatsRow {
    total: i64,
    open: i64,
    assigned: i64,
    resolved: i64,
}

/// Provides CRUD and lifecycle operations for repair requests.
pub struct RepairRequestRepo;

impl RepairRequestRepo {
    /// Insert a new request, returning the created row.
    ///
    /// The status is always written as `open`; the lifecycle columns the
    /// DTO cannot express default to NULL.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRepairRequest,
    ) -> Result<RepairRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO repair_requests
                (item, description, urgency, skill_needed, location_notes, notes,
                 requester_id, requester_name, requester_location, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RepairRequest>(&query)
            .bind(&input.item)
            .bind(&input.description)
            .bind(input.urgency.as_str())
            .bind(&input.skill_needed)
            .bind(&input.location_notes)
            .bind(&input.notes)
            .bind(input.requester_id)
            .bind(&input.requester_name)
            .bind(&input.requester_location)
            .bind(RequestStatus::Open.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a request by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RepairRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM repair_requests WHERE id = $1");
        sqlx::query_as::<_, RepairRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests newest first, optionally narrowed to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<RequestStatus>,
    ) -> Result<Vec<RepairRequest>, sqlx::Error> {
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM repair_requests
                     WHERE status = $1
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, RepairRequest>(&query)
                    .bind(status.as_str())
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM repair_requests ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, RepairRequest>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Claim an open request for a user.
    ///
    /// Compare-and-set: applies only while the request is still open, so a
    /// racing second claimer cannot silently overwrite the first. An
    /// unknown claimer also fails the guard rather than tripping the
    /// foreign key. Returns `true` if the transition applied.
    pub async fn assign(
        pool: &PgPool,
        request_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE repair_requests
             SET status = $2, assigned_to_id = $3
             WHERE id = $1 AND status = $4
               AND EXISTS (SELECT 1 FROM users WHERE id = $3)",
        )
        .bind(request_id)
        .bind(RequestStatus::Assigned.as_str())
        .bind(user_id)
        .bind(RequestStatus::Open.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a request resolved with a gratitude note (possibly empty).
    ///
    /// Applies from `assigned`, and re-applies from `resolved` to attach a
    /// late gratitude note. `COALESCE` keeps the original resolution time
    /// on re-resolve. Returns `true` if the write applied.
    pub async fn resolve(
        pool: &PgPool,
        request_id: DbId,
        gratitude_note: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE repair_requests
             SET status = $2, gratitude_note = $3,
                 resolved_at = COALESCE(resolved_at, NOW())
             WHERE id = $1 AND status IN ($4, $2)",
        )
        .bind(request_id)
        .bind(RequestStatus::Resolved.as_str())
        .bind(gratitude_note)
        .bind(RequestStatus::Assigned.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Requests a user is involved in, on either side, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        role: UserRole,
    ) -> Result<Vec<RepairRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM repair_requests
             WHERE {column} = $1
             ORDER BY created_at DESC, id DESC",
            column = role.column()
        );
        sqlx::query_as::<_, RepairRequest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Aggregate counts bucketed by status.
    pub async fn stats(pool: &PgPool) -> Result<RequestStats, sqlx::Error> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = $1) AS open,
                COUNT(*) FILTER (WHERE status = $2) AS assigned,
                COUNT(*) FILTER (WHERE status = $3) AS resolved
             FROM repair_requests",
        )
        .bind(RequestStatus::Open.as_str())
        .bind(RequestStatus::Assigned.as_str())
        .bind(RequestStatus::Resolved.as_str())
        .fetch_one(pool)
        .await?;
        Ok(RequestStats {
            total: row.total,
            open: row.open,
            assigned: row.assigned,
            resolved: row.resolved,
        })
    }
}
