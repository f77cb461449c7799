//! The data-access contract between the presentation layer and storage.
//!
//! [`RepairStore`] is the only surface the presentation layer needs: ten
//! storage operations plus the two derived ones ([`sign_in`] and
//! [`browse`]) provided as default methods. Implementations must be
//! behaviourally indistinguishable so the in-memory store can stand in for
//! PostgreSQL in demos and tests.
//!
//! [`sign_in`]: RepairStore::sign_in
//! [`browse`]: RepairStore::browse

use async_trait::async_trait;
use mend_core::browse::BrowseFilter;
use mend_core::identity;
use mend_core::stats::RequestStats;
use mend_core::status::RequestStatus;
use mend_core::types::DbId;

use crate::error::StoreResult;
use crate::models::repair_request::{CreateRepairRequest, RepairRequest, UserRole};
use crate::models::user::{CreateUser, User};

/// Result of a sign-in: the user either already existed or was created.
///
/// Both carry the full [`User`]; the distinction only drives the greeting.
#[derive(Debug, Clone)]
pub enum SignInOutcome {
    /// A user with the same `(name, location)` identity already existed.
    Returning(User),
    /// No matching identity was found; a fresh user was created.
    New(User),
}

impl SignInOutcome {
    /// The signed-in user, whichever way they arrived.
    pub fn user(&self) -> &User {
        match self {
            Self::Returning(user) | Self::New(user) => user,
        }
    }

    /// Consume the outcome, yielding the signed-in user.
    pub fn into_user(self) -> User {
        match self {
            Self::Returning(user) | Self::New(user) => user,
        }
    }

    /// Whether this sign-in created the user.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }
}

/// Storage operations over the `users` and `repair_requests` collections.
///
/// Lookups of missing records return `Ok(None)`; guarded lifecycle writes
/// that do not apply return `Ok(false)`. Only genuine storage faults are
/// errors.
#[async_trait]
pub trait RepairStore: Send + Sync {
    /// Store a new user, assigning a fresh id and creation timestamp.
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User>;

    /// Look up a user by id.
    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>>;

    /// All users, newest first.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Store a new repair request.
    ///
    /// The request always starts `open`, unclaimed, and unresolved; the DTO
    /// cannot express anything else.
    async fn create_repair_request(
        &self,
        input: &CreateRepairRequest,
    ) -> StoreResult<RepairRequest>;

    /// Look up a repair request by id.
    async fn get_repair_request(&self, id: DbId) -> StoreResult<Option<RepairRequest>>;

    /// All repair requests, newest first, optionally narrowed to one status.
    async fn list_repair_requests(
        &self,
        status: Option<RequestStatus>,
    ) -> StoreResult<Vec<RepairRequest>>;

    /// Claim an open request for `user_id`: `open -> assigned`.
    ///
    /// Compare-and-set — applies only while the request is still open.
    /// Returns `false` when the request is missing, was already claimed,
    /// or `user_id` names no known user, so a racing second claimer loses
    /// instead of silently overwriting the first. Self-claiming is not
    /// prevented.
    async fn assign_repairer(&self, request_id: DbId, user_id: DbId) -> StoreResult<bool>;

    /// Mark an assigned request resolved: `assigned -> resolved`.
    ///
    /// Stamps `resolved_at` on first resolution and stores the gratitude
    /// note (possibly empty, meaning "resolved without comment"). Calling
    /// this again on an already-resolved request is the documented path for
    /// attaching a gratitude note later; it overwrites the note but keeps
    /// the original `resolved_at`. Returns `false` when the request is
    /// missing or still open — there is no `open -> resolved` shortcut.
    async fn resolve_request(&self, request_id: DbId, gratitude_note: &str) -> StoreResult<bool>;

    /// Requests the user is involved in, on the given side.
    async fn list_user_requests(
        &self,
        user_id: DbId,
        role: UserRole,
    ) -> StoreResult<Vec<RepairRequest>>;

    /// Aggregate counts over all repair requests, bucketed by status.
    async fn get_stats(&self) -> StoreResult<RequestStats>;

    /// Sign a user in by self-asserted `(name, location)` identity.
    ///
    /// Case-insensitive match against the existing users; on a hit the
    /// stored user is returned unchanged (the profile's skills are not
    /// merged in), otherwise a fresh user is created from the profile.
    async fn sign_in(&self, profile: &CreateUser) -> StoreResult<SignInOutcome> {
        let users = self.list_users().await?;
        if let Some(existing) = users.into_iter().find(|user| {
            identity::same_identity(&user.name, &user.location, &profile.name, &profile.location)
        }) {
            return Ok(SignInOutcome::Returning(existing));
        }
        Ok(SignInOutcome::New(self.create_user(profile).await?))
    }

    /// List every request satisfying a browse filter, newest first.
    ///
    /// Filtering happens in-process over the full listed set, not in the
    /// store, so the criteria stay identical across implementations.
    async fn browse(&self, filter: &BrowseFilter) -> StoreResult<Vec<RepairRequest>> {
        let requests = self.list_repair_requests(None).await?;
        Ok(requests
            .into_iter()
            .filter(|request| request.matches(filter))
            .collect())
    }
}
