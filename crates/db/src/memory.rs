//! In-memory store used for demos and tests.
//!
//! Behaves identically to the PostgreSQL-backed [`PgStore`]: same newest-
//! first ordering, same compare-and-set lifecycle guards, same stats.
//! Substituting one for the other must not change observable behaviour.
//! Contents live for the lifetime of the process.
//!
//! [`PgStore`]: crate::PgStore

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use mend_core::stats::{self, RequestStats};
use mend_core::status::RequestStatus;
use mend_core::types::DbId;

use crate::error::StoreResult;
use crate::models::repair_request::{CreateRepairRequest, RepairRequest, UserRole};
use crate::models::user::{CreateUser, User};
use crate::store::RepairStore;

#[derive(Debug, Default)]
struct Inner {
    next_user_id: DbId,
    users: BTreeMap<DbId, User>,
    next_request_id: DbId,
    requests: BTreeMap<DbId, RepairRequest>,
}

/// In-memory implementation of [`RepairStore`].
///
/// Lock poisoning is recovered, not re-raised: no operation at this
/// boundary panics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; ids break `created_at` ties so ordering stays
/// deterministic even when rows are created within the same tick.
fn newest_first<T, K>(items: &mut [T], key: K)
where
    K: Fn(&T) -> (mend_core::types::Timestamp, DbId),
{
    items.sort_by_key(|item| std::cmp::Reverse(key(item)));
}

#[async_trait]
impl RepairStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            name: input.name.clone(),
            location: input.location.clone(),
            skills: input.skills.clone(),
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.users.get(&id).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        newest_first(&mut users, |user| (user.created_at, user.id));
        Ok(users)
    }

    async fn create_repair_request(
        &self,
        input: &CreateRepairRequest,
    ) -> StoreResult<RepairRequest> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.next_request_id += 1;
        let request = RepairRequest {
            id: inner.next_request_id,
            item: input.item.clone(),
            description: input.description.clone(),
            urgency: input.urgency,
            skill_needed: input.skill_needed.clone(),
            location_notes: input.location_notes.clone(),
            notes: input.notes.clone(),
            requester_id: input.requester_id,
            requester_name: input.requester_name.clone(),
            requester_location: input.requester_location.clone(),
            status: RequestStatus::Open,
            assigned_to_id: None,
            gratitude_note: None,
            created_at: Utc::now(),
            resolved_at: None,
        };
        inner.requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn get_repair_request(&self, id: DbId) -> StoreResult<Option<RepairRequest>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.requests.get(&id).cloned())
    }

    async fn list_repair_requests(
        &self,
        status: Option<RequestStatus>,
    ) -> StoreResult<Vec<RepairRequest>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut requests: Vec<RepairRequest> = inner
            .requests
            .values()
            .filter(|request| status.map_or(true, |wanted| request.status == wanted))
            .cloned()
            .collect();
        newest_first(&mut requests, |request| (request.created_at, request.id));
        Ok(requests)
    }

    async fn assign_repairer(&self, request_id: DbId, user_id: DbId) -> StoreResult<bool> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        // An unknown claimer fails the guard, matching the SQL store's
        // EXISTS check.
        if !inner.users.contains_key(&user_id) {
            return Ok(false);
        }
        match inner.requests.get_mut(&request_id) {
            Some(request) if request.status.can_claim() => {
                request.status = RequestStatus::Assigned;
                request.assigned_to_id = Some(user_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn resolve_request(&self, request_id: DbId, gratitude_note: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match inner.requests.get_mut(&request_id) {
            Some(request) if request.status.can_resolve() => {
                request.status = RequestStatus::Resolved;
                request.gratitude_note = Some(gratitude_note.to_string());
                // First resolution stamps the time; a late gratitude note
                // keeps it.
                request.resolved_at.get_or_insert_with(Utc::now);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_user_requests(
        &self,
        user_id: DbId,
        role: UserRole,
    ) -> StoreResult<Vec<RepairRequest>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut requests: Vec<RepairRequest> = inner
            .requests
            .values()
            .filter(|request| match role {
                UserRole::Requester => request.requester_id == user_id,
                UserRole::Assignee => request.assigned_to_id == Some(user_id),
            })
            .cloned()
            .collect();
        newest_first(&mut requests, |request| (request.created_at, request.id));
        Ok(requests)
    }

    async fn get_stats(&self) -> StoreResult<RequestStats> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(stats::tally(
            inner.requests.values().map(|request| request.status),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mend_core::status::Urgency;

    fn profile(name: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            location: "Riverside".to_string(),
            skills: Vec::new(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        let first = store.create_user(&profile("Alice")).await.unwrap();
        let second = store.create_user(&profile("Bob")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn user_and_request_id_sequences_are_independent() {
        let store = MemoryStore::new();
        let user = store.create_user(&profile("Alice")).await.unwrap();
        let request = store
            .create_repair_request(&CreateRepairRequest {
                item: "Kettle".to_string(),
                description: "Won't heat".to_string(),
                urgency: Urgency::Low,
                skill_needed: String::new(),
                location_notes: None,
                notes: None,
                requester_id: user.id,
                requester_name: user.name.clone(),
                requester_location: user.location.clone(),
            })
            .await
            .unwrap();
        assert_eq!(request.id, 1);
    }

    #[tokio::test]
    async fn assigning_a_missing_request_reports_false() {
        let store = MemoryStore::new();
        store.create_user(&profile("Alice")).await.unwrap();
        assert!(!store.assign_repairer(42, 1).await.unwrap());
    }

    #[tokio::test]
    async fn operations_survive_a_poisoned_lock() {
        let store = MemoryStore::new();
        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.write().unwrap_or_else(PoisonError::into_inner);
            panic!("poison the lock");
        }));
        assert!(panicked.is_err());

        let user = store.create_user(&profile("Alice")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }
}
