//! PostgreSQL-backed store.

use async_trait::async_trait;

use mend_core::stats::RequestStats;
use mend_core::status::RequestStatus;
use mend_core::types::DbId;

use crate::error::StoreResult;
use crate::models::repair_request::{CreateRepairRequest, RepairRequest, UserRole};
use crate::models::user::{CreateUser, User};
use crate::repositories::{RepairRequestRepo, UserRepo};
use crate::store::RepairStore;
use crate::DbPool;

/// [`RepairStore`] implementation over a PostgreSQL connection pool.
///
/// A thin facade over the repository layer; all query text lives in
/// [`UserRepo`] and [`RepairRequestRepo`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    /// Wrap an existing pool. The caller owns pool lifecycle.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for migrations and test setup.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl RepairStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn create_repair_request(
        &self,
        input: &CreateRepairRequest,
    ) -> StoreResult<RepairRequest> {
        Ok(RepairRequestRepo::create(&self.pool, input).await?)
    }

    async fn get_repair_request(&self, id: DbId) -> StoreResult<Option<RepairRequest>> {
        Ok(RepairRequestRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_repair_requests(
        &self,
        status: Option<RequestStatus>,
    ) -> StoreResult<Vec<RepairRequest>> {
        Ok(RepairRequestRepo::list(&self.pool, status).await?)
    }

    async fn assign_repairer(&self, request_id: DbId, user_id: DbId) -> StoreResult<bool> {
        Ok(RepairRequestRepo::assign(&self.pool, request_id, user_id).await?)
    }

    async fn resolve_request(&self, request_id: DbId, gratitude_note: &str) -> StoreResult<bool> {
        Ok(RepairRequestRepo::resolve(&self.pool, request_id, gratitude_note).await?)
    }

    async fn list_user_requests(
        &self,
        user_id: DbId,
        role: UserRole,
    ) -> StoreResult<Vec<RepairRequest>> {
        Ok(RepairRequestRepo::list_for_user(&self.pool, user_id, role).await?)
    }

    async fn get_stats(&self) -> StoreResult<RequestStats> {
        Ok(RepairRequestRepo::stats(&self.pool).await?)
    }
}
