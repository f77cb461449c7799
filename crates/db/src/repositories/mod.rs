//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. [`PgStore`] composes them
//! into the [`RepairStore`] contract.
//!
//! [`PgStore`]: crate::PgStore
//! [`RepairStore`]: crate::RepairStore

pub mod repair_request_repo;
pub mod user_repo;

pub use repair_request_repo::RepairRequestRepo;
pub use user_repo::UserRepo;
