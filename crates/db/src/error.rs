//! Adapter-boundary error type.
//!
//! Storage faults are terminal at this boundary: every operation returns a
//! value (`Ok(None)`, `Ok(false)`, an empty vec) or a [`StoreError`] the
//! caller can surface however it likes. Nothing above the adapter ever sees
//! a panic, and a missing record is never an error.

/// Error raised by a [`RepairStore`](crate::RepairStore) operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing database failed or rejected an operation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;
