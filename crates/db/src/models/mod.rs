//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (the in-memory store reuses the same structs).
//! - A `Deserialize` + `Validate` create DTO for inserts.

pub mod repair_request;
pub mod user;
