//! User entity model and DTOs.

use mend_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
///
/// Users are created on first sign-in and never updated or deleted by this
/// system; `(name, location)` is the self-asserted, case-insensitive
/// identity key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub location: String,
    /// Free-text skills, display and skill-hint only. No canonicalisation.
    pub skills: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a user (equivalently: the sign-in profile).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_validation() {
        let input = CreateUser {
            name: String::new(),
            location: "Riverside".to_string(),
            skills: Vec::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_location_fails_validation() {
        let input = CreateUser {
            name: "Alice".to_string(),
            location: String::new(),
            skills: Vec::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn skills_are_optional() {
        let input: CreateUser =
            serde_json::from_str(r#"{"name": "Alice", "location": "Riverside"}"#).unwrap();
        assert!(input.validate().is_ok());
        assert!(input.skills.is_empty());
    }
}
