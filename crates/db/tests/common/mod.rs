//! Shared fixtures for the store contract tests.
//!
//! All suites run against [`MemoryStore`], which must be behaviourally
//! indistinguishable from the PostgreSQL store.

use mend_core::status::Urgency;
use mend_db::models::repair_request::CreateRepairRequest;
use mend_db::models::user::{CreateUser, User};

pub fn profile(name: &str, location: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        location: location.to_string(),
        skills: Vec::new(),
    }
}

// Not every suite uses every fixture.
#[allow(dead_code)]
pub fn skilled_profile(name: &str, location: &str, skills: &[&str]) -> CreateUser {
    CreateUser {
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..profile(name, location)
    }
}

pub fn request_for(requester: &User, item: &str) -> CreateRepairRequest {
    CreateRepairRequest {
        item: item.to_string(),
        description: "Stopped working".to_string(),
        urgency: Urgency::Medium,
        skill_needed: String::new(),
        location_notes: None,
        notes: None,
        requester_id: requester.id,
        requester_name: requester.name.clone(),
        requester_location: requester.location.clone(),
    }
}
