//! In-process browse filtering.
//!
//! Browsing works over the full listed request set: the store returns
//! everything and [`BrowseFilter::matches`] narrows it down here, so the
//! result-set size is bounded by the total request count rather than by
//! filter selectivity. Criteria combine with logical AND; there is no OR
//! and no ranking.

use serde::{Deserialize, Serialize};

use crate::status::{RequestStatus, Urgency};

/// Skill-category value meaning "no category constraint".
pub const CATEGORY_ALL: &str = "All";

/// Criteria for browsing repair requests.
///
/// Each dimension is optional: an empty status or urgency set, an absent or
/// [`CATEGORY_ALL`] category, and an absent or empty location fragment all
/// pass every request on that dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseFilter {
    /// Statuses to include. Defaults to the still-actionable ones.
    pub statuses: Vec<RequestStatus>,
    /// Exact skill category, or `None` / `"All"` for no constraint.
    pub skill_category: Option<String>,
    /// Case-insensitive substring matched against the requester's location.
    pub location: Option<String>,
    /// Urgency levels to include; empty means all.
    pub urgencies: Vec<Urgency>,
}

impl Default for BrowseFilter {
    /// Open and assigned requests, any skill, any location, any urgency.
    fn default() -> Self {
        Self {
            statuses: vec![RequestStatus::Open, RequestStatus::Assigned],
            skill_category: None,
            location: None,
            urgencies: Vec::new(),
        }
    }
}

impl BrowseFilter {
    /// A filter that passes every request.
    pub fn any() -> Self {
        Self {
            statuses: Vec::new(),
            skill_category: None,
            location: None,
            urgencies: Vec::new(),
        }
    }

    /// Whether a request with the given fields satisfies every criterion.
    pub fn matches(
        &self,
        status: RequestStatus,
        skill_needed: &str,
        requester_location: &str,
        urgency: Urgency,
    ) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&status) {
            return false;
        }

        if let Some(category) = &self.skill_category {
            if category != CATEGORY_ALL && skill_needed != category {
                return false;
            }
        }

        if let Some(fragment) = &self.location {
            if !fragment.is_empty()
                && !requester_location
                    .to_lowercase()
                    .contains(&fragment.to_lowercase())
            {
                return false;
            }
        }

        if !self.urgencies.is_empty() && !self.urgencies.contains(&urgency) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(filter: &BrowseFilter, status: RequestStatus, skill: &str, location: &str) -> bool {
        filter.matches(status, skill, location, Urgency::Medium)
    }

    #[test]
    fn default_filter_passes_open_and_assigned_only() {
        let filter = BrowseFilter::default();
        assert!(matches(&filter, RequestStatus::Open, "", "Riverside"));
        assert!(matches(&filter, RequestStatus::Assigned, "", "Riverside"));
        assert!(!matches(&filter, RequestStatus::Resolved, "", "Riverside"));
    }

    #[test]
    fn any_filter_passes_everything() {
        let filter = BrowseFilter::any();
        for status in RequestStatus::ALL {
            for urgency in Urgency::ALL {
                assert!(filter.matches(status, "Plumbing", "Riverside", urgency));
            }
        }
    }

    #[test]
    fn skill_category_is_an_exact_match() {
        let filter = BrowseFilter {
            skill_category: Some("Plumbing".to_string()),
            ..BrowseFilter::any()
        };
        assert!(matches(&filter, RequestStatus::Open, "Plumbing", "Riverside"));
        assert!(!matches(&filter, RequestStatus::Open, "Electrical", "Riverside"));
        // Categories do not substring-match the way the skill hint does.
        assert!(!matches(&filter, RequestStatus::Open, "Plumbing and more", "Riverside"));
    }

    #[test]
    fn all_category_passes_every_skill() {
        let filter = BrowseFilter {
            skill_category: Some(CATEGORY_ALL.to_string()),
            ..BrowseFilter::any()
        };
        assert!(matches(&filter, RequestStatus::Open, "Electrical", "Riverside"));
        assert!(matches(&filter, RequestStatus::Open, "", "Riverside"));
    }

    #[test]
    fn location_is_a_case_insensitive_substring() {
        let filter = BrowseFilter {
            location: Some("river".to_string()),
            ..BrowseFilter::any()
        };
        assert!(matches(&filter, RequestStatus::Open, "", "Riverside"));
        assert!(matches(&filter, RequestStatus::Open, "", "EAST RIVERBANK"));
        assert!(!matches(&filter, RequestStatus::Open, "", "Hillcrest"));
    }

    #[test]
    fn empty_location_fragment_passes_everything() {
        let filter = BrowseFilter {
            location: Some(String::new()),
            ..BrowseFilter::any()
        };
        assert!(matches(&filter, RequestStatus::Open, "", "Hillcrest"));
    }

    #[test]
    fn urgency_set_membership() {
        let filter = BrowseFilter {
            urgencies: vec![Urgency::High],
            ..BrowseFilter::any()
        };
        assert!(filter.matches(RequestStatus::Open, "", "", Urgency::High));
        assert!(!filter.matches(RequestStatus::Open, "", "", Urgency::Low));
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = BrowseFilter {
            statuses: vec![RequestStatus::Open],
            skill_category: Some("Electrical".to_string()),
            location: Some("river".to_string()),
            urgencies: vec![Urgency::High],
        };
        assert!(filter.matches(RequestStatus::Open, "Electrical", "Riverside", Urgency::High));
        // One failing dimension rejects the request.
        assert!(!filter.matches(RequestStatus::Assigned, "Electrical", "Riverside", Urgency::High));
        assert!(!filter.matches(RequestStatus::Open, "Electrical", "Hillcrest", Urgency::High));
    }
}
