//! Request lifecycle status and urgency enums.
//!
//! [`RequestStatus`] is the one state machine in the system:
//! `open -> assigned -> resolved`, strictly forward, no regression
//! transition. The string forms match the `status` / `urgency` column CHECK
//! constraints in the migrations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Error returned when a stored status string is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown request status '{0}'")]
pub struct ParseStatusError(pub String);

/// Lifecycle state of a repair request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Logged by the requester, waiting for a neighbour to claim it.
    Open,
    /// Claimed by a repairer, waiting to be marked done.
    Assigned,
    /// Repair completed. Terminal.
    Resolved,
}

impl RequestStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [RequestStatus; 3] = [Self::Open, Self::Assigned, Self::Resolved];

    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Assigned => "assigned",
            Self::Resolved => "resolved",
        }
    }

    /// Whether a claim may be applied in this state.
    ///
    /// Claiming is compare-and-set: it only succeeds while the request is
    /// still open, so a second claimer cannot silently overwrite the first.
    pub fn can_claim(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether resolution may be applied in this state.
    ///
    /// Resolving from `Assigned` completes the repair. Re-resolving an
    /// already-resolved request is the documented path for attaching a
    /// gratitude note after the fact. An open request cannot skip straight
    /// to resolved.
    pub fn can_resolve(self) -> bool {
        matches!(self, Self::Assigned | Self::Resolved)
    }

    /// Whether this state admits no further lifecycle transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "assigned" => Ok(Self::Assigned),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for RequestStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Error returned when a stored urgency string is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown urgency '{0}'")]
pub struct ParseUrgencyError(pub String);

/// How soon the requester needs the repair.
///
/// Stored capitalised (`"Low"` etc.), matching the intake form choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// All urgency levels in the order the intake form offers them.
    pub const ALL: [Urgency; 3] = [Self::Low, Self::Medium, Self::High];

    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ParseUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseUrgencyError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- RequestStatus -------------------------------------------------------

    #[test]
    fn status_string_round_trip() {
        for status in RequestStatus::ALL {
            assert_eq!(status.as_str().parse::<RequestStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!("OPEN".parse::<RequestStatus>(), Ok(RequestStatus::Open));
        assert_eq!("Resolved".parse::<RequestStatus>(), Ok(RequestStatus::Resolved));
    }

    #[test]
    fn status_parse_rejects_unknown() {
        let err = "cancelled".parse::<RequestStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("cancelled".to_string()));
    }

    #[test]
    fn only_open_requests_can_be_claimed() {
        assert!(RequestStatus::Open.can_claim());
        assert!(!RequestStatus::Assigned.can_claim());
        assert!(!RequestStatus::Resolved.can_claim());
    }

    #[test]
    fn open_requests_cannot_be_resolved_directly() {
        assert!(!RequestStatus::Open.can_resolve());
        assert!(RequestStatus::Assigned.can_resolve());
    }

    #[test]
    fn resolved_admits_re_resolution_for_late_gratitude() {
        assert!(RequestStatus::Resolved.can_resolve());
    }

    #[test]
    fn resolved_is_the_only_terminal_state() {
        assert!(RequestStatus::Resolved.is_terminal());
        assert!(!RequestStatus::Open.is_terminal());
        assert!(!RequestStatus::Assigned.is_terminal());
    }

    #[test]
    fn status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Assigned).unwrap(),
            "\"assigned\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(parsed, RequestStatus::Open);
    }

    // -- Urgency -------------------------------------------------------------

    #[test]
    fn urgency_string_round_trip() {
        for urgency in Urgency::ALL {
            assert_eq!(urgency.as_str().parse::<Urgency>(), Ok(urgency));
        }
    }

    #[test]
    fn urgency_is_stored_capitalised() {
        assert_eq!(Urgency::High.as_str(), "High");
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"High\"");
    }

    #[test]
    fn urgency_parse_rejects_unknown() {
        assert!("urgent".parse::<Urgency>().is_err());
    }
}
