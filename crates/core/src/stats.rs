//! Status tally over the full request set.

use serde::Serialize;

use crate::status::RequestStatus;

/// Aggregate repair counts, bucketed by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestStats {
    pub total: i64,
    pub open: i64,
    pub assigned: i64,
    pub resolved: i64,
}

impl RequestStats {
    /// `open + assigned + resolved == total` holds for every reachable state.
    pub fn is_consistent(&self) -> bool {
        self.open + self.assigned + self.resolved == self.total
    }
}

/// Bucket counts by status.
///
/// Recomputed on demand over the full set; no incremental maintenance or
/// caching at the expected scale.
pub fn tally<I>(statuses: I) -> RequestStats
where
    I: IntoIterator<Item = RequestStatus>,
{
    let mut stats = RequestStats::default();
    for status in statuses {
        stats.total += 1;
        match status {
            RequestStatus::Open => stats.open += 1,
            RequestStatus::Assigned => stats.assigned += 1,
            RequestStatus::Resolved => stats.resolved += 1,
        }
    }
    stats
}
