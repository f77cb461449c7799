//! Pure domain logic for the community micro-repair exchange.
//!
//! This crate has zero I/O and no internal dependencies so the persistence
//! layer, any presentation layer, and tests can all share it:
//!
//! - [`status`] — the request lifecycle state machine and urgency levels.
//! - [`skill`] — skill categories and the advisory skill-match hint.
//! - [`identity`] — case-insensitive sign-in identity matching.
//! - [`browse`] — the in-process browse filter predicate.
//! - [`stats`] — status tally over the full request set.

pub mod browse;
pub mod identity;
pub mod skill;
pub mod stats;
pub mod status;
pub mod types;

pub use browse::BrowseFilter;
pub use stats::RequestStats;
pub use status::{RequestStatus, Urgency};
