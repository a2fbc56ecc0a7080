//! Staleness classification
//!
//! A single predicate shared by the stream producers and the status
//! aggregator, so what a viewer receives and what status reports never
//! diverge.

use std::time::Duration;

/// Classify an item of the given age as fresh or stale.
///
/// An age exactly equal to the threshold counts as stale.
pub fn is_fresh(age: Duration, threshold: Duration) -> bool {
    age < threshold
}
