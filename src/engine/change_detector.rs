//! Duplicate suppression between poll cycles.

use crate::models::Report;

/// Whether `current` must be sent, given the last report that was.
///
/// True iff the two reports differ in any field, hence always true against
/// the initial sentinel report.
pub fn should_notify(previous: &Report, current: &Report) -> bool {
    previous != current
}
