//! Creation-time checks.

use crate::Error;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;

/// `due_date` must be strictly later than `now + ONE_DAY`.
///
/// Name, description and target carry no rule beyond their types.
pub fn validate_creation(due_date: u64, now: u64) -> Result<(), Error> {
    if due_date > now.saturating_add(ONE_DAY) {
        Ok(())
    } else {
        Err(Error::InvalidDueDate)
    }
}
