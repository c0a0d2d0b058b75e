//! # Donation ledger
//!
//! Donations run in two phases. [`plan_donation`] checks the fund and
//! computes the new total without touching anything; [`Donation::commit`]
//! writes the total into the [`Standing`] and hands back the [`Transfer`]
//! the backend then executes (donor -> custody).

use crate::{DeadlinePolicy, Error, Rules, Standing, Terms, Transfer};

/// A checked donation, not yet applied.
#[derive(Debug, PartialEq, Eq)]
pub struct Donation {
    amount: u64,
    sum_donated: u64,
}

impl Donation {
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// `sum_donated` once this donation is committed.
    pub const fn sum_donated(&self) -> u64 {
        self.sum_donated
    }

    pub fn commit(self, standing: &mut Standing) -> Transfer {
        standing.sum_donated = self.sum_donated;
        Transfer::new(self.amount)
    }
}

/// Check that `amount` may be donated to the fund at `now`.
///
/// Overfunding past `sum_required` is permitted.
pub fn plan_donation<O>(
    rules: &Rules,
    terms: &Terms<O>,
    standing: &Standing,
    amount: u64,
    now: u64,
) -> Result<Donation, Error> {
    if !standing.is_active {
        return Err(Error::Inactive);
    }
    if rules.deadline == DeadlinePolicy::Reject && now >= terms.due_date {
        return Err(Error::Expired);
    }
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }
    let sum_donated = standing
        .sum_donated
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    Ok(Donation {
        amount,
        sum_donated,
    })
}
