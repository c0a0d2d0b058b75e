//! # Withdrawal guard
//!
//! Authorizes owner payouts out of a fund's custody.
//!
//! Payouts are planned against the custody balance the backend reports and
//! the configured reserve: at most `custody - reserve` may leave, so custody
//! never drops below the reserve. [`Withdrawal::commit`] updates the record
//! (`sum_withdrawn`, and `is_active` under [`WithdrawalPolicy::DeactivateOnDrain`])
//! and only then yields the [`Transfer`]. A callback fired by the payout that
//! re-enters the backend therefore sees the committed record and the reduced
//! custody, and cannot be paid twice.

use crate::{Amount, Error, Rules, Standing, Terms, Transfer, WithdrawalPolicy};

/// A checked payout, not yet applied.
#[derive(Debug, PartialEq, Eq)]
pub struct Withdrawal {
    payout: u64,
    remaining: u64,
    sum_withdrawn: u64,
    deactivate: bool,
}

impl Withdrawal {
    pub const fn payout(&self) -> u64 {
        self.payout
    }

    /// Custody balance left behind once the payout is executed.
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether committing flips the fund to inactive.
    pub const fn deactivates(&self) -> bool {
        self.deactivate
    }

    pub fn commit(self, standing: &mut Standing) -> Transfer {
        standing.sum_withdrawn = self.sum_withdrawn;
        if self.deactivate {
            standing.is_active = false;
        }
        Transfer::new(self.payout)
    }
}

/// Plan a payout of `amount` out of `custody` for `caller`.
///
/// Inactive funds may still be swept while custody exceeds the reserve.
pub fn plan_withdrawal<O: PartialEq>(
    rules: &Rules,
    terms: &Terms<O>,
    standing: &Standing,
    caller: &O,
    custody: u64,
    amount: Amount,
    now: u64,
) -> Result<Withdrawal, Error> {
    if *caller != terms.owner {
        return Err(Error::NotOwner);
    }
    if terms.locked && now < terms.due_date {
        return Err(Error::Locked);
    }
    if amount == Amount::Exact(0) {
        return Err(Error::InvalidAmount);
    }
    if custody <= rules.reserve {
        return Err(Error::InsufficientBalance);
    }

    let available = custody - rules.reserve;
    let payout = match amount {
        Amount::All => available,
        Amount::Exact(requested) if requested > available => {
            return Err(Error::InsufficientBalance)
        }
        Amount::Exact(requested) => requested,
    };
    let remaining = custody - payout;
    let sum_withdrawn = standing
        .sum_withdrawn
        .checked_add(payout)
        .ok_or(Error::Overflow)?;
    let deactivate = rules.withdrawal == WithdrawalPolicy::DeactivateOnDrain
        && remaining == rules.reserve;

    Ok(Withdrawal {
        payout,
        remaining,
        sum_withdrawn,
        deactivate,
    })
}

/// Owner-driven deactivation without a payout.
pub fn close<O: PartialEq>(terms: &Terms<O>, standing: &mut Standing, caller: &O) -> Result<(), Error> {
    if *caller != terms.owner {
        return Err(Error::NotOwner);
    }
    if !standing.is_active {
        return Err(Error::Inactive);
    }
    standing.is_active = false;
    Ok(())
}
