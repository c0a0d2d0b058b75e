//! # Types
//!
//! A fund is split into two halves, the same way the contract backend lays
//! it out in storage:
//!
//! - [`Terms`]: written once at creation, never mutated afterwards.
//! - [`Standing`]: the accounting half, touched by donations and withdrawals.
//!
//! Text fields (name, description) stay with the backends; no rule reads them.
//!
//! ## Lifecycle
//!
//! ```text
//! [nonexistent] --create--> Active --donate--> Active
//!                           Active --withdraw--> Active | Inactive
//!                           Active --close--> Inactive
//!                         Inactive --withdraw--> Inactive (sweep above reserve)
//! ```

/// Immutable half of a fund.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terms<O> {
    /// Creator; sole authority for withdrawal and close.
    pub owner: O,
    /// Deadline in seconds.
    pub due_date: u64,
    /// Host timestamp at creation.
    pub created_at: u64,
    /// Donation target in the smallest value unit.
    pub sum_required: u64,
    /// When set, the owner cannot withdraw before `due_date`.
    pub locked: bool,
}

/// Mutable half of a fund.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    /// Cumulative donations. Never decreases.
    pub sum_donated: u64,
    /// Cumulative payouts to the owner. Never decreases.
    pub sum_withdrawn: u64,
    pub is_active: bool,
}

impl Standing {
    /// Standing of a freshly created fund.
    pub const fn opened() -> Self {
        Standing {
            sum_donated: 0,
            sum_withdrawn: 0,
            is_active: true,
        }
    }
}

/// Whether donations are gated by the fund's due date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeadlinePolicy {
    /// Only `is_active` gates donations.
    #[default]
    Ignore,
    /// Donations at or after `due_date` fail with `Expired`.
    Reject,
}

/// What a successful withdrawal does to `is_active`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WithdrawalPolicy {
    /// Deactivate once custody is drained down to the reserve.
    #[default]
    DeactivateOnDrain,
    /// Leave the fund open for further donations and partial withdrawals.
    KeepActive,
}

/// Ledger-wide configuration, fixed by the backend at deployment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Minimum custody balance a fund keeps after any withdrawal.
    pub reserve: u64,
    pub deadline: DeadlinePolicy,
    pub withdrawal: WithdrawalPolicy,
}

/// Requested withdrawal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Amount {
    /// Everything above the reserve.
    All,
    Exact(u64),
}

/// An external value movement the backend must perform.
///
/// Only obtainable from `Donation::commit` or `Withdrawal::commit`, so the
/// record is always updated before any value leaves or enters custody.
#[must_use = "a committed transfer must be executed by the backend"]
#[derive(Debug, PartialEq, Eq)]
pub struct Transfer {
    amount: u64,
}

impl Transfer {
    pub(crate) const fn new(amount: u64) -> Self {
        Transfer { amount }
    }

    pub const fn amount(&self) -> u64 {
        self.amount
    }
}
