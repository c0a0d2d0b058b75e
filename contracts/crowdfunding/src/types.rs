//! # Types
//!
//! Contract-side shapes of the ledger records.
//!
//! ## Config / State split
//!
//! A fund is stored as two persistent entries:
//!
//! - [`FundConfig`]: written once by `create`; never mutated.
//! - [`FundState`]: rewritten on every donation, withdrawal and close.
//!
//! The public API returns the reconstructed [`Fund`].

use fund_ledger::{Rules, Standing, Terms};
use soroban_sdk::{contracttype, Address, String};

/// Mirrors [`fund_ledger::DeadlinePolicy`].
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeadlinePolicy {
    /// Only `is_active` gates donations.
    Ignore,
    /// Donations at or after the due date are rejected.
    Reject,
}

/// Mirrors [`fund_ledger::WithdrawalPolicy`].
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawalPolicy {
    /// A withdrawal that drains custody to the reserve deactivates the fund.
    DeactivateOnDrain,
    /// Withdrawals never touch `is_active`.
    KeepActive,
}

impl From<DeadlinePolicy> for fund_ledger::DeadlinePolicy {
    fn from(policy: DeadlinePolicy) -> Self {
        match policy {
            DeadlinePolicy::Ignore => fund_ledger::DeadlinePolicy::Ignore,
            DeadlinePolicy::Reject => fund_ledger::DeadlinePolicy::Reject,
        }
    }
}

impl From<WithdrawalPolicy> for fund_ledger::WithdrawalPolicy {
    fn from(policy: WithdrawalPolicy) -> Self {
        match policy {
            WithdrawalPolicy::DeactivateOnDrain => fund_ledger::WithdrawalPolicy::DeactivateOnDrain,
            WithdrawalPolicy::KeepActive => fund_ledger::WithdrawalPolicy::KeepActive,
        }
    }
}

/// Deployment configuration, set once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Deployer of the contract.
    pub owner: Address,
    /// Stellar asset contract used for custody.
    pub token: Address,
    /// Custody floor per fund, paid by the creator at `create`.
    pub reserve: u64,
    pub deadline_policy: DeadlinePolicy,
    pub withdrawal_policy: WithdrawalPolicy,
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            reserve: self.reserve,
            deadline: self.deadline_policy.into(),
            withdrawal: self.withdrawal_policy.into(),
        }
    }
}

/// Immutable fund configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundConfig {
    pub id: u64,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub due_date: u64,
    pub created_at: u64,
    pub sum_required: u64,
    pub locked: bool,
}

/// Mutable fund accounting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundState {
    pub sum_donated: u64,
    pub sum_withdrawn: u64,
    pub is_active: bool,
}

impl From<Standing> for FundState {
    fn from(standing: Standing) -> Self {
        FundState {
            sum_donated: standing.sum_donated,
            sum_withdrawn: standing.sum_withdrawn,
            is_active: standing.is_active,
        }
    }
}

/// Full fund record as returned by `funds`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fund {
    /// Counter-assigned id, never reused.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Deadline (ledger timestamp, seconds).
    pub due_date: u64,
    pub created_at: u64,
    /// Donation target in token units.
    pub sum_required: u64,
    /// Cumulative donations; overfunding is allowed.
    pub sum_donated: u64,
    /// Cumulative payouts to the owner.
    pub sum_withdrawn: u64,
    pub is_active: bool,
    /// Owner withdrawals wait for `due_date` when set.
    pub locked: bool,
    /// Creator and sole withdrawal authority.
    pub owner: Address,
}

impl Fund {
    pub fn terms(&self) -> Terms<Address> {
        Terms {
            owner: self.owner.clone(),
            due_date: self.due_date,
            created_at: self.created_at,
            sum_required: self.sum_required,
            locked: self.locked,
        }
    }

    pub fn standing(&self) -> Standing {
        Standing {
            sum_donated: self.sum_donated,
            sum_withdrawn: self.sum_withdrawn,
            is_active: self.is_active,
        }
    }

    pub fn apply(&mut self, standing: Standing) {
        self.sum_donated = standing.sum_donated;
        self.sum_withdrawn = standing.sum_withdrawn;
        self.is_active = standing.is_active;
    }

    pub(crate) fn split(&self) -> (FundConfig, FundState) {
        let config = FundConfig {
            id: self.id,
            owner: self.owner.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            created_at: self.created_at,
            sum_required: self.sum_required,
            locked: self.locked,
        };
        (config, self.standing().into())
    }

    pub(crate) fn join(config: FundConfig, state: FundState) -> Self {
        Fund {
            id: config.id,
            name: config.name,
            description: config.description,
            due_date: config.due_date,
            created_at: config.created_at,
            sum_required: config.sum_required,
            sum_donated: state.sum_donated,
            sum_withdrawn: state.sum_withdrawn,
            is_active: state.is_active,
            locked: config.locked,
            owner: config.owner,
        }
    }
}
