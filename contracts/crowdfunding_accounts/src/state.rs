//! Account payloads owned by the program.
//!
//! | Account  | Address seeds                     | Payload           |
//! |----------|-----------------------------------|-------------------|
//! | Config   | `["config"]`                      | [`ConfigAccount`] |
//! | Counter  | `["counter"]`                     | [`CounterAccount`]|
//! | Fund     | `["CROWDFUNDING", id as u64 LE]`  | [`FundAccount`]   |
//!
//! A fund account's lamport balance is its custody; the reserve stays in it
//! for the account's whole life.

use fund_ledger::{Standing, Terms};
use serde::{Deserialize, Serialize};

use crate::config::ProgramConfig;
use crate::pubkey::Pubkey;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigAccount {
    /// Signer of `initialize`.
    pub authority: Pubkey,
    pub config: ProgramConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterAccount {
    /// Id handed to the next created fund.
    pub next_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundAccount {
    pub id: u64,
    pub owner: Pubkey,
    pub name: String,
    pub description: String,
    pub due_date: u64,
    pub created_at: u64,
    pub sum_required: u64,
    pub sum_donated: u64,
    pub sum_withdrawn: u64,
    pub is_active: bool,
    pub locked: bool,
}

impl FundAccount {
    pub fn terms(&self) -> Terms<Pubkey> {
        Terms {
            owner: self.owner,
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
}

/// Typed account data as kept by a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountData {
    Config(ConfigAccount),
    Counter(CounterAccount),
    Fund(FundAccount),
}
