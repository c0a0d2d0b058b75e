//! Host abstraction the program runs against.
//!
//! A [`Runtime`] owns the clock, lamport balances and typed account data.
//! [`Bank`] is the in-memory implementation used by tests and local
//! simulation; [`Bank::transact`] gives all-or-nothing instruction execution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pubkey::Pubkey;
use crate::state::AccountData;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("account {account} holds {available} lamports, needs {needed}")]
    InsufficientFunds {
        account: Pubkey,
        needed: u64,
        available: u64,
    },
    #[error("lamport balance of {0} would overflow")]
    LamportOverflow(Pubkey),
}

pub trait Runtime {
    /// Current unix timestamp in seconds.
    fn now(&self) -> u64;

    fn lamports(&self, key: &Pubkey) -> u64;

    fn load(&self, key: &Pubkey) -> Option<AccountData>;

    fn store(&mut self, key: Pubkey, data: AccountData);

    /// Move `lamports` from `from` to `to`.
    ///
    /// Implementations may run receiver code once the lamports have landed;
    /// that code can call back into the program.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> Result<(), RuntimeError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub lamports: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AccountData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    clock: u64,
    accounts: BTreeMap<Pubkey, Account>,
}

impl Bank {
    pub fn new(clock: u64) -> Self {
        Bank {
            clock,
            accounts: BTreeMap::new(),
        }
    }

    pub fn warp(&mut self, clock: u64) {
        self.clock = clock;
    }

    /// Mint `lamports` into `key`.
    pub fn airdrop(&mut self, key: &Pubkey, lamports: u64) -> Result<(), RuntimeError> {
        let account = self.accounts.entry(*key).or_default();
        account.lamports = account
            .lamports
            .checked_add(lamports)
            .ok_or(RuntimeError::LamportOverflow(*key))?;
        Ok(())
    }

    pub fn account(&self, key: &Pubkey) -> Option<&Account> {
        self.accounts.get(key)
    }

    /// Sum of all lamports held in the bank.
    pub fn total_lamports(&self) -> u128 {
        self.accounts.values().map(|a| u128::from(a.lamports)).sum()
    }

    /// Run `f` against this bank, discarding every change if it fails.
    pub fn transact<T, E>(&mut self, f: impl FnOnce(&mut Bank) -> Result<T, E>) -> Result<T, E> {
        let checkpoint = self.clone();
        let result = f(self);
        if result.is_err() {
            tracing::debug!("transaction failed, rolling back");
            *self = checkpoint;
        }
        result
    }

    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn restore(json: &str) -> Result<Bank, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Runtime for Bank {
    fn now(&self) -> u64 {
        self.clock
    }

    fn lamports(&self, key: &Pubkey) -> u64 {
        self.accounts.get(key).map_or(0, |a| a.lamports)
    }

    fn load(&self, key: &Pubkey) -> Option<AccountData> {
        self.accounts.get(key).and_then(|a| a.data.clone())
    }

    fn store(&mut self, key: Pubkey, data: AccountData) {
        self.accounts.entry(key).or_default().data = Some(data);
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> Result<(), RuntimeError> {
        let available = self.lamports(from);
        if available < lamports {
            return Err(RuntimeError::InsufficientFunds {
                account: *from,
                needed: lamports,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .lamports(to)
            .checked_add(lamports)
            .ok_or(RuntimeError::LamportOverflow(*to))?;

        self.accounts.entry(*from).or_default().lamports = available - lamports;
        self.accounts.entry(*to).or_default().lamports = credited;
        Ok(())
    }
}
