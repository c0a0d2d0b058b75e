//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key         | Type     | Description                      |
//! |-------------|----------|----------------------------------|
//! | `Config`    | `Config` | Deployment configuration         |
//! | `FundCount` | `u64`    | Next fund id to be assigned      |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key              | Type         | Description                        |
//! |------------------|--------------|------------------------------------|
//! | `FundConfig(id)` | `FundConfig` | Immutable fund configuration       |
//! | `FundState(id)`  | `FundState`  | Mutable fund accounting            |
//! | `Custody(id)`    | `u64`        | Tokens held for the fund           |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Custody is pooled in the contract's token balance, so each fund's share is
//! tracked here and is always written before the token moves.

use fund_ledger::{store::advance, Error as LedgerError, FundStore};
use soroban_sdk::{contracttype, Env};

use crate::types::{Config, Fund, FundConfig, FundState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Deployment configuration (Instance).
    Config,
    /// Fund id counter (Instance).
    FundCount,
    /// Immutable fund configuration keyed by id (Persistent).
    FundConfig(u64),
    /// Mutable fund accounting keyed by id (Persistent).
    FundState(u64),
    /// Custody balance keyed by id (Persistent).
    Custody(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load_config(env: &Env) -> Option<Config> {
    let config = env.storage().instance().get(&DataKey::Config);
    if config.is_some() {
        bump_instance(env);
    }
    config
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Tokens currently held on behalf of fund `id`.
pub fn custody(env: &Env, id: u64) -> u64 {
    let key = DataKey::Custody(id);
    let balance: Option<u64> = env.storage().persistent().get(&key);
    match balance {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_custody(env: &Env, id: u64, balance: u64) {
    let key = DataKey::Custody(id);
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Fund book
// ─────────────────────────────────────────────────────────

/// [`FundStore`] over contract storage.
///
/// `put` only rewrites the `FundState` entry; the config half is immutable.
pub struct FundBook<'a> {
    env: &'a Env,
}

impl<'a> FundBook<'a> {
    pub fn new(env: &'a Env) -> Self {
        FundBook { env }
    }

    fn save_state(&self, id: u64, state: &FundState) {
        let key = DataKey::FundState(id);
        self.env.storage().persistent().set(&key, state);
        bump_persistent(self.env, &key);
    }
}

impl FundStore for FundBook<'_> {
    type Record = Fund;

    fn next_id(&self) -> u64 {
        bump_instance(self.env);
        self.env
            .storage()
            .instance()
            .get(&DataKey::FundCount)
            .unwrap_or(0)
    }

    fn allocate<F>(&mut self, build: F) -> Result<u64, LedgerError>
    where
        F: FnOnce(u64) -> Fund,
    {
        let id = self.next_id();
        let next = advance(id)?;
        let config_key = DataKey::FundConfig(id);
        if self.env.storage().persistent().has(&config_key) {
            return Err(LedgerError::IdInUse);
        }

        let (config, state) = build(id).split();
        self.env.storage().persistent().set(&config_key, &config);
        bump_persistent(self.env, &config_key);
        self.save_state(id, &state);
        self.env.storage().instance().set(&DataKey::FundCount, &next);
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<Fund, LedgerError> {
        let config_key = DataKey::FundConfig(id);
        let state_key = DataKey::FundState(id);
        let config: FundConfig = self
            .env
            .storage()
            .persistent()
            .get(&config_key)
            .ok_or(LedgerError::FundNotFound)?;
        let state: FundState = self
            .env
            .storage()
            .persistent()
            .get(&state_key)
            .ok_or(LedgerError::FundNotFound)?;
        bump_persistent(self.env, &config_key);
        bump_persistent(self.env, &state_key);
        Ok(Fund::join(config, state))
    }

    fn put(&mut self, id: u64, record: Fund) -> Result<(), LedgerError> {
        if !self.env.storage().persistent().has(&DataKey::FundConfig(id)) {
            return Err(LedgerError::FundNotFound);
        }
        self.save_state(id, &record.standing().into());
        Ok(())
    }
}
