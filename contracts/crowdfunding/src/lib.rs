//! # Crowdfunding Contract
//!
//! Soroban contract exposing the fund lifecycle with numeric fund ids and
//! pooled token custody.
//!
//! | Phase      | Entry Point(s)                                 |
//! |------------|------------------------------------------------|
//! | Bootstrap  | [`Crowdfunding::init`]                         |
//! | Creation   | [`Crowdfunding::create`]                       |
//! | Funding    | [`Crowdfunding::donate`]                       |
//! | Payout     | `withdraw`, `withdraw_amount`, `close`         |
//! | Queries    | `funds`, `available_id`, `custody_balance`, `owner`, `config` |
//!
//! ## Architecture
//!
//! The rules live in [`fund_ledger`]; storage access is delegated to
//! [`storage`]. Every mutating entry point follows the same order: load,
//! plan (pure checks), commit to storage, and only then move tokens.

#![no_std]

use fund_ledger::{
    close as close_fund, plan_donation, plan_withdrawal, validate_creation, Amount,
    Error as LedgerError, FundStore, Standing,
};
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod test_policy;

use storage::FundBook;
pub use types::{Config, DeadlinePolicy, Fund, FundConfig, FundState, WithdrawalPolicy};

/// Wire-stable error codes. Ledger errors keep their [`fund_ledger::Error`] code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidDueDate = 10,
    InvalidAmount = 11,
    NotOwner = 20,
    FundNotFound = 30,
    Inactive = 31,
    Expired = 32,
    Locked = 33,
    InsufficientBalance = 40,
    Overflow = 41,
    IdInUse = 50,
    StoreExhausted = 51,
}

impl From<LedgerError> for Error {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidDueDate => Error::InvalidDueDate,
            LedgerError::InvalidAmount => Error::InvalidAmount,
            LedgerError::NotOwner => Error::NotOwner,
            LedgerError::FundNotFound => Error::FundNotFound,
            LedgerError::Inactive => Error::Inactive,
            LedgerError::Expired => Error::Expired,
            LedgerError::Locked => Error::Locked,
            LedgerError::InsufficientBalance => Error::InsufficientBalance,
            LedgerError::Overflow => Error::Overflow,
            LedgerError::IdInUse => Error::IdInUse,
            LedgerError::StoreExhausted => Error::StoreExhausted,
        }
    }
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_config(env: &Env) -> Config {
    match storage::load_config(env) {
        Some(config) => config,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn check<T>(env: &Env, result: Result<T, LedgerError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, Error::from(err)),
    }
}

fn payout(env: &Env, caller: Address, fund_id: u64, amount: Amount) -> u64 {
    caller.require_auth();
    let config = load_config(env);
    let mut book = FundBook::new(env);
    let mut fund = check(env, book.get(fund_id));

    let mut standing = fund.standing();
    let plan = check(
        env,
        plan_withdrawal(
            &config.rules(),
            &fund.terms(),
            &standing,
            &caller,
            storage::custody(env, fund_id),
            amount,
            env.ledger().timestamp(),
        ),
    );

    // Record and custody are committed before the payout leaves.
    let remaining = plan.remaining();
    let transfer = plan.commit(&mut standing);
    fund.apply(standing);
    let owner = fund.owner.clone();
    check(env, book.put(fund_id, fund));
    storage::set_custody(env, fund_id, remaining);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &owner,
        &i128::from(transfer.amount()),
    );

    events::emit_fund_withdrawn(env, fund_id, owner, transfer.amount(), standing.is_active);
    transfer.amount()
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct Crowdfunding;

#[contractimpl]
impl Crowdfunding {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Configure the contract. Must be called exactly once after deployment.
    ///
    /// - `owner` becomes the contract owner and must sign.
    /// - `token` is the asset funds are raised in.
    /// - `reserve` is the custody floor each creator pays into a new fund.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        reserve: u64,
        deadline_policy: DeadlinePolicy,
        withdrawal_policy: WithdrawalPolicy,
    ) {
        owner.require_auth();
        if storage::has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        storage::save_config(
            &env,
            &Config {
                owner,
                token,
                reserve,
                deadline_policy,
                withdrawal_policy,
            },
        );
    }

    pub fn owner(env: Env) -> Address {
        load_config(&env).owner
    }

    pub fn config(env: Env) -> Config {
        load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Fund lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a new fund owned by `owner` and return its id.
    ///
    /// `due_date` must be more than one day after the current ledger time.
    /// The configured reserve is moved from `owner` into the fund's custody.
    pub fn create(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        due_date: u64,
        sum_required: u64,
        locked: bool,
    ) -> u64 {
        owner.require_auth();
        let config = load_config(&env);
        let now = env.ledger().timestamp();
        check(&env, validate_creation(due_date, now));

        let standing = Standing::opened();
        let mut book = FundBook::new(&env);
        let id = check(
            &env,
            book.allocate(|id| Fund {
                id,
                name,
                description,
                due_date,
                created_at: now,
                sum_required,
                sum_donated: standing.sum_donated,
                sum_withdrawn: standing.sum_withdrawn,
                is_active: standing.is_active,
                locked,
                owner: owner.clone(),
            }),
        );
        storage::set_custody(&env, id, config.reserve);

        if config.reserve > 0 {
            token::Client::new(&env, &config.token).transfer(
                &owner,
                &env.current_contract_address(),
                &i128::from(config.reserve),
            );
        }

        events::emit_fund_created(&env, id, owner, due_date, sum_required);
        id
    }

    /// Donate `amount` tokens from `donor` to fund `fund_id`.
    pub fn donate(env: Env, donor: Address, fund_id: u64, amount: u64) {
        donor.require_auth();
        let config = load_config(&env);
        let mut book = FundBook::new(&env);
        let mut fund = check(&env, book.get(fund_id));

        let mut standing = fund.standing();
        let plan = check(
            &env,
            plan_donation(
                &config.rules(),
                &fund.terms(),
                &standing,
                amount,
                env.ledger().timestamp(),
            ),
        );
        let custody = check(
            &env,
            storage::custody(&env, fund_id)
                .checked_add(plan.amount())
                .ok_or(LedgerError::Overflow),
        );

        // Effects before interaction.
        let transfer = plan.commit(&mut standing);
        fund.apply(standing);
        check(&env, book.put(fund_id, fund));
        storage::set_custody(&env, fund_id, custody);

        token::Client::new(&env, &config.token).transfer(
            &donor,
            &env.current_contract_address(),
            &i128::from(transfer.amount()),
        );

        events::emit_fund_donated(&env, fund_id, donor, transfer.amount(), standing.sum_donated);
    }

    /// Pay everything above the reserve to the fund owner. Returns the payout.
    pub fn withdraw(env: Env, caller: Address, fund_id: u64) -> u64 {
        payout(&env, caller, fund_id, Amount::All)
    }

    /// Pay exactly `amount` to the fund owner, keeping at least the reserve.
    pub fn withdraw_amount(env: Env, caller: Address, fund_id: u64, amount: u64) -> u64 {
        payout(&env, caller, fund_id, Amount::Exact(amount))
    }

    /// Deactivate the fund without moving any tokens.
    pub fn close(env: Env, caller: Address, fund_id: u64) {
        caller.require_auth();
        load_config(&env);
        let mut book = FundBook::new(&env);
        let mut fund = check(&env, book.get(fund_id));

        let mut standing = fund.standing();
        check(&env, close_fund(&fund.terms(), &mut standing, &caller));
        fund.apply(standing);
        check(&env, book.put(fund_id, fund));

        events::emit_fund_closed(&env, fund_id, caller);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn funds(env: Env, id: u64) -> Fund {
        check(&env, FundBook::new(&env).get(id))
    }

    /// Id the next successful `create` will assign.
    pub fn available_id(env: Env) -> u64 {
        FundBook::new(&env).next_id()
    }

    pub fn custody_balance(env: Env, id: u64) -> u64 {
        check(&env, FundBook::new(&env).get(id));
        storage::custody(&env, id)
    }
}
