//! Shared test helpers for crowdfunding tests.

#![cfg(test)]

use fund_ledger::Error as LedgerError;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};

use crate::{Crowdfunding, CrowdfundingClient, DeadlinePolicy, Error, WithdrawalPolicy};

/// Custody floor: 0.5 of a 7-decimal asset.
pub const RESERVE: u64 = 5_000_000;
/// Default mint: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 100_000_000_000_000;
/// Ledger time every fixture starts at.
pub const NOW: u64 = 1_700_000_000;
/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;

pub struct Fixture {
    pub env: Env,
    pub client: CrowdfundingClient<'static>,
    pub token: TokenClient<'static>,
    pub asset: StellarAssetClient<'static>,
    /// Contract owner passed to `init`.
    pub admin: Address,
    pub contract_id: Address,
}

/// Deploys contract + token with the default policies and reserve.
pub fn setup() -> Fixture {
    setup_with(RESERVE, DeadlinePolicy::Ignore, WithdrawalPolicy::DeactivateOnDrain)
}

pub fn setup_with(
    reserve: u64,
    deadline_policy: DeadlinePolicy,
    withdrawal_policy: WithdrawalPolicy,
) -> Fixture {
    let fixture = deploy();
    fixture.client.init(
        &fixture.admin,
        &fixture.token.address,
        &reserve,
        &deadline_policy,
        &withdrawal_policy,
    );
    fixture
}

/// Deploys contract + token without calling `init`.
pub fn deploy() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let contract_id = env.register(Crowdfunding, ());
    let client = CrowdfundingClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    let stellar_asset = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let token = TokenClient::new(&env, &stellar_asset);
    let asset = StellarAssetClient::new(&env, &stellar_asset);

    Fixture {
        env,
        client,
        token,
        asset,
        admin,
        contract_id,
    }
}

impl Fixture {
    /// A new address holding [`DEFAULT_MINT`] tokens.
    pub fn funded(&self) -> Address {
        let who = Address::generate(&self.env);
        self.asset.mint(&who, &DEFAULT_MINT);
        who
    }

    pub fn text(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }

    /// Creates a two-day fund for `owner` and returns its id.
    pub fn create(&self, owner: &Address, sum_required: u64) -> u64 {
        self.create_with(owner, sum_required, NOW + 2 * ONE_DAY, false)
    }

    pub fn create_with(&self, owner: &Address, sum_required: u64, due_date: u64, locked: bool) -> u64 {
        self.client.create(
            owner,
            &self.text("Name"),
            &self.text("Description"),
            &due_date,
            &sum_required,
            &locked,
        )
    }

    pub fn balance(&self, who: &Address) -> u64 {
        u64::try_from(self.token.balance(who)).expect("token balance fits in u64")
    }

    pub fn warp(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }
}

/// Collapse a `try_*` client result into a ledger result.
///
/// Panics on host failures that are not contract errors.
pub fn lift<T, C, I>(result: Result<Result<T, C>, Result<soroban_sdk::Error, I>>) -> Result<T, LedgerError> {
    match result.map_err(|e| e.map(Error::try_from)) {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(Ok(err))) => Err(LedgerError::from_code(err as u32).expect("contract error outside the ledger range")),
        _ => panic!("host failure outside the contract error space"),
    }
}

/// Raw contract error of a failed `try_*` call.
pub fn contract_error<T, C, I>(result: Result<Result<T, C>, Result<soroban_sdk::Error, I>>) -> Error {
    match result.map_err(|e| e.map(Error::try_from)) {
        Err(Ok(Ok(err))) => err,
        _ => panic!("expected a contract error"),
    }
}
