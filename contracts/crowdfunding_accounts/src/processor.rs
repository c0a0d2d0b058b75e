//! # Program
//!
//! Instruction handlers for the account-model backend.
//!
//! Every mutating handler runs in the same order:
//!
//! 1. load the accounts it touches,
//! 2. plan with the `fund_ledger` rules (no writes),
//! 3. store the updated account data,
//! 4. move lamports through [`Runtime::transfer`].
//!
//! A receiver that re-enters the program during step 4 sees the stored
//! record and the post-transfer balances.

use fund_ledger::{
    close as close_fund, plan_donation, plan_withdrawal, store::advance, validate_creation, Amount,
    Error as LedgerError, FundStore, Standing,
};

use crate::config::ProgramConfig;
use crate::error::ProgramError;
use crate::instruction::{Instruction, NewFund, Outcome};
use crate::pubkey::{derive_address, Pubkey};
use crate::runtime::{Runtime, RuntimeError};
use crate::state::{AccountData, ConfigAccount, CounterAccount, FundAccount};

pub const FUND_SEED: &[u8] = b"CROWDFUNDING";
pub const COUNTER_SEED: &[u8] = b"counter";
pub const CONFIG_SEED: &[u8] = b"config";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program {
    program_id: Pubkey,
}

impl Program {
    pub const fn new(program_id: Pubkey) -> Self {
        Program { program_id }
    }

    pub const fn id(&self) -> Pubkey {
        self.program_id
    }

    pub fn fund_address(&self, fund_id: u64) -> Pubkey {
        derive_address(&[FUND_SEED, &fund_id.to_le_bytes()], &self.program_id)
    }

    pub fn counter_address(&self) -> Pubkey {
        derive_address(&[COUNTER_SEED], &self.program_id)
    }

    pub fn config_address(&self) -> Pubkey {
        derive_address(&[CONFIG_SEED], &self.program_id)
    }

    // ─── Entry points ──────────────────────────────────────────

    /// Dispatch a decoded instruction signed by `signer`.
    pub fn process<R: Runtime>(
        &self,
        runtime: &mut R,
        signer: &Pubkey,
        instruction: Instruction,
    ) -> Result<Outcome, ProgramError> {
        match instruction {
            Instruction::Initialize { config } => {
                self.initialize(runtime, signer, config)?;
                Ok(Outcome::Initialized)
            }
            Instruction::Create(new_fund) => {
                let fund_id = self.create(runtime, signer, new_fund)?;
                Ok(Outcome::Created { fund_id })
            }
            Instruction::Donate { fund_id, amount } => {
                let sum_donated = self.donate(runtime, signer, fund_id, amount)?;
                Ok(Outcome::Donated { sum_donated })
            }
            Instruction::Withdraw { fund_id } => {
                let payout = self.withdraw(runtime, signer, fund_id)?;
                Ok(Outcome::Withdrawn { payout })
            }
            Instruction::WithdrawAmount { fund_id, amount } => {
                let payout = self.withdraw_amount(runtime, signer, fund_id, amount)?;
                Ok(Outcome::Withdrawn { payout })
            }
            Instruction::Close { fund_id } => {
                self.close(runtime, signer, fund_id)?;
                Ok(Outcome::Closed)
            }
        }
    }

    /// Write the config and counter accounts. Allowed once.
    pub fn initialize<R: Runtime>(
        &self,
        runtime: &mut R,
        authority: &Pubkey,
        config: ProgramConfig,
    ) -> Result<(), ProgramError> {
        if runtime.load(&self.config_address()).is_some() {
            return Err(ProgramError::AlreadyInitialized);
        }
        runtime.store(
            self.config_address(),
            AccountData::Config(ConfigAccount {
                authority: *authority,
                config,
            }),
        );
        runtime.store(
            self.counter_address(),
            AccountData::Counter(CounterAccount { next_id: 0 }),
        );
        tracing::info!(
            program = %self.program_id,
            authority = %authority,
            reserve_lamports = config.reserve_lamports,
            "crowdfunding program initialized"
        );
        Ok(())
    }

    /// Open a fund owned by `creator`; the creator pays the reserve into it.
    pub fn create<R: Runtime>(
        &self,
        runtime: &mut R,
        creator: &Pubkey,
        new_fund: NewFund,
    ) -> Result<u64, ProgramError> {
        let config = self.config(runtime)?;
        let now = runtime.now();
        validate_creation(new_fund.due_date, now)?;
        require_lamports(runtime, creator, config.reserve_lamports)?;

        let standing = Standing::opened();
        let mut store = AccountStore::new(self, runtime);
        let fund_id = store.allocate(|id| FundAccount {
            id,
            owner: *creator,
            name: new_fund.name,
            description: new_fund.description,
            due_date: new_fund.due_date,
            created_at: now,
            sum_required: new_fund.sum_required,
            sum_donated: standing.sum_donated,
            sum_withdrawn: standing.sum_withdrawn,
            is_active: standing.is_active,
            locked: new_fund.locked,
        })?;

        let address = self.fund_address(fund_id);
        runtime.transfer(creator, &address, config.reserve_lamports)?;

        tracing::info!(
            fund_id,
            owner = %creator,
            address = %address,
            due_date = new_fund.due_date,
            sum_required = new_fund.sum_required,
            "fund created"
        );
        Ok(fund_id)
    }

    /// Move `amount` lamports from `donor` into the fund. Returns the new total.
    pub fn donate<R: Runtime>(
        &self,
        runtime: &mut R,
        donor: &Pubkey,
        fund_id: u64,
        amount: u64,
    ) -> Result<u64, ProgramError> {
        let config = self.config(runtime)?;
        let address = self.fund_address(fund_id);
        let mut fund = self.load_fund(runtime, fund_id)?;

        let mut standing = fund.standing();
        let plan = plan_donation(
            &config.rules(),
            &fund.terms(),
            &standing,
            amount,
            runtime.now(),
        )?;
        runtime
            .lamports(&address)
            .checked_add(plan.amount())
            .ok_or(LedgerError::Overflow)?;
        require_lamports(runtime, donor, plan.amount())?;

        let transfer = plan.commit(&mut standing);
        fund.apply(standing);
        AccountStore::new(self, runtime).put(fund_id, fund)?;
        runtime.transfer(donor, &address, transfer.amount())?;

        tracing::debug!(
            fund_id,
            donor = %donor,
            amount = transfer.amount(),
            sum_donated = standing.sum_donated,
            "donation recorded"
        );
        Ok(standing.sum_donated)
    }

    /// Pay everything above the reserve to the owner.
    pub fn withdraw<R: Runtime>(
        &self,
        runtime: &mut R,
        caller: &Pubkey,
        fund_id: u64,
    ) -> Result<u64, ProgramError> {
        self.payout(runtime, caller, fund_id, Amount::All)
    }

    /// Pay exactly `amount` to the owner, keeping the reserve.
    pub fn withdraw_amount<R: Runtime>(
        &self,
        runtime: &mut R,
        caller: &Pubkey,
        fund_id: u64,
        amount: u64,
    ) -> Result<u64, ProgramError> {
        self.payout(runtime, caller, fund_id, Amount::Exact(amount))
    }

    /// Owner-driven deactivation; no lamports move.
    pub fn close<R: Runtime>(
        &self,
        runtime: &mut R,
        caller: &Pubkey,
        fund_id: u64,
    ) -> Result<(), ProgramError> {
        self.config(runtime)?;
        let mut store = AccountStore::new(self, runtime);
        let mut fund = store.get(fund_id)?;

        let mut standing = fund.standing();
        close_fund(&fund.terms(), &mut standing, caller)?;
        fund.apply(standing);
        store.put(fund_id, fund)?;

        tracing::info!(fund_id, owner = %caller, "fund closed");
        Ok(())
    }

    // ─── Queries ───────────────────────────────────────────────

    pub fn fund<R: Runtime>(&self, runtime: &R, fund_id: u64) -> Result<FundAccount, ProgramError> {
        Ok(self.load_fund(runtime, fund_id)?)
    }

    /// Id the next successful `create` will assign.
    pub fn next_id<R: Runtime>(&self, runtime: &R) -> Result<u64, ProgramError> {
        self.config(runtime)?;
        match runtime.load(&self.counter_address()) {
            Some(AccountData::Counter(counter)) => Ok(counter.next_id),
            _ => Err(ProgramError::InvalidAccountData(self.counter_address())),
        }
    }

    /// Lamports held by the fund account, reserve included.
    pub fn custody<R: Runtime>(&self, runtime: &R, fund_id: u64) -> Result<u64, ProgramError> {
        self.load_fund(runtime, fund_id)?;
        Ok(runtime.lamports(&self.fund_address(fund_id)))
    }

    pub fn config<R: Runtime>(&self, runtime: &R) -> Result<ProgramConfig, ProgramError> {
        let address = self.config_address();
        match runtime.load(&address) {
            Some(AccountData::Config(account)) => Ok(account.config),
            Some(_) => Err(ProgramError::InvalidAccountData(address)),
            None => Err(ProgramError::NotInitialized),
        }
    }

    // ─── Internals ─────────────────────────────────────────────

    fn load_fund<R: Runtime>(&self, runtime: &R, fund_id: u64) -> Result<FundAccount, LedgerError> {
        match runtime.load(&self.fund_address(fund_id)) {
            Some(AccountData::Fund(fund)) => Ok(fund),
            _ => Err(LedgerError::FundNotFound),
        }
    }

    fn payout<R: Runtime>(
        &self,
        runtime: &mut R,
        caller: &Pubkey,
        fund_id: u64,
        amount: Amount,
    ) -> Result<u64, ProgramError> {
        let config = self.config(runtime)?;
        let address = self.fund_address(fund_id);
        let mut fund = self.load_fund(runtime, fund_id)?;

        let mut standing = fund.standing();
        let plan = match plan_withdrawal(
            &config.rules(),
            &fund.terms(),
            &standing,
            caller,
            runtime.lamports(&address),
            amount,
            runtime.now(),
        ) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!(fund_id, caller = %caller, error = %err, "withdrawal rejected");
                return Err(err.into());
            }
        };

        let owner = fund.owner;
        let transfer = plan.commit(&mut standing);
        fund.apply(standing);
        AccountStore::new(self, runtime).put(fund_id, fund)?;
        runtime.transfer(&address, &owner, transfer.amount())?;

        tracing::info!(
            fund_id,
            owner = %owner,
            payout = transfer.amount(),
            is_active = standing.is_active,
            "withdrawal paid"
        );
        Ok(transfer.amount())
    }
}

fn require_lamports<R: Runtime>(runtime: &R, payer: &Pubkey, needed: u64) -> Result<(), ProgramError> {
    let available = runtime.lamports(payer);
    if available < needed {
        return Err(RuntimeError::InsufficientFunds {
            account: *payer,
            needed,
            available,
        }
        .into());
    }
    Ok(())
}

/// [`FundStore`] over program-derived fund accounts and the counter account.
struct AccountStore<'a, R> {
    program: &'a Program,
    runtime: &'a mut R,
}

impl<'a, R: Runtime> AccountStore<'a, R> {
    fn new(program: &'a Program, runtime: &'a mut R) -> Self {
        AccountStore { program, runtime }
    }
}

impl<R: Runtime> FundStore for AccountStore<'_, R> {
    type Record = FundAccount;

    fn next_id(&self) -> u64 {
        match self.runtime.load(&self.program.counter_address()) {
            Some(AccountData::Counter(counter)) => counter.next_id,
            _ => 0,
        }
    }

    fn allocate<F>(&mut self, build: F) -> Result<u64, LedgerError>
    where
        F: FnOnce(u64) -> FundAccount,
    {
        let id = self.next_id();
        let next_id = advance(id)?;
        let address = self.program.fund_address(id);
        if self.runtime.load(&address).is_some() {
            return Err(LedgerError::IdInUse);
        }
        self.runtime.store(address, AccountData::Fund(build(id)));
        self.runtime.store(
            self.program.counter_address(),
            AccountData::Counter(CounterAccount { next_id }),
        );
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<FundAccount, LedgerError> {
        self.program.load_fund(&*self.runtime, id)
    }

    fn put(&mut self, id: u64, record: FundAccount) -> Result<(), LedgerError> {
        let address = self.program.fund_address(id);
        match self.runtime.load(&address) {
            Some(AccountData::Fund(_)) => {
                self.runtime.store(address, AccountData::Fund(record));
                Ok(())
            }
            _ => Err(LedgerError::FundNotFound),
        }
    }
}
