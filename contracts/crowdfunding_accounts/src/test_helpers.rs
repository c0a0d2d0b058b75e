//! Shared test helpers for program tests.

use fund_ledger::Error as LedgerError;

use crate::{Bank, NewFund, Program, ProgramConfig, ProgramError, Pubkey, LAMPORTS_PER_UNIT};

pub const NOW: u64 = 1_700_000_000;
pub const ONE_DAY: u64 = 86_400;
pub const RESERVE: u64 = LAMPORTS_PER_UNIT / 2;
/// Airdrop for every generated wallet.
pub const WALLET: u64 = 1_000_000 * LAMPORTS_PER_UNIT;

pub struct Fixture {
    pub bank: Bank,
    pub program: Program,
    pub authority: Pubkey,
}

/// Route program logs to the test output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Bank at [`NOW`] with the program initialized under the default config.
pub fn setup() -> Fixture {
    setup_with(ProgramConfig::default())
}

pub fn setup_with(config: ProgramConfig) -> Fixture {
    let mut fixture = deploy();
    let authority = fixture.authority;
    fixture
        .program
        .initialize(&mut fixture.bank, &authority, config)
        .expect("fresh program initializes");
    fixture
}

/// Bank at [`NOW`] with an uninitialized program.
pub fn deploy() -> Fixture {
    init_tracing();
    let mut bank = Bank::new(NOW);
    let authority = Pubkey::new_unique();
    bank.airdrop(&authority, WALLET).expect("airdrop");
    Fixture {
        bank,
        program: Program::new(Pubkey::new_unique()),
        authority,
    }
}

pub fn new_fund(due_date: u64, sum_required: u64, locked: bool) -> NewFund {
    NewFund {
        name: "Name".to_string(),
        description: "Description".to_string(),
        due_date,
        sum_required,
        locked,
    }
}

impl Fixture {
    /// A new wallet holding [`WALLET`] lamports.
    pub fn wallet(&mut self) -> Pubkey {
        let key = Pubkey::new_unique();
        self.bank.airdrop(&key, WALLET).expect("airdrop");
        key
    }

    /// Two-day, unlocked fund owned by `owner`.
    pub fn create(&mut self, owner: &Pubkey, sum_required: u64) -> u64 {
        self.create_with(owner, new_fund(NOW + 2 * ONE_DAY, sum_required, false))
    }

    pub fn create_with(&mut self, owner: &Pubkey, new_fund: NewFund) -> u64 {
        let program = self.program;
        self.bank
            .transact(|bank| program.create(bank, owner, new_fund))
            .expect("valid fund is created")
    }
}

/// The ledger rule behind a program error.
pub fn ledger(err: ProgramError) -> LedgerError {
    err.ledger()
        .unwrap_or_else(|| panic!("expected a ledger error, got {err}"))
}
