//! # Crowdfunding program (account model)
//!
//! The fund lifecycle for runtimes where every fund is its own account at a
//! program-derived address and custody is that account's lamport balance.
//!
//! | Concern          | Module          |
//! |------------------|-----------------|
//! | Keys, addresses  | [`pubkey`]      |
//! | Host interface   | [`runtime`]     |
//! | Account payloads | [`state`]       |
//! | Configuration    | [`config`]      |
//! | Wire format      | [`instruction`] |
//! | Handlers         | [`processor`]   |
//!
//! Fund rules come from [`fund_ledger`]; this crate only binds them to
//! accounts and lamports.

pub mod config;
mod error;
pub mod instruction;
pub mod processor;
pub mod pubkey;
pub mod runtime;
pub mod state;

#[cfg(test)]
mod test_helpers;

pub use config::{ProgramConfig, LAMPORTS_PER_UNIT};
pub use error::ProgramError;
pub use instruction::{Instruction, NewFund, Outcome};
pub use processor::Program;
pub use pubkey::{derive_address, ParsePubkeyError, Pubkey};
pub use runtime::{Account, Bank, Runtime, RuntimeError};
pub use state::{AccountData, ConfigAccount, CounterAccount, FundAccount};
