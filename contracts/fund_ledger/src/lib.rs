//! # Fund ledger
//!
//! The fund lifecycle rules shared by every crowdfunding backend, with no
//! dependency on any host:
//!
//! | Component        | Module        | Entry point(s)                          |
//! |------------------|---------------|-----------------------------------------|
//! | FundStore        | [`store`]     | [`FundStore`], [`FundTable`]            |
//! | FundValidator    | [`validator`] | [`validate_creation`]                   |
//! | DonationLedger   | [`ledger`]    | [`plan_donation`]                       |
//! | WithdrawalGuard  | [`guard`]     | [`plan_withdrawal`], [`close`]          |
//!
//! Backends own storage, identity and value movement. Every mutating rule
//! is split into a *plan* (pure check), a *commit* (record update) and the
//! [`Transfer`] the backend performs last.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod errors;
pub mod guard;
pub mod ledger;
pub mod store;
mod types;
pub mod validator;

#[cfg(feature = "testutils")]
pub mod conformance;

pub use errors::{Error, ErrorKind, DUE_DATE_MESSAGE};
pub use guard::{close, plan_withdrawal, Withdrawal};
pub use ledger::{plan_donation, Donation};
#[cfg(feature = "alloc")]
pub use store::FundTable;
pub use store::FundStore;
pub use types::{Amount, DeadlinePolicy, Rules, Standing, Terms, Transfer, WithdrawalPolicy};
pub use validator::{validate_creation, ONE_DAY};
