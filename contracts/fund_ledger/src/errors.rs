//! # Errors
//!
//! One flat error enum shared by every backend. Codes are wire-stable: the
//! Soroban contract re-exports them 1:1 through its `#[contracterror]` enum,
//! so a variant must never be renumbered once deployed.
//!
//! Error code layout:
//!
//! | Range | Kind       |
//! |-------|------------|
//! | 10-19 | Validation |
//! | 20-29 | Access     |
//! | 30-39 | State      |
//! | 40-49 | Balance    |
//! | 50-59 | Storage    |

use thiserror::Error;

/// Message surfaced verbatim when a creation request carries a bad due date.
pub const DUE_DATE_MESSAGE: &str = "Due date should be in future and at least 1 day past today";

/// Groups errors the way callers are expected to react to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A creation-time or argument rule was violated.
    Validation,
    /// The caller is not allowed to perform the operation.
    Access,
    /// The fund does not exist or is in the wrong lifecycle state.
    State,
    /// Custody does not hold enough value for the request.
    Balance,
    /// The store itself cannot accept the allocation.
    Storage,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    #[error("{}", DUE_DATE_MESSAGE)]
    InvalidDueDate = 10,
    #[error("amount must be positive")]
    InvalidAmount = 11,

    #[error("caller is not the fund owner")]
    NotOwner = 20,

    #[error("fund not found")]
    FundNotFound = 30,
    #[error("fund is not active")]
    Inactive = 31,
    #[error("fund due date has passed")]
    Expired = 32,
    #[error("fund is locked until its due date")]
    Locked = 33,

    #[error("custody balance does not exceed the reserve")]
    InsufficientBalance = 40,
    #[error("amount overflow")]
    Overflow = 41,

    #[error("fund id already allocated")]
    IdInUse = 50,
    #[error("fund store exhausted")]
    StoreExhausted = 51,
}

impl Error {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn kind(self) -> ErrorKind {
        match self {
            Error::InvalidDueDate | Error::InvalidAmount => ErrorKind::Validation,
            Error::NotOwner => ErrorKind::Access,
            Error::FundNotFound | Error::Inactive | Error::Expired | Error::Locked => {
                ErrorKind::State
            }
            Error::InsufficientBalance | Error::Overflow => ErrorKind::Balance,
            Error::IdInUse | Error::StoreExhausted => ErrorKind::Storage,
        }
    }

    /// Inverse of [`Error::code`]; used by adapters that receive raw codes
    /// back from their host.
    pub const fn from_code(code: u32) -> Option<Error> {
        Some(match code {
            10 => Error::InvalidDueDate,
            11 => Error::InvalidAmount,
            20 => Error::NotOwner,
            30 => Error::FundNotFound,
            31 => Error::Inactive,
            32 => Error::Expired,
            33 => Error::Locked,
            40 => Error::InsufficientBalance,
            41 => Error::Overflow,
            50 => Error::IdInUse,
            51 => Error::StoreExhausted,
            _ => return None,
        })
    }
}
