use fund_ledger::Error as LedgerError;
use thiserror::Error;

use crate::pubkey::Pubkey;
use crate::runtime::RuntimeError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("program has not been initialized")]
    NotInitialized,
    #[error("program is already initialized")]
    AlreadyInitialized,
    #[error("account {0} holds data of another kind")]
    InvalidAccountData(Pubkey),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ProgramError {
    /// The fund rule that rejected the instruction, if any.
    pub fn ledger(&self) -> Option<LedgerError> {
        match self {
            ProgramError::Ledger(err) => Some(*err),
            _ => None,
        }
    }
}
