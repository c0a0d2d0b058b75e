use serde::{Deserialize, Serialize};

use crate::config::ProgramConfig;

/// Creation arguments for a new fund.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFund {
    pub name: String,
    pub description: String,
    pub due_date: u64,
    pub sum_required: u64,
    #[serde(default)]
    pub locked: bool,
}

/// Wire form of a program call. The signer travels alongside, not inside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "instruction", rename_all = "snake_case")]
pub enum Instruction {
    Initialize { config: ProgramConfig },
    Create(NewFund),
    Donate { fund_id: u64, amount: u64 },
    Withdraw { fund_id: u64 },
    WithdrawAmount { fund_id: u64, amount: u64 },
    Close { fund_id: u64 },
}

impl Instruction {
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// What a processed instruction produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Initialized,
    Created { fund_id: u64 },
    Donated { sum_donated: u64 },
    Withdrawn { payout: u64 },
    Closed,
}
