use fund_ledger::{DeadlinePolicy, Rules, WithdrawalPolicy};
use serde::{Deserialize, Serialize};

/// Lamports in one native unit.
pub const LAMPORTS_PER_UNIT: u64 = 1_000_000_000;

/// Program settings written once by `initialize`.
///
/// Missing JSON fields fall back to [`ProgramConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Rent-style floor every fund account keeps; paid by the creator.
    pub reserve_lamports: u64,
    pub deadline_policy: DeadlinePolicy,
    pub withdrawal_policy: WithdrawalPolicy,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        ProgramConfig {
            reserve_lamports: LAMPORTS_PER_UNIT / 2,
            deadline_policy: DeadlinePolicy::default(),
            withdrawal_policy: WithdrawalPolicy::default(),
        }
    }
}

impl ProgramConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            reserve: self.reserve_lamports,
            deadline: self.deadline_policy,
            withdrawal: self.withdrawal_policy,
        }
    }
}
