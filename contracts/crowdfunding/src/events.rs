use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundCreated {
    pub fund_id: u64,
    pub owner: Address,
    pub due_date: u64,
    pub sum_required: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundDonated {
    pub fund_id: u64,
    pub donor: Address,
    pub amount: u64,
    pub sum_donated: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundWithdrawn {
    pub fund_id: u64,
    pub owner: Address,
    pub payout: u64,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundClosed {
    pub fund_id: u64,
    pub owner: Address,
}

pub fn emit_fund_created(env: &Env, fund_id: u64, owner: Address, due_date: u64, sum_required: u64) {
    let topics = (symbol_short!("created"), fund_id);
    let data = FundCreated {
        fund_id,
        owner,
        due_date,
        sum_required,
    };
    env.events().publish(topics, data);
}

pub fn emit_fund_donated(env: &Env, fund_id: u64, donor: Address, amount: u64, sum_donated: u64) {
    let topics = (symbol_short!("donated"), fund_id);
    let data = FundDonated {
        fund_id,
        donor,
        amount,
        sum_donated,
    };
    env.events().publish(topics, data);
}

pub fn emit_fund_withdrawn(env: &Env, fund_id: u64, owner: Address, payout: u64, is_active: bool) {
    let topics = (symbol_short!("withdrawn"), fund_id);
    let data = FundWithdrawn {
        fund_id,
        owner,
        payout,
        is_active,
    };
    env.events().publish(topics, data);
}

pub fn emit_fund_closed(env: &Env, fund_id: u64, owner: Address) {
    let topics = (symbol_short!("closed"), fund_id);
    let data = FundClosed { fund_id, owner };
    env.events().publish(topics, data);
}
