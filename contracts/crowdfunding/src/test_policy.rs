#![cfg(test)]

use fund_ledger::Error as LedgerError;

use crate::invariants::*;
use crate::test_helpers::*;
use crate::{DeadlinePolicy, WithdrawalPolicy};

// ─── Deadline policy ─────────────────────────────────────

#[test]
fn test_ignore_policy_accepts_late_donations() {
    let f = setup();
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 1000);

    f.warp(NOW + 10 * ONE_DAY);
    f.client.donate(&donor, &id, &50);
    assert_eq!(f.client.funds(&id).sum_donated, 50);
}

#[test]
fn test_reject_policy_refuses_donations_at_due_date() {
    let f = setup_with(RESERVE, DeadlinePolicy::Reject, WithdrawalPolicy::DeactivateOnDrain);
    let owner = f.funded();
    let donor = f.funded();
    let due_date = NOW + 2 * ONE_DAY;
    let id = f.create(&owner, 1000);

    f.warp(due_date - 1);
    f.client.donate(&donor, &id, &50);

    f.warp(due_date);
    assert_eq!(lift(f.client.try_donate(&donor, &id, &50)), Err(LedgerError::Expired));
    let fund = f.client.funds(&id);
    assert_eq!(fund.sum_donated, 50);
    assert!(fund.is_active);
}

#[test]
fn test_reject_policy_still_allows_withdrawal() {
    let f = setup_with(RESERVE, DeadlinePolicy::Reject, WithdrawalPolicy::DeactivateOnDrain);
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 1000);
    f.client.donate(&donor, &id, &900);

    f.warp(NOW + 5 * ONE_DAY);
    assert_eq!(f.client.withdraw(&owner, &id), 900);
}

// ─── Withdrawal policy ───────────────────────────────────

#[test]
fn test_keep_active_allows_donations_after_drain() {
    let f = setup_with(RESERVE, DeadlinePolicy::Ignore, WithdrawalPolicy::KeepActive);
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 1000);
    f.client.donate(&donor, &id, &600);
    let before = f.client.funds(&id);

    assert_eq!(f.client.withdraw(&owner, &id), 600);
    let drained = f.client.funds(&id);
    assert!(drained.is_active);
    assert_all_transition_invariants(&before, &drained);

    f.client.donate(&donor, &id, &40);
    assert_eq!(f.client.withdraw(&owner, &id), 40);
    let after = f.client.funds(&id);
    assert_eq!(after.sum_donated, 640);
    assert_eq!(after.sum_withdrawn, 640);
    assert_custody_balanced(&after, f.client.custody_balance(&id), RESERVE);
}

#[test]
fn test_deactivate_on_drain_blocks_donations_after_drain() {
    let f = setup();
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 1000);
    f.client.donate(&donor, &id, &600);
    f.client.withdraw(&owner, &id);

    assert_eq!(lift(f.client.try_donate(&donor, &id, &1)), Err(LedgerError::Inactive));
}

#[test]
fn test_partial_withdrawal_keeps_fund_active() {
    let f = setup();
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 1000);
    f.client.donate(&donor, &id, &600);

    f.client.withdraw_amount(&owner, &id, &599);
    assert!(f.client.funds(&id).is_active);
    f.client.donate(&donor, &id, &1);
    assert_eq!(f.client.custody_balance(&id), RESERVE + 2);
}

// ─── Close ───────────────────────────────────────────────

#[test]
fn test_close_twice_is_rejected() {
    let f = setup();
    let owner = f.funded();
    let id = f.create(&owner, 1000);

    f.client.close(&owner, &id);
    assert_eq!(lift(f.client.try_close(&owner, &id)), Err(LedgerError::Inactive));
}

#[test]
fn test_close_by_stranger_is_rejected() {
    let f = setup();
    let owner = f.funded();
    let stranger = f.funded();
    let id = f.create(&owner, 1000);

    assert_eq!(lift(f.client.try_close(&stranger, &id)), Err(LedgerError::NotOwner));
    assert!(f.client.funds(&id).is_active);
}

#[test]
fn test_sweep_after_close_keeps_reserve() {
    let f = setup_with(RESERVE, DeadlinePolicy::Ignore, WithdrawalPolicy::KeepActive);
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 1000);
    f.client.donate(&donor, &id, &300);
    f.client.close(&owner, &id);

    assert_eq!(f.client.withdraw_amount(&owner, &id, &100), 100);
    assert_eq!(f.client.withdraw(&owner, &id), 200);
    let fund = f.client.funds(&id);
    assert!(!fund.is_active);
    assert_custody_balanced(&fund, f.client.custody_balance(&id), RESERVE);
}
