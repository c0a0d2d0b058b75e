#![allow(dead_code)]

extern crate std;

use crate::types::Fund;

/// Fields fixed at creation never change afterwards.
pub fn assert_fund_immutable_fields(original: &Fund, current: &Fund) {
    assert_eq!(original.id, current.id, "fund id changed");
    assert_eq!(original.owner, current.owner, "fund owner changed");
    assert_eq!(original.name, current.name, "fund name changed");
    assert_eq!(original.description, current.description, "fund description changed");
    assert_eq!(original.due_date, current.due_date, "fund due date changed");
    assert_eq!(original.created_at, current.created_at, "fund creation time changed");
    assert_eq!(original.sum_required, current.sum_required, "fund target changed");
    assert_eq!(original.locked, current.locked, "fund lock changed");
}

/// Accounting totals only move forward.
pub fn assert_totals_monotonic(before: &Fund, after: &Fund) {
    assert!(
        after.sum_donated >= before.sum_donated,
        "sum_donated decreased: {} -> {}",
        before.sum_donated,
        after.sum_donated
    );
    assert!(
        after.sum_withdrawn >= before.sum_withdrawn,
        "sum_withdrawn decreased: {} -> {}",
        before.sum_withdrawn,
        after.sum_withdrawn
    );
}

/// An inactive fund never becomes active again.
pub fn assert_no_reactivation(before: &Fund, after: &Fund) {
    assert!(
        before.is_active || !after.is_active,
        "fund {} was reactivated",
        after.id
    );
}

/// Custody always equals reserve + donations - payouts.
pub fn assert_custody_balanced(fund: &Fund, custody: u64, reserve: u64) {
    assert_eq!(
        custody,
        reserve + fund.sum_donated - fund.sum_withdrawn,
        "custody out of balance for fund {}",
        fund.id
    );
    assert!(custody >= reserve, "custody below reserve for fund {}", fund.id);
}

pub fn assert_all_transition_invariants(before: &Fund, after: &Fund) {
    assert_fund_immutable_fields(before, after);
    assert_totals_monotonic(before, after);
    assert_no_reactivation(before, after);
}
