//! Behavioural checks every backend must pass.
//!
//! A backend test suite implements [`Harness`] over its own host (a Soroban
//! test `Env`, an in-memory bank, ...) and calls the `check_*` functions,
//! usually from inside `proptest!` blocks. Every check panics on violation.

use core::fmt::Debug;

use crate::{validator::ONE_DAY, Error, Rules, WithdrawalPolicy};

/// Backend-neutral view of a stored fund.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<O> {
    pub id: u64,
    pub owner: O,
    pub due_date: u64,
    pub sum_required: u64,
    pub sum_donated: u64,
    pub sum_withdrawn: u64,
    pub is_active: bool,
}

pub trait Harness {
    type Identity: Clone + PartialEq + Debug;

    fn now(&self) -> u64;
    fn warp(&mut self, to: u64);
    fn rules(&self) -> Rules;

    /// A fresh identity holding enough value to create funds and donate.
    fn identity(&mut self) -> Self::Identity;
    /// Spendable value held by `who` outside any fund.
    fn balance(&self, who: &Self::Identity) -> u64;

    fn create(&mut self, owner: &Self::Identity, due_date: u64, sum_required: u64) -> Result<u64, Error>;
    fn donate(&mut self, donor: &Self::Identity, id: u64, amount: u64) -> Result<(), Error>;
    fn withdraw(&mut self, caller: &Self::Identity, id: u64) -> Result<u64, Error>;
    fn close(&mut self, caller: &Self::Identity, id: u64) -> Result<(), Error>;

    fn fund(&self, id: u64) -> Result<Snapshot<Self::Identity>, Error>;
    fn next_id(&self) -> u64;
    fn custody(&self, id: u64) -> u64;
}

fn open<H: Harness>(h: &mut H, owner: &H::Identity, sum_required: u64) -> u64 {
    let due_date = h.now() + 2 * ONE_DAY;
    let expected = h.next_id();
    let id = h.create(owner, due_date, sum_required).expect("valid fund must be created");
    assert_eq!(id, expected, "fund id must come from the counter");
    id
}

/// Ids are dense, strictly increasing and match the counter peek.
pub fn check_sequential_ids<H: Harness>(h: &mut H, n: u32) {
    let start = h.next_id();
    for i in 0..u64::from(n) {
        let owner = h.identity();
        let id = open(h, &owner, 1_000);
        assert_eq!(id, start + i);
        assert_eq!(h.next_id(), id + 1);
        assert_eq!(h.fund(id).expect("allocated fund").id, id);
    }
    assert_eq!(h.fund(h.next_id()), Err(Error::FundNotFound));
}

/// Due dates within a day of `now` reject without allocating; later ones pass.
pub fn check_due_date_gate<H: Harness>(h: &mut H, offset: u64) {
    let owner = h.identity();
    let now = h.now();
    let before = h.next_id();

    let near = now + offset.min(ONE_DAY);
    assert_eq!(h.create(&owner, near, 1_000), Err(Error::InvalidDueDate));
    assert_eq!(h.next_id(), before, "rejected creation must not allocate");

    let far = now + ONE_DAY + 1 + offset;
    assert_eq!(h.create(&owner, far, 1_000), Ok(before));
    assert_eq!(h.next_id(), before + 1);
}

/// `sum_donated` is the running sum of all accepted donations.
pub fn check_donation_total<H: Harness>(h: &mut H, amounts: &[u64]) {
    let owner = h.identity();
    let id = open(h, &owner, 1_000);
    let mut expected = 0u64;
    for amount in amounts {
        let donor = h.identity();
        let custody_before = h.custody(id);
        let before = h.fund(id).expect("fund").sum_donated;
        h.donate(&donor, id, *amount).expect("donation to active fund");
        let after = h.fund(id).expect("fund").sum_donated;
        assert_eq!(after, before + amount);
        assert_eq!(h.custody(id), custody_before + amount);
        expected += amount;
    }
    assert_eq!(h.fund(id).expect("fund").sum_donated, expected);
}

/// An inactive fund refuses donations and keeps its total.
pub fn check_inactive_rejects_donation<H: Harness>(h: &mut H, amount: u64) {
    let owner = h.identity();
    let donor = h.identity();
    let id = open(h, &owner, 1_000);
    h.donate(&donor, id, amount).expect("donation to active fund");
    h.close(&owner, id).expect("owner may close");

    let custody = h.custody(id);
    let wallet = h.balance(&donor);
    assert_eq!(h.donate(&donor, id, amount), Err(Error::Inactive));
    let snapshot = h.fund(id).expect("fund");
    assert!(!snapshot.is_active);
    assert_eq!(snapshot.sum_donated, amount);
    assert_eq!(h.custody(id), custody);
    assert_eq!(h.balance(&donor), wallet);
}

/// Nobody but the owner can withdraw or close.
pub fn check_owner_only_withdrawal<H: Harness>(h: &mut H, amount: u64) {
    let owner = h.identity();
    let stranger = h.identity();
    let id = open(h, &owner, 1_000);
    h.donate(&stranger, id, amount).expect("donation to active fund");

    let custody = h.custody(id);
    let wallet = h.balance(&stranger);
    assert_eq!(h.withdraw(&stranger, id), Err(Error::NotOwner));
    assert_eq!(h.close(&stranger, id), Err(Error::NotOwner));
    assert_eq!(h.custody(id), custody);
    assert_eq!(h.balance(&stranger), wallet);
    assert!(h.fund(id).expect("fund").is_active);
}

/// A successful withdrawal leaves exactly the reserve in custody and pays the rest out.
pub fn check_reserve_preserved<H: Harness>(h: &mut H, amounts: &[u64]) {
    let rules = h.rules();
    let owner = h.identity();
    let id = open(h, &owner, 1_000);
    assert_eq!(h.custody(id), rules.reserve, "new fund holds the reserve");
    assert_eq!(h.withdraw(&owner, id), Err(Error::InsufficientBalance));

    let donor = h.identity();
    let total: u64 = amounts.iter().sum();
    for amount in amounts {
        h.donate(&donor, id, *amount).expect("donation to active fund");
    }

    let wallet = h.balance(&owner);
    let payout = h.withdraw(&owner, id).expect("owner withdrawal");
    assert_eq!(payout, total);
    assert_eq!(h.custody(id), rules.reserve);
    assert_eq!(h.balance(&owner), wallet + payout);

    let snapshot = h.fund(id).expect("fund");
    assert_eq!(snapshot.sum_donated, total, "withdrawal never lowers sum_donated");
    assert_eq!(snapshot.sum_withdrawn, total);
    assert_eq!(
        snapshot.is_active,
        rules.withdrawal == WithdrawalPolicy::KeepActive
    );

    assert_eq!(h.withdraw(&owner, id), Err(Error::InsufficientBalance));
    assert_eq!(h.custody(id), rules.reserve);
}

/// Fresh store: a valid fund gets id 0 and mirrors its inputs.
pub fn scenario_create<H: Harness>(h: &mut H) {
    let owner = h.identity();
    let due_date = h.now() + 2 * ONE_DAY;
    assert_eq!(h.next_id(), 0);
    assert_eq!(h.create(&owner, due_date, 1_000_000_000), Ok(0));
    assert_eq!(
        h.fund(0),
        Ok(Snapshot {
            id: 0,
            owner,
            due_date,
            sum_required: 1_000_000_000,
            sum_donated: 0,
            sum_withdrawn: 0,
            is_active: true,
        })
    );
    assert_eq!(h.next_id(), 1);
}

/// A due date of `now` is refused and nothing is allocated.
pub fn scenario_reject_due_now<H: Harness>(h: &mut H) {
    let owner = h.identity();
    let before = h.next_id();
    let now = h.now();
    assert_eq!(h.create(&owner, now, 1_000_000_000), Err(Error::InvalidDueDate));
    assert_eq!(h.next_id(), before);
    assert_eq!(h.fund(before), Err(Error::FundNotFound));
}

/// Overfunding is accepted; donations stop once the owner deactivates.
pub fn scenario_overfund_then_close<H: Harness>(h: &mut H) {
    let owner = h.identity();
    let donor = h.identity();
    let id = open(h, &owner, 1_000);
    h.donate(&donor, id, 400).expect("first donation");
    h.donate(&donor, id, 700).expect("second donation");
    assert_eq!(h.fund(id).expect("fund").sum_donated, 1_100);

    h.close(&owner, id).expect("owner may close");
    assert_eq!(h.donate(&donor, id, 1), Err(Error::Inactive));
    assert_eq!(h.fund(id).expect("fund").sum_donated, 1_100);
}
