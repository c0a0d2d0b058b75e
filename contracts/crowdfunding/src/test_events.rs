extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{FundClosed, FundCreated, FundDonated, FundWithdrawn};
use crate::test_helpers::*;

#[test]
fn test_fund_created_event() {
    let f = setup();
    let owner = f.funded();
    let id = f.create(&owner, 5000);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), fund_id)
    assert_eq!(last_event.0, f.contract_id);
    let expected_topics = vec![&f.env, symbol_short!("created").into_val(&f.env), id.into_val(&f.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundCreated = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundCreated {
            fund_id: id,
            owner: owner.clone(),
            due_date: NOW + 2 * ONE_DAY,
            sum_required: 5000,
        }
    );
}

#[test]
fn test_fund_donated_event() {
    let f = setup();
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 5000);
    f.client.donate(&donor, &id, &300);
    f.client.donate(&donor, &id, &200);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&f.env, symbol_short!("donated").into_val(&f.env), id.into_val(&f.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundDonated = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundDonated {
            fund_id: id,
            donor: donor.clone(),
            amount: 200,
            sum_donated: 500,
        }
    );
}

#[test]
fn test_fund_withdrawn_event() {
    let f = setup();
    let owner = f.funded();
    let donor = f.funded();
    let id = f.create(&owner, 5000);
    f.client.donate(&donor, &id, &750);
    f.client.withdraw(&owner, &id);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&f.env, symbol_short!("withdrawn").into_val(&f.env), id.into_val(&f.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundWithdrawn = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundWithdrawn {
            fund_id: id,
            owner: owner.clone(),
            payout: 750,
            is_active: false,
        }
    );
}

#[test]
fn test_fund_closed_event() {
    let f = setup();
    let owner = f.funded();
    let id = f.create(&owner, 5000);
    f.client.close(&owner, &id);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&f.env, symbol_short!("closed").into_val(&f.env), id.into_val(&f.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundClosed = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundClosed {
            fund_id: id,
            owner: owner.clone(),
        }
    );
}

#[test]
fn test_rejected_call_emits_nothing() {
    let f = setup();
    let owner = f.funded();
    let id = f.create(&owner, 5000);
    let before = f.env.events().all().len();

    assert!(f.client.try_withdraw(&owner, &id).is_err());
    assert!(f.env.events().all().len() <= before);
}
