#![cfg(test)]
extern crate std;
use super::*;
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Env, IntoVal, String, TryIntoVal,
};

const PRICE_3000: i128 = 3000_00000000;
const PRICE_4000: i128 = 4000_00000000;

fn setup(env: &Env, initial: Option<i128>) -> (PriceFeedClient<'_>, Address) {
    env.mock_all_auths();
    let admin = Address::generate(env);
    let contract_id = env.register_contract(None, PriceFeed);
    let client = PriceFeedClient::new(env, &contract_id);
    client.initialize(&admin, &8, &String::from_str(env, "ETH / USD"), &initial);
    (client, admin)
}

#[test]
fn test_initial_answer_is_round_one() {
    let env = Env::default();
    env.ledger().set_timestamp(1_000);
    let (client, admin) = setup(&env, Some(PRICE_3000));

    assert_eq!(client.latest_round_id(), 1);
    assert_eq!(client.latest_price(), PRICE_3000);
    assert_eq!(client.latest_timestamp(), 1_000);
    assert_eq!(client.decimals(), 8);
    assert_eq!(client.description(), String::from_str(&env, "ETH / USD"));
    assert_eq!(client.admin(), admin);

    let round = client.get_round_data(&1);
    assert_eq!(
        round,
        RoundData {
            round_id: 1,
            answer: PRICE_3000,
            started_at: 1_000,
            updated_at: 1_000,
            answered_in_round: 1,
        }
    );
}

#[test]
fn test_double_initialize() {
    let env = Env::default();
    let (client, admin) = setup(&env, None);

    let res = client.try_initialize(&admin, &8, &String::from_str(&env, "again"), &None);
    assert_eq!(res, Err(Ok(FeedError::AlreadyInitialized)));
}

#[test]
fn test_empty_feed_has_no_data() {
    let env = Env::default();
    let (client, _) = setup(&env, None);

    assert_eq!(client.latest_round_id(), 0);
    assert_eq!(client.latest_timestamp(), 0);
    assert_eq!(client.try_latest_price(), Err(Ok(FeedError::NoData)));
    assert_eq!(client.try_latest_round_data(), Err(Ok(FeedError::NoData)));
    assert_eq!(client.try_get_round_data(&0), Err(Ok(FeedError::RoundNotFound)));
    assert_eq!(client.try_get_round_data(&1), Err(Ok(FeedError::RoundNotFound)));
}

#[test]
fn test_update_then_read_back() {
    let env = Env::default();
    env.ledger().set_timestamp(1_000);
    let (client, admin) = setup(&env, Some(PRICE_3000));

    env.ledger().set_timestamp(2_500);
    let round_id = client.update_answer(&admin, &PRICE_4000);
    assert_eq!(round_id, 2);

    assert_eq!(client.latest_price(), PRICE_4000);
    assert_eq!(client.latest_round_id(), 2);
    assert_eq!(client.latest_round_data(), client.get_round_data(&2));
    assert_eq!(client.latest_timestamp(), 2_500);

    // Older rounds stay as written.
    assert_eq!(client.get_answer(&1), PRICE_3000);
    assert_eq!(client.get_timestamp(&1), 1_000);
    assert_eq!(client.get_answer(&2), PRICE_4000);
    assert_eq!(client.get_timestamp(&2), 2_500);

    assert_eq!(client.try_get_round_data(&3), Err(Ok(FeedError::RoundNotFound)));
    assert_eq!(client.try_get_answer(&3), Err(Ok(FeedError::RoundNotFound)));
}

#[test]
fn test_round_ids_are_sequential() {
    let env = Env::default();
    let (client, admin) = setup(&env, None);

    for (i, price) in [10i128, -5, 0, 42].iter().enumerate() {
        let round_id = client.update_answer(&admin, price);
        assert_eq!(round_id, i as u64 + 1);
        let round = client.get_round_data(&round_id);
        assert_eq!(round.answer, *price);
        assert_eq!(round.answered_in_round, round_id);
    }
    assert_eq!(client.latest_price(), 42);
}

#[test]
fn test_update_requires_admin() {
    let env = Env::default();
    let (client, _) = setup(&env, Some(PRICE_3000));
    let intruder = Address::generate(&env);

    let res = client.try_update_answer(&intruder, &PRICE_4000);
    assert_eq!(res, Err(Ok(FeedError::Unauthorized)));
    assert_eq!(client.latest_round_id(), 1);
    assert_eq!(client.latest_price(), PRICE_3000);
}

#[test]
fn test_set_admin_hands_over_write_access() {
    let env = Env::default();
    let (client, admin) = setup(&env, None);
    let next = Address::generate(&env);

    client.set_admin(&admin, &next);
    assert_eq!(client.admin(), next);

    assert_eq!(
        client.try_update_answer(&admin, &1),
        Err(Ok(FeedError::Unauthorized))
    );
    assert_eq!(client.update_answer(&next, &1), 1);
}

#[test]
fn test_uninitialized_feed() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, PriceFeed);
    let client = PriceFeedClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    assert_eq!(
        client.try_update_answer(&caller, &1),
        Err(Ok(FeedError::NotInitialized))
    );
    assert_eq!(client.try_decimals(), Err(Ok(FeedError::NotInitialized)));
}

#[test]
fn test_update_publishes_event() {
    let env = Env::default();
    env.ledger().set_timestamp(77);
    let (client, admin) = setup(&env, None);

    client.update_answer(&admin, &PRICE_3000);

    let events = env.events().all();
    let last = events.last().unwrap();
    assert_eq!(last.0, client.address);
    assert_eq!(last.1, (symbol_short!("answer"), 1u64).into_val(&env));
    let data: (i128, u64) = last.2.try_into_val(&env).unwrap();
    assert_eq!(data, (PRICE_3000, 77));
}
