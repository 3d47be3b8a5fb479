//! Read side of the price feed the vault is wired to.
//!
//! The vault only needs the latest round, so any contract exposing
//! `latest_round_data` with this shape can be plugged in at initialization.

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Round layout returned by the feed. Field names must match the feed's
/// own round type for the value to decode.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedRound {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[contractclient(name = "PriceSourceClient")]
pub trait PriceSource {
    fn latest_round_data(env: Env) -> FeedRound;
}

/// Latest answer of `feed`, or `None` if the feed has no round yet or the
/// call fails for any other reason.
pub fn latest_price(env: &Env, feed: &Address) -> Option<i128> {
    match PriceSourceClient::new(env, feed).try_latest_round_data() {
        Ok(Ok(round)) => Some(round.answer),
        _ => None,
    }
}

/// At-or-above comparison. Negative answers never reach a target.
pub fn price_reached(price: i128, target: u128) -> bool {
    u128::try_from(price).map_or(false, |price| price >= target)
}
