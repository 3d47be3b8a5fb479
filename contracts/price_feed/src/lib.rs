#![no_std]
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, Address, Env, String, Symbol,
};

mod storage;
mod types;

use storage::Storage;
pub use types::{FeedConfig, FeedError, RoundData};

contractmeta!(
    key = "Description",
    val = "Admin-fed price aggregator with append-only rounds"
);

const EVT_ANSWER: Symbol = symbol_short!("answer");
const EVT_ADMIN: Symbol = symbol_short!("admin");

#[contract]
pub struct PriceFeed;

#[contractimpl]
impl PriceFeed {
    /// Set up the feed. When `initial_answer` is given it becomes round 1.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        description: String,
        initial_answer: Option<i128>,
    ) -> Result<(), FeedError> {
        if Storage::has_config(&env) {
            return Err(FeedError::AlreadyInitialized);
        }

        let config = FeedConfig {
            admin,
            decimals,
            description,
        };
        Storage::set_config(&env, &config);

        if let Some(answer) = initial_answer {
            Self::write_round(&env, answer);
        }

        Ok(())
    }

    /// Append a new round. Only the feed admin may write.
    pub fn update_answer(env: Env, caller: Address, new_answer: i128) -> Result<u64, FeedError> {
        Self::require_admin(&env, &caller)?;
        Ok(Self::write_round(&env, new_answer))
    }

    pub fn latest_price(env: Env) -> Result<i128, FeedError> {
        Self::latest_round(&env).map(|round| round.answer)
    }

    pub fn latest_round_data(env: Env) -> Result<RoundData, FeedError> {
        Self::latest_round(&env)
    }

    pub fn latest_round_id(env: Env) -> u64 {
        Storage::latest_round_id(&env)
    }

    pub fn latest_timestamp(env: Env) -> u64 {
        Self::latest_round(&env)
            .map(|round| round.updated_at)
            .unwrap_or(0)
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, FeedError> {
        Storage::get_round(&env, round_id).ok_or(FeedError::RoundNotFound)
    }

    pub fn get_answer(env: Env, round_id: u64) -> Result<i128, FeedError> {
        Self::get_round_data(env, round_id).map(|round| round.answer)
    }

    pub fn get_timestamp(env: Env, round_id: u64) -> Result<u64, FeedError> {
        Self::get_round_data(env, round_id).map(|round| round.updated_at)
    }

    pub fn decimals(env: Env) -> Result<u32, FeedError> {
        Ok(Storage::get_config(&env)?.decimals)
    }

    pub fn description(env: Env) -> Result<String, FeedError> {
        Ok(Storage::get_config(&env)?.description)
    }

    pub fn admin(env: Env) -> Result<Address, FeedError> {
        Ok(Storage::get_config(&env)?.admin)
    }

    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), FeedError> {
        Self::require_admin(&env, &caller)?;

        let mut config = Storage::get_config(&env)?;
        config.admin = new_admin.clone();
        Storage::set_config(&env, &config);

        env.events().publish((EVT_ADMIN, caller), new_admin);
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), FeedError> {
        caller.require_auth();

        let config = Storage::get_config(env)?;
        if config.admin != *caller {
            return Err(FeedError::Unauthorized);
        }
        Ok(())
    }

    fn latest_round(env: &Env) -> Result<RoundData, FeedError> {
        Storage::get_round(env, Storage::latest_round_id(env)).ok_or(FeedError::NoData)
    }

    fn write_round(env: &Env, answer: i128) -> u64 {
        let round_id = Storage::latest_round_id(env) + 1;
        let now = env.ledger().timestamp();

        let round = RoundData {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        };
        Storage::push_round(env, &round);

        env.events().publish((EVT_ANSWER, round_id), (answer, now));
        round_id
    }
}

mod test;
