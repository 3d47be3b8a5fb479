use crate::types::{DataKey, FeedConfig, FeedError, RoundData};
use soroban_sdk::Env;

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &FeedConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<FeedConfig, FeedError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(FeedError::NotInitialized)
    }

    pub fn latest_round_id(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LatestRound)
            .unwrap_or(0)
    }

    /// Stores `round` and advances the latest round pointer to it.
    pub fn push_round(env: &Env, round: &RoundData) {
        env.storage()
            .persistent()
            .set(&DataKey::Round(round.round_id), round);
        env.storage()
            .instance()
            .set(&DataKey::LatestRound, &round.round_id);
    }

    pub fn get_round(env: &Env, round_id: u64) -> Option<RoundData> {
        if round_id == 0 || round_id > Self::latest_round_id(env) {
            return None;
        }
        env.storage().persistent().get(&DataKey::Round(round_id))
    }
}
