use crate::types::{DataKey, LockRecord, VaultConfig, VaultError, VaultStats};
use soroban_sdk::{Address, Env};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &VaultConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<VaultConfig, VaultError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(VaultError::NotInitialized)
    }

    pub fn get_lock(env: &Env, depositor: &Address) -> LockRecord {
        env.storage()
            .persistent()
            .get(&DataKey::Lock(depositor.clone()))
            .unwrap_or_default()
    }

    pub fn set_lock(env: &Env, depositor: &Address, record: &LockRecord) {
        env.storage()
            .persistent()
            .set(&DataKey::Lock(depositor.clone()), record);
    }

    pub fn get_stats(env: &Env) -> VaultStats {
        env.storage()
            .instance()
            .get(&DataKey::Stats)
            .unwrap_or_default()
    }

    pub fn set_stats(env: &Env, stats: &VaultStats) {
        env.storage().instance().set(&DataKey::Stats, stats);
    }
}
