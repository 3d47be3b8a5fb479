#![no_std]
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, Address, Env, Symbol,
};

mod oracle;
mod storage;
mod types;

pub use oracle::{FeedRound, PriceSource, PriceSourceClient};
use storage::Storage;
pub use types::{LockRecord, VaultConfig, VaultError, VaultStats};

contractmeta!(
    key = "Description",
    val = "Locks deposits until a target date or a target price is reached"
);

const EVT_DEPOSIT: Symbol = symbol_short!("deposit");
const EVT_PARAMS: Symbol = symbol_short!("params");
const EVT_WITHDRAW: Symbol = symbol_short!("withdraw");
const EVT_REOPEN: Symbol = symbol_short!("reopen");

#[contract]
pub struct WeakHandsVault;

#[contractimpl]
impl WeakHandsVault {
    // ───────────── INITIALIZATION ─────────────

    /// Wire the vault to the token it holds and the feed it reads prices from.
    pub fn initialize(env: Env, token: Address, price_feed: Address) -> Result<(), VaultError> {
        if Storage::has_config(&env) {
            return Err(VaultError::AlreadyInitialized);
        }

        Storage::set_config(&env, &VaultConfig { token, price_feed });
        Storage::set_stats(&env, &VaultStats::default());
        Ok(())
    }

    // ───────────── LOCK LIFECYCLE ─────────────

    /// Move `amount` from the depositor into the vault and add it to their lock.
    ///
    /// Deposits are accepted before and after configuration. A withdrawn lock
    /// takes no more funds until it is explicitly reopened.
    pub fn deposit(env: Env, depositor: Address, amount: i128) -> Result<(), VaultError> {
        depositor.require_auth();
        let config = Storage::get_config(&env)?;

        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }

        let mut record = Storage::get_lock(&env, &depositor);
        if record.withdrawn {
            return Err(VaultError::AlreadyWithdrawn);
        }

        token::Client::new(&env, &config.token).transfer(
            &depositor,
            &env.current_contract_address(),
            &amount,
        );

        let opened = record.amount == 0;
        record.amount += amount;
        Storage::set_lock(&env, &depositor, &record);

        let mut stats = Storage::get_stats(&env);
        stats.total_locked += amount;
        if opened {
            stats.active_locks += 1;
        }
        Storage::set_stats(&env, &stats);

        env.events()
            .publish((EVT_DEPOSIT, depositor), (amount, record.amount));
        Ok(())
    }

    /// Fix the release targets. Succeeds at most once per lock.
    pub fn set_parameters(
        env: Env,
        depositor: Address,
        target_date: u64,
        target_price: u128,
    ) -> Result<(), VaultError> {
        depositor.require_auth();
        Storage::get_config(&env)?;

        let mut record = Storage::get_lock(&env, &depositor);
        if record.withdrawn {
            return Err(VaultError::AlreadyWithdrawn);
        }
        if record.amount == 0 {
            return Err(VaultError::InvalidState);
        }
        if record.parameters_set {
            return Err(VaultError::AlreadyConfigured);
        }
        if target_date <= env.ledger().timestamp() {
            return Err(VaultError::InvalidTarget);
        }

        record.target_date = target_date;
        record.target_price = target_price;
        record.parameters_set = true;
        Storage::set_lock(&env, &depositor, &record);

        env.events()
            .publish((EVT_PARAMS, depositor), (target_date, target_price));
        Ok(())
    }

    pub fn get_lock_info(env: Env, depositor: Address) -> LockRecord {
        Storage::get_lock(&env, &depositor)
    }

    /// True once the lock is configured, still funded, and either the target
    /// date has passed or the feed price is at or above the target price.
    pub fn can_withdraw(env: Env, depositor: Address) -> bool {
        let Ok(config) = Storage::get_config(&env) else {
            return false;
        };
        let record = Storage::get_lock(&env, &depositor);
        Self::release_condition(&env, &config, &record)
    }

    /// Release the whole lock to the depositor. Returns the amount released.
    pub fn withdraw(env: Env, depositor: Address) -> Result<i128, VaultError> {
        depositor.require_auth();
        let config = Storage::get_config(&env)?;

        let mut record = Storage::get_lock(&env, &depositor);
        if record.withdrawn {
            return Err(VaultError::AlreadyWithdrawn);
        }
        if record.amount <= 0 {
            return Err(VaultError::NothingToWithdraw);
        }
        if !Self::release_condition(&env, &config, &record) {
            return Err(VaultError::NotEligible);
        }

        // Record is zeroed and latched before any funds leave the vault.
        let released = record.amount;
        record.amount = 0;
        record.withdrawn = true;
        Storage::set_lock(&env, &depositor, &record);

        let mut stats = Storage::get_stats(&env);
        stats.total_locked -= released;
        stats.active_locks = stats.active_locks.saturating_sub(1);
        Storage::set_stats(&env, &stats);

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &depositor,
            &released,
        );

        env.events()
            .publish((EVT_WITHDRAW, depositor), (released, record.epoch));
        Ok(released)
    }

    /// Start a fresh lock on a withdrawn record. The epoch counter moves on;
    /// everything else goes back to its empty state.
    pub fn reopen(env: Env, depositor: Address) -> Result<u32, VaultError> {
        depositor.require_auth();
        Storage::get_config(&env)?;

        let record = Storage::get_lock(&env, &depositor);
        if !record.withdrawn {
            return Err(VaultError::InvalidState);
        }

        let fresh = LockRecord {
            epoch: record.epoch + 1,
            ..LockRecord::default()
        };
        Storage::set_lock(&env, &depositor, &fresh);

        env.events().publish((EVT_REOPEN, depositor), fresh.epoch);
        Ok(fresh.epoch)
    }

    // ───────────── VIEWS ─────────────

    pub fn get_latest_price(env: Env) -> Result<i128, VaultError> {
        let config = Storage::get_config(&env)?;
        oracle::latest_price(&env, &config.price_feed).ok_or(VaultError::NoData)
    }

    pub fn get_config(env: Env) -> Result<VaultConfig, VaultError> {
        Storage::get_config(&env)
    }

    pub fn get_stats(env: Env) -> VaultStats {
        Storage::get_stats(&env)
    }

    // ───────────── INTERNAL ─────────────

    // The feed is read at most once per call, and only when the date alone
    // does not already release the lock.
    fn release_condition(env: &Env, config: &VaultConfig, record: &LockRecord) -> bool {
        if !record.parameters_set || record.withdrawn || record.amount <= 0 {
            return false;
        }
        if env.ledger().timestamp() >= record.target_date {
            return true;
        }
        oracle::latest_price(env, &config.price_feed)
            .map_or(false, |price| oracle::price_reached(price, record.target_price))
    }
}
