use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InvalidTarget = 4,
    InvalidState = 5,
    AlreadyConfigured = 6,
    AlreadyWithdrawn = 7,
    NotEligible = 8,
    NothingToWithdraw = 9,
    NoData = 10,
}

/// Per-depositor lock. A missing record reads as `LockRecord::default()`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LockRecord {
    pub amount: i128,
    pub target_date: u64,     // unix seconds
    pub target_price: u128,   // feed units, 8 decimals
    pub parameters_set: bool, // latched by set_parameters
    pub withdrawn: bool,      // latched by withdraw
    pub epoch: u32,           // bumped by reopen
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub token: Address,
    pub price_feed: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VaultStats {
    pub total_locked: i128,
    pub active_locks: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Stats,
    Lock(Address),
}
