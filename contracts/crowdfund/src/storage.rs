//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the crowdfund
//! ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `Token`         | `Address` | Pledge currency token contract       |
//! | `CampaignCount` | `u64`     | Auto-increment campaign ID counter   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type             | Description                     |
//! |------------------------|------------------|---------------------------------|
//! | `Config(id)`           | `CampaignConfig` | Immutable campaign parameters   |
//! | `State(id)`            | `CampaignState`  | Mutable campaign state          |
//! | `Pledge(id, funder)`   | `i128`           | Funder's held pledge (absent ⇒ 0) |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why split Config and State?
//!
//! Pledges are the high-frequency write. Rewriting the whole campaign record
//! on every pledge is wasteful; `CampaignState` is a few dozen bytes, so the
//! split keeps the hot path cheap while `get_campaign` reconstructs the full
//! [`Campaign`] for callers.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{CampaignConfig, CampaignState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`Token`, `CampaignCount`) live as long as the contract
/// and are extended together. Persistent-tier keys hold per-campaign data
/// with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Pledge currency token contract address (Instance).
    Token,
    /// Global auto-increment counter for campaign IDs (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by ID (Persistent).
    Config(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    State(u64),
    /// Held pledge for a specific campaign and funder (Persistent).
    Pledge(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Store the pledge token address. Set exactly once by `init`.
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Fetch the pledge token address, if the contract has been initialised.
pub fn get_token(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Token)
}

/// Number of campaigns ever launched. Ids run `0..count`.
pub fn get_campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Atomically read and increment the campaign counter.
/// Returns the ID that should be used for the next campaign.
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    let current = get_campaign_count(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new
/// campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    let config_key = DataKey::Config(config.id);
    let state_key = DataKey::State(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load only the immutable campaign configuration.
pub fn load_campaign_config(env: &Env, id: u64) -> Option<CampaignConfig> {
    let key = DataKey::Config(id);
    let config: Option<CampaignConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable campaign state.
pub fn load_campaign_state(env: &Env, id: u64) -> Option<CampaignState> {
    let key = DataKey::State(id);
    let state: Option<CampaignState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable campaign state (the hot path for pledges).
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Retrieve `funder`'s held pledge for `campaign_id`. Absent entries read
/// as zero.
pub fn get_pledge(env: &Env, campaign_id: u64, funder: &Address) -> i128 {
    let key = DataKey::Pledge(campaign_id, funder.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

/// Set `funder`'s held pledge for `campaign_id`. A zero balance removes the
/// entry so the ledger never accumulates dead keys.
pub fn set_pledge(env: &Env, campaign_id: u64, funder: &Address, balance: i128) {
    let key = DataKey::Pledge(campaign_id, funder.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        bump_persistent(env, &key);
    }
}
