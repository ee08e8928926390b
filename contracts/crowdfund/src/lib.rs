//! # Crowdfund Contract
//!
//! Token-denominated crowdfunding ledger. Any party may launch a time-boxed
//! campaign with a fixed goal; funders pool pledges in a single fungible
//! token; the campaign resolves to exactly one of two terminal outcomes —
//! creator payout (goal met) or funder refunds (goal missed).
//!
//! | Phase       | Entry Point(s)                            |
//! |-------------|-------------------------------------------|
//! | Bootstrap   | [`CrowdFund::init`]                       |
//! | Setup       | [`CrowdFund::launch`], [`CrowdFund::cancel`] |
//! | Funding     | [`CrowdFund::pledge`], [`CrowdFund::unpledge`] |
//! | Resolution  | [`CrowdFund::claim`], [`CrowdFund::refund`] |
//! | Queries     | `get_campaign`, `get_pledge`, `get_campaign_count`, `get_token` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event emission to
//! [`events`]. This file contains the entry points and the lifecycle guards.
//!
//! Every operation follows check-effects-interactions: all validation first,
//! then the accounting writes, and only then the single token transfer. A
//! failing transfer traps and reverts the whole invocation, so no call can
//! leave partial state behind and no reentrant callee can observe a balance
//! that has been paid out but not yet recorded.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

use types::{CampaignConfig, CampaignState};
pub use types::{Campaign, CampaignStatus};

/// Longest allowed campaign: `end_at` may be at most this many seconds after
/// the launch-time clock.
pub const MAX_DURATION: u64 = 7 * 86_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidGoal = 4,
    StartAtNotBeforeEndAt = 5,
    StartAtNotInFuture = 6,
    EndAtExceedsMaxDuration = 7,
    InvalidAmount = 8,
    CampaignNotStarted = 9,
    CampaignEnded = 10,
    UnpledgeAmountExceedsBalance = 11,
    OnlyCreatorCanClaim = 12,
    CampaignNotEnded = 13,
    GoalNotMet = 14,
    AlreadyClaimed = 15,
    OnlyCreatorCanCancel = 16,
    CampaignAlreadyStarted = 17,
    NothingToRefund = 18,
    Overflow = 19,
}

#[contract]
pub struct CrowdFund;

#[contractimpl]
impl CrowdFund {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract and fix the pledge currency token.
    ///
    /// Must be called exactly once immediately after deployment; `deployer`
    /// must sign, so an unsigned caller cannot front-run the bootstrap with a
    /// token of their choosing. Subsequent calls panic with
    /// `Error::AlreadyInitialized`. All pledges, claims and refunds move
    /// value in this one token; funders must have approved the contract on
    /// it before pledging.
    pub fn init(env: Env, deployer: Address, token: Address) {
        deployer.require_auth();
        if storage::get_token(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        storage::set_token(&env, &token);
    }

    // ─────────────────────────────────────────────────────────
    // Campaign setup
    // ─────────────────────────────────────────────────────────

    /// Launch a new campaign and return its sequential id.
    ///
    /// - `creator` must sign and becomes the only address able to claim or
    ///   cancel the campaign.
    /// - The pledge window is `[start_at, end_at)` in ledger seconds;
    ///   `start_at` must not be in the past and `end_at` must be within
    ///   [`MAX_DURATION`] of the current clock.
    ///
    /// No tokens move at launch.
    pub fn launch(env: Env, creator: Address, goal: i128, start_at: u64, end_at: u64) -> u64 {
        creator.require_auth();
        Self::require_token(&env);

        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }
        if start_at >= end_at {
            panic_with_error!(&env, Error::StartAtNotBeforeEndAt);
        }
        let now = env.ledger().timestamp();
        if start_at < now {
            panic_with_error!(&env, Error::StartAtNotInFuture);
        }
        if end_at > now + MAX_DURATION {
            panic_with_error!(&env, Error::EndAtExceedsMaxDuration);
        }

        let id = storage::get_and_increment_campaign_id(&env);
        let config = CampaignConfig {
            id,
            creator: creator.clone(),
            goal,
            start_at,
            end_at,
        };
        let state = CampaignState {
            pledged: 0,
            status: CampaignStatus::Funding,
        };
        storage::save_campaign(&env, &config, &state);

        events::emit_launched(&env, id, creator, goal, start_at, end_at);
        id
    }

    /// Cancel a campaign before its window opens.
    ///
    /// Only the creator may cancel, and only strictly before `start_at` — by
    /// construction no pledges can exist yet, so there is nothing to unwind.
    /// A cancelled campaign is treated as non-existent by every other
    /// lifecycle operation; its id is never reused.
    pub fn cancel(env: Env, campaign_id: u64, caller: Address) {
        caller.require_auth();

        let (config, mut state) = Self::load_live_campaign(&env, campaign_id);
        if caller != config.creator {
            panic_with_error!(&env, Error::OnlyCreatorCanCancel);
        }
        if env.ledger().timestamp() >= config.start_at {
            panic_with_error!(&env, Error::CampaignAlreadyStarted);
        }

        state.status = CampaignStatus::Cancelled;
        storage::save_campaign_state(&env, campaign_id, &state);

        events::emit_cancelled(&env, campaign_id, config.creator);
    }

    // ─────────────────────────────────────────────────────────
    // Funding window
    // ─────────────────────────────────────────────────────────

    /// Pledge `amount` into a campaign's pool.
    ///
    /// Accepted only inside the window `[start_at, end_at)`. Repeated pledges
    /// accumulate. The accounting is written before the token pull so a
    /// trapped transfer reverts the call as one unit.
    pub fn pledge(env: Env, campaign_id: u64, funder: Address, amount: i128) {
        funder.require_auth();
        let token = Self::require_token(&env);

        let (config, mut state) = Self::load_live_campaign(&env, campaign_id);
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let now = env.ledger().timestamp();
        if now < config.start_at {
            panic_with_error!(&env, Error::CampaignNotStarted);
        }
        if now >= config.end_at {
            panic_with_error!(&env, Error::CampaignEnded);
        }

        let balance = storage::get_pledge(&env, campaign_id, &funder);
        let new_balance = balance
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        state.pledged = state
            .pledged
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        storage::set_pledge(&env, campaign_id, &funder, new_balance);
        storage::save_campaign_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&funder, &env.current_contract_address(), &amount);

        events::emit_pledged(&env, campaign_id, funder, amount, state.pledged);
    }

    /// Withdraw `amount` of the caller's own pledge while the window is open.
    pub fn unpledge(env: Env, campaign_id: u64, funder: Address, amount: i128) {
        funder.require_auth();
        let token = Self::require_token(&env);

        let (config, mut state) = Self::load_live_campaign(&env, campaign_id);
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let now = env.ledger().timestamp();
        if now < config.start_at {
            panic_with_error!(&env, Error::CampaignNotStarted);
        }
        if now >= config.end_at {
            panic_with_error!(&env, Error::CampaignEnded);
        }

        let balance = storage::get_pledge(&env, campaign_id, &funder);
        if amount > balance {
            panic_with_error!(&env, Error::UnpledgeAmountExceedsBalance);
        }

        storage::set_pledge(&env, campaign_id, &funder, balance - amount);
        state.pledged -= amount;
        storage::save_campaign_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&env.current_contract_address(), &funder, &amount);

        events::emit_unpledged(&env, campaign_id, funder, amount, state.pledged);
    }

    // ─────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────

    /// Withdraw the whole pool to the creator after a successful campaign.
    ///
    /// Requires the campaign to have ended with `pledged >= goal`. Succeeds
    /// at most once; the `Claimed` status is terminal and blocks both a
    /// second claim and any refund, so the pool can never pay out twice.
    pub fn claim(env: Env, campaign_id: u64, caller: Address) {
        caller.require_auth();
        let token = Self::require_token(&env);

        let (config, mut state) = Self::load_live_campaign(&env, campaign_id);
        if caller != config.creator {
            panic_with_error!(&env, Error::OnlyCreatorCanClaim);
        }
        if state.status == CampaignStatus::Claimed {
            panic_with_error!(&env, Error::AlreadyClaimed);
        }
        if state.pledged < config.goal {
            panic_with_error!(&env, Error::GoalNotMet);
        }
        if env.ledger().timestamp() < config.end_at {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }

        // `pledged` is retained as the historical total; `Claimed` freezes
        // the per-funder balances.
        state.status = CampaignStatus::Claimed;
        storage::save_campaign_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&env.current_contract_address(), &config.creator, &state.pledged);

        events::emit_claimed(&env, campaign_id, config.creator, state.pledged);
    }

    /// Return the caller's full pledge after an unclaimed campaign ends.
    ///
    /// Available regardless of goal outcome as long as the creator has not
    /// claimed. A funder with no held pledge gets `NothingToRefund`.
    pub fn refund(env: Env, campaign_id: u64, funder: Address) {
        funder.require_auth();
        let token = Self::require_token(&env);

        let (config, mut state) = Self::load_live_campaign(&env, campaign_id);
        if state.status == CampaignStatus::Claimed {
            panic_with_error!(&env, Error::AlreadyClaimed);
        }
        if env.ledger().timestamp() < config.end_at {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }

        let balance = storage::get_pledge(&env, campaign_id, &funder);
        if balance == 0 {
            panic_with_error!(&env, Error::NothingToRefund);
        }

        storage::set_pledge(&env, campaign_id, &funder, 0);
        state.pledged -= balance;
        storage::save_campaign_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&env.current_contract_address(), &funder, &balance);

        events::emit_refunded(&env, campaign_id, funder, balance);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Fetch a campaign by id.
    ///
    /// A cancelled campaign reads back with `goal`, `start_at`, `end_at` and
    /// `pledged` all zero and `status = Cancelled`.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        let config = storage::load_campaign_config(&env, campaign_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::CampaignNotFound));
        let state = storage::load_campaign_state(&env, campaign_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::CampaignNotFound));

        if state.status == CampaignStatus::Cancelled {
            return Campaign {
                id: config.id,
                creator: config.creator,
                goal: 0,
                start_at: 0,
                end_at: 0,
                pledged: 0,
                status: CampaignStatus::Cancelled,
            };
        }

        Campaign {
            id: config.id,
            creator: config.creator,
            goal: config.goal,
            start_at: config.start_at,
            end_at: config.end_at,
            pledged: state.pledged,
            status: state.status,
        }
    }

    /// Return `funder`'s currently held pledge for `campaign_id`.
    /// Unknown campaigns and funders read as zero.
    pub fn get_pledge(env: Env, campaign_id: u64, funder: Address) -> i128 {
        storage::get_pledge(&env, campaign_id, &funder)
    }

    /// Number of campaigns ever launched; ids run `0..count`.
    pub fn get_campaign_count(env: Env) -> u64 {
        storage::get_campaign_count(&env)
    }

    /// The pledge currency token address.
    pub fn get_token(env: Env) -> Address {
        Self::require_token(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_token(env: &Env) -> Address {
        storage::get_token(env)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    /// Load a campaign that exists and has not been cancelled. Cancelled
    /// records are indistinguishable from missing ones to every lifecycle
    /// operation.
    fn load_live_campaign(env: &Env, campaign_id: u64) -> (CampaignConfig, CampaignState) {
        let config = storage::load_campaign_config(env, campaign_id)
            .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
        let state = storage::load_campaign_state(env, campaign_id)
            .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
        if state.status == CampaignStatus::Cancelled {
            panic_with_error!(env, Error::CampaignNotFound);
        }
        (config, state)
    }
}
