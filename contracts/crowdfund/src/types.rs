//! # Types
//!
//! Shared data structures used across all modules of the crowdfund contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at launch; never mutated.
//! - [`CampaignState`] — rewritten on every pledge, unpledge, claim, cancel
//!   and refund.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for
//! convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`CampaignStatus`] records only the transitions the clock cannot derive:
//!
//! ```text
//! Funding ──► Claimed      (creator withdraws the pool after a met goal)
//! Funding ──► Cancelled    (creator aborts before the window opens)
//! ```
//!
//! `Claimed` and `Cancelled` are terminal. The temporal phases — pending,
//! active, ended — are never stored; every operation derives them from
//! `start_at` / `end_at` against the current ledger timestamp.

use soroban_sdk::{contracttype, Address};

/// Current lifecycle state of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Live campaign: accepting pledges inside its window, resolvable after.
    Funding,
    /// Creator withdrew the pooled funds; no further payouts possible.
    Claimed,
    /// Creator aborted before the window opened; record is retired.
    Cancelled,
}

/// Immutable campaign configuration, written once at launch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

/// Mutable campaign state, updated on every balance-moving operation.
///
/// Kept small so that high-frequency writes (pledges) are cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Sum of all currently-held pledges. Equals the sum of the per-funder
    /// balances at all times; retained as a historical total after claim.
    pub pledged: i128,
    pub status: CampaignStatus,
}

/// Full representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from the
/// split `CampaignConfig` + `CampaignState` storage entries. For a cancelled
/// campaign, `goal`, `start_at`, `end_at` and `pledged` all read back as zero,
/// matching the "retired record" convention callers rely on.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Auto-incremented unique ID; ids are never reused.
    pub id: u64,
    /// Address that launched the campaign and may claim or cancel it.
    pub creator: Address,
    /// Funding target in the pledge token's smallest unit. Positive for any
    /// live campaign.
    pub goal: i128,
    /// First second (inclusive) at which pledges are accepted.
    pub start_at: u64,
    /// First second at which the campaign counts as ended; pledges are
    /// accepted strictly before it.
    pub end_at: u64,
    /// Currently pooled pledge total.
    pub pledged: i128,
    /// Current lifecycle state.
    pub status: CampaignStatus,
}

impl Campaign {
    /// Whether the goal has been met by the currently pooled total.
    pub fn goal_met(&self) -> bool {
        self.pledged >= self.goal
    }

    /// Whether `now` falls inside the pledge window `[start_at, end_at)`.
    pub fn window_open(&self, now: u64) -> bool {
        now >= self.start_at && now < self.end_at
    }
}
