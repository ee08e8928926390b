use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignLaunched {
    pub campaign_id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignPledged {
    pub campaign_id: u64,
    pub funder: Address,
    pub amount: i128,
    pub pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignUnpledged {
    pub campaign_id: u64,
    pub funder: Address,
    pub amount: i128,
    pub pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClaimed {
    pub campaign_id: u64,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCancelled {
    pub campaign_id: u64,
    pub creator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignRefunded {
    pub campaign_id: u64,
    pub funder: Address,
    pub amount: i128,
}

pub fn emit_launched(
    env: &Env,
    campaign_id: u64,
    creator: Address,
    goal: i128,
    start_at: u64,
    end_at: u64,
) {
    let topics = (symbol_short!("launched"), campaign_id);
    let data = CampaignLaunched {
        campaign_id,
        creator,
        goal,
        start_at,
        end_at,
    };
    env.events().publish(topics, data);
}

pub fn emit_pledged(env: &Env, campaign_id: u64, funder: Address, amount: i128, pledged: i128) {
    let topics = (symbol_short!("pledged"), campaign_id);
    let data = CampaignPledged {
        campaign_id,
        funder,
        amount,
        pledged,
    };
    env.events().publish(topics, data);
}

pub fn emit_unpledged(env: &Env, campaign_id: u64, funder: Address, amount: i128, pledged: i128) {
    let topics = (symbol_short!("unpledged"), campaign_id);
    let data = CampaignUnpledged {
        campaign_id,
        funder,
        amount,
        pledged,
    };
    env.events().publish(topics, data);
}

pub fn emit_claimed(env: &Env, campaign_id: u64, creator: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), campaign_id);
    let data = CampaignClaimed {
        campaign_id,
        creator,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_cancelled(env: &Env, campaign_id: u64, creator: Address) {
    let topics = (symbol_short!("cancelled"), campaign_id);
    let data = CampaignCancelled {
        campaign_id,
        creator,
    };
    env.events().publish(topics, data);
}

pub fn emit_refunded(env: &Env, campaign_id: u64, funder: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), campaign_id);
    let data = CampaignRefunded {
        campaign_id,
        funder,
        amount,
    };
    env.events().publish(topics, data);
}
