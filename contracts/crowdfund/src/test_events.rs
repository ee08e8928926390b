extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, TryIntoVal, symbol_short,
};

use crate::events::{CampaignClaimed, CampaignLaunched, CampaignPledged, CampaignRefunded};
use crate::{CrowdFund, CrowdFundClient};

fn setup() -> (Env, CrowdFundClient<'static>, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

    let contract_id = env.register(CrowdFund, ());
    let client = CrowdFundClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let token_client = token::Client::new(&env, &sac.address());
    let deployer = Address::generate(&env);
    client.init(&deployer, &sac.address());

    (env, client, token_client)
}

fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

#[test]
fn test_launched_event() {
    let (env, client, _token) = setup();
    let creator = Address::generate(&env);
    let goal = 5_000i128;
    let start_at = env.ledger().timestamp() + 1_000;
    let end_at = env.ledger().timestamp() + 5_000;

    let id = client.launch(&creator, &goal, &start_at, &end_at);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("launched"), campaign_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("launched").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignLaunched = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignLaunched {
            campaign_id: id,
            creator: creator.clone(),
            goal,
            start_at,
            end_at,
        }
    );
}

#[test]
fn test_pledged_event() {
    let (env, client, token_client) = setup();
    let creator = Address::generate(&env);
    let funder = Address::generate(&env);
    let amount = 750i128;

    let start_at = env.ledger().timestamp() + 1_000;
    let end_at = env.ledger().timestamp() + 5_000;
    let id = client.launch(&creator, &1_000, &start_at, &end_at);

    mint(&env, &token_client.address, &funder, amount);
    env.ledger().with_mut(|li| li.timestamp += 1_000);
    client.pledge(&id, &funder, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("pledged"), campaign_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pledged").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignPledged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignPledged {
            campaign_id: id,
            funder: funder.clone(),
            amount,
            pledged: amount,
        }
    );
}

#[test]
fn test_claimed_event() {
    let (env, client, token_client) = setup();
    let creator = Address::generate(&env);
    let funder = Address::generate(&env);
    let goal = 1_000i128;

    let start_at = env.ledger().timestamp() + 1_000;
    let end_at = env.ledger().timestamp() + 5_000;
    let id = client.launch(&creator, &goal, &start_at, &end_at);

    mint(&env, &token_client.address, &funder, goal);
    env.ledger().with_mut(|li| li.timestamp += 1_000);
    client.pledge(&id, &funder, &goal);

    env.ledger().with_mut(|li| li.timestamp += 10_000);
    client.claim(&id, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignClaimed {
            campaign_id: id,
            creator: creator.clone(),
            amount: goal,
        }
    );
}

#[test]
fn test_refunded_event() {
    let (env, client, token_client) = setup();
    let creator = Address::generate(&env);
    let funder = Address::generate(&env);
    let amount = 250i128;

    let start_at = env.ledger().timestamp() + 1_000;
    let end_at = env.ledger().timestamp() + 5_000;
    let id = client.launch(&creator, &1_000, &start_at, &end_at);

    mint(&env, &token_client.address, &funder, amount);
    env.ledger().with_mut(|li| li.timestamp += 1_000);
    client.pledge(&id, &funder, &amount);

    env.ledger().with_mut(|li| li.timestamp += 10_000);
    client.refund(&id, &funder);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignRefunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignRefunded {
            campaign_id: id,
            funder: funder.clone(),
            amount,
        }
    );
}
