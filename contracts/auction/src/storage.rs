use crate::errors::Error;
use crate::types::{
    Auction, Bid, DataKey, PlatformConfig, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env, Vec};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// CONFIG
// ============================================================================

pub fn set_config(env: &Env, config: &PlatformConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// The constructor always stores the config, so a missing entry is a broken deployment.
pub fn get_config(env: &Env) -> PlatformConfig {
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => config,
        None => panic!("contract config missing"),
    }
}

// ============================================================================
// REENTRANCY LOCK
// ============================================================================

pub fn acquire_lock(env: &Env) -> Result<(), Error> {
    let held: bool = env
        .storage()
        .instance()
        .get(&DataKey::Lock)
        .unwrap_or(false);
    if held {
        return Err(Error::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Lock, &true);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().instance().remove(&DataKey::Lock);
}

// ============================================================================
// AUCTIONS
// ============================================================================

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> Result<u64, Error> {
    let counter = get_auction_counter(env)
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);
    Ok(counter)
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        extend_persistent_ttl(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    extend_persistent_ttl(env, &key);
}

// ============================================================================
// BID HISTORY
// ============================================================================

pub fn get_auction_bids(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = DataKey::AuctionBids(auction_id);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_auction_bid(env: &Env, auction_id: u64, bid: Bid) {
    let key = DataKey::AuctionBids(auction_id);
    let mut history = get_auction_bids(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    extend_persistent_ttl(env, &key);
}

pub fn get_user_bids(env: &Env, auction_id: u64, bidder: &Address) -> Vec<i128> {
    let key = DataKey::UserBids(auction_id, bidder.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_user_bid(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = DataKey::UserBids(auction_id, bidder.clone());
    let mut history = get_user_bids(env, auction_id, bidder);
    history.push_back(amount);
    env.storage().persistent().set(&key, &history);
    extend_persistent_ttl(env, &key);
}

// ============================================================================
// ESCROW
// ============================================================================

pub fn get_escrow(env: &Env, auction_id: u64) -> i128 {
    let key = DataKey::Escrow(auction_id);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_escrow(env: &Env, auction_id: u64, amount: i128) {
    let key = DataKey::Escrow(auction_id);
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}
