use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::registry;
use crate::storage;
use crate::types::Bid;

/// Bid amounts `bidder` placed on `auction_id`, oldest first. Empty when none.
pub fn user_bid_history(env: &Env, bidder: &Address, auction_id: u64) -> Vec<i128> {
    storage::get_user_bids(env, auction_id, bidder)
}

pub fn auction_bids(env: &Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
    registry::get(env, auction_id)?;
    Ok(storage::get_auction_bids(env, auction_id))
}

pub fn highest_bid(env: &Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
    let auction = registry::get(env, auction_id)?;
    Ok((auction.highest_bidder, auction.highest_bid))
}

pub fn escrow_balance(env: &Env, auction_id: u64) -> Result<i128, Error> {
    registry::get(env, auction_id)?;
    Ok(storage::get_escrow(env, auction_id))
}
