use soroban_sdk::{log, Address, Env, String, Vec};

use crate::errors::Error;
use crate::events::AuctionCreatedEvent;
use crate::storage;
use crate::types::{Asset, Auction, SECONDS_PER_HOUR};

pub struct AuctionTerms {
    pub title: String,
    pub description: String,
    pub content_ref: String,
    pub start_price: i128,
    pub duration_hours: u64,
    pub is_token_asset: bool,
    pub token: Option<Address>,
}

impl AuctionTerms {
    fn asset(&self, env: &Env) -> Result<Asset, Error> {
        if !self.is_token_asset {
            return Ok(Asset::Native);
        }
        match &self.token {
            Some(token) if *token != env.current_contract_address() => {
                Ok(Asset::Token(token.clone()))
            }
            _ => Err(Error::InvalidTokenAddress),
        }
    }
}

pub fn create(env: &Env, creator: Address, terms: AuctionTerms) -> Result<u64, Error> {
    if terms.title.is_empty() || terms.description.is_empty() || terms.content_ref.is_empty() {
        return Err(Error::InvalidAuctionTerms);
    }
    if terms.start_price < 0 {
        return Err(Error::InvalidAuctionTerms);
    }
    if terms.duration_hours == 0 {
        return Err(Error::InvalidDuration);
    }
    let asset = terms.asset(env)?;

    let now = env.ledger().timestamp();
    let deadline = terms
        .duration_hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|duration| now.checked_add(duration))
        .ok_or(Error::InvalidDuration)?;

    let id = storage::increment_auction_counter(env)?;
    let auction = Auction {
        id,
        creator: creator.clone(),
        title: terms.title,
        description: terms.description,
        content_ref: terms.content_ref,
        start_price: terms.start_price,
        created_at: now,
        deadline,
        asset,
        highest_bid: 0,
        highest_bidder: None,
        ended: false,
    };
    storage::save_auction(env, &auction);

    log!(env, "auction created", id, deadline);
    AuctionCreatedEvent {
        auction_id: id,
        creator,
        title: auction.title,
        start_price: auction.start_price,
        deadline,
        asset: auction.asset,
    }
    .publish(env);

    Ok(id)
}

pub fn get(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::NotFound)
}

/// Every auction in creation order.
pub fn list_all(env: &Env) -> Vec<Auction> {
    let mut auctions = Vec::new(env);
    for id in 1..=storage::get_auction_counter(env) {
        if let Some(auction) = storage::get_auction(env, id) {
            auctions.push_back(auction);
        }
    }
    auctions
}
