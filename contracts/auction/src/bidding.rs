use soroban_sdk::{log, Address, Env};

use crate::asset::AssetTransfer;
use crate::errors::Error;
use crate::events::{BidPlacedEvent, BidRefundedEvent};
use crate::registry;
use crate::storage;
use crate::types::{Asset, Auction, Bid};

/// Pick the bid amount from the channel that matches the auction's asset.
/// Native bids carry the attached `value`, token bids the explicit `token_amount`.
fn bid_amount(asset: &Asset, token_amount: i128, value: i128) -> Result<i128, Error> {
    let (amount, unused) = match asset {
        Asset::Native => (value, token_amount),
        Asset::Token(_) => (token_amount, value),
    };
    if amount <= 0 || unused != 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(amount)
}

fn check_threshold(auction: &Auction, amount: i128) -> Result<(), Error> {
    if auction.highest_bidder.is_none() {
        if amount < auction.start_price {
            return Err(Error::BidTooLow);
        }
        return Ok(());
    }
    // Bids at least double the highest. Past i128 range no bid can qualify.
    match auction.highest_bid.checked_mul(2) {
        Some(required) if amount >= required => Ok(()),
        _ => Err(Error::BidTooLow),
    }
}

pub fn place_bid(
    env: &Env,
    bidder: Address,
    auction_id: u64,
    token_amount: i128,
    value: i128,
) -> Result<(), Error> {
    let mut auction = registry::get(env, auction_id)?;
    if auction.ended {
        return Err(Error::AuctionEnded);
    }
    let now = env.ledger().timestamp();
    if auction.is_expired(now) {
        return Err(Error::AuctionExpired);
    }
    let amount = bid_amount(&auction.asset, token_amount, value)?;
    check_threshold(&auction, amount)?;

    let displaced = auction
        .highest_bidder
        .clone()
        .map(|previous| (previous, auction.highest_bid));

    // State is committed before any funds move.
    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());
    storage::save_auction(env, &auction);
    storage::set_escrow(env, auction_id, amount);
    storage::add_user_bid(env, auction_id, &bidder, amount);
    storage::add_auction_bid(
        env,
        auction_id,
        Bid {
            bidder: bidder.clone(),
            amount,
            timestamp: now,
        },
    );

    let transfer = AssetTransfer::new(env, &auction.asset, &storage::get_config(env));
    transfer.deposit(&bidder, amount)?;
    if let Some((previous_bidder, previous_amount)) = &displaced {
        transfer.refund(previous_bidder, *previous_amount)?;
    }

    log!(env, "bid accepted", auction_id, amount);
    BidPlacedEvent {
        auction_id,
        bidder,
        amount,
    }
    .publish(env);
    if let Some((previous_bidder, previous_amount)) = displaced {
        BidRefundedEvent {
            auction_id,
            previous_bidder,
            amount: previous_amount,
        }
        .publish(env);
    }

    Ok(())
}
