use soroban_sdk::{log, Address, Env};

use crate::asset::AssetTransfer;
use crate::errors::Error;
use crate::events::AuctionEndedEvent;
use crate::registry;
use crate::storage;
use crate::types::BASIS_POINTS_DENOMINATOR;

/// Split a winning bid into `(creator_amount, platform_fee)`.
/// The fee rounds down so the two parts always add back up to `amount`.
pub fn split_payout(amount: i128, fee_bps: u32) -> Result<(i128, i128), Error> {
    let fee = amount
        .checked_mul(fee_bps as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / BASIS_POINTS_DENOMINATOR;
    Ok((amount - fee, fee))
}

pub fn end_auction(env: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
    let mut auction = registry::get(env, auction_id)?;
    if auction.ended {
        return Err(Error::AlreadyEnded);
    }
    if !auction.is_expired(env.ledger().timestamp()) {
        return Err(Error::NotExpiredYet);
    }

    let config = storage::get_config(env);
    let (creator_amount, platform_fee) = match auction.highest_bidder {
        Some(_) => split_payout(auction.highest_bid, config.fee_bps)?,
        None => (0, 0),
    };

    auction.ended = true;
    storage::save_auction(env, &auction);
    storage::set_escrow(env, auction_id, 0);

    if auction.highest_bidder.is_some() {
        let transfer = AssetTransfer::new(env, &auction.asset, &config);
        transfer.payout(&config.fee_recipient, platform_fee)?;
        transfer.payout(&auction.creator, creator_amount)?;
    }

    log!(env, "auction ended", auction_id, creator_amount, platform_fee);
    AuctionEndedEvent {
        auction_id,
        winner: auction.highest_bidder,
        winning_bid: auction.highest_bid,
        creator_amount,
        platform_fee,
        settled_by: caller,
    }
    .publish(env);

    Ok(())
}
