#![no_std]

//! # Decentralized Auction
//!
//! Timed auctions for off-chain referenced items. Bids are escrowed by the
//! contract in either the native asset or a fungible token, a new bid must at
//! least double the current one, and the displaced bidder is refunded in the
//! same invocation. Once the deadline passes anyone can settle: the creator
//! receives the winning bid minus a 2.5 % platform fee.
//!
//! ## Modules
//!
//! - [`asset`]      : deposit, payout and refund through the token interface.
//! - [`registry`]   : auction creation, lookup and listing.
//! - [`bidding`]    : bid validation, escrow and refund of the displaced bid.
//! - [`settlement`] : fee split and final payout.
//! - [`query`]      : read-only views over bids and escrow.

mod asset;
mod bidding;
mod errors;
mod events;
mod query;
mod registry;
mod settlement;
mod storage;
mod types;

pub use errors::Error;
pub use types::{Asset, Auction, Bid, PlatformConfig, PLATFORM_FEE_BASIS_POINTS};

use registry::AuctionTerms;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct DecentralizedAuction;

#[contractimpl]
impl DecentralizedAuction {
    /// Fix the platform fee recipient and the native asset contract for the
    /// lifetime of the deployment.
    pub fn __constructor(env: Env, fee_recipient: Address, native_asset: Address) {
        storage::set_config(
            &env,
            &PlatformConfig {
                fee_recipient,
                fee_bps: PLATFORM_FEE_BASIS_POINTS,
                native_asset,
            },
        );
        storage::extend_instance_ttl(&env);
    }

    // ========================================================================
    // AUCTIONS
    // ========================================================================

    /// Create an auction lasting `duration_hours` from now.
    ///
    /// `token` is only read when `is_token_asset` is set.
    ///
    /// # Errors
    /// * `Error::InvalidAuctionTerms` - empty text field or negative start price
    /// * `Error::InvalidDuration` - zero duration
    /// * `Error::InvalidTokenAddress` - token auction without a token contract
    pub fn create_auction(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        content_ref: String,
        start_price: i128,
        duration_hours: u64,
        is_token_asset: bool,
        token: Option<Address>,
    ) -> Result<u64, Error> {
        creator.require_auth();
        storage::acquire_lock(&env)?;
        let result = registry::create(
            &env,
            creator,
            AuctionTerms {
                title,
                description,
                content_ref,
                start_price,
                duration_hours,
                is_token_asset,
                token,
            },
        );
        storage::release_lock(&env);
        storage::extend_instance_ttl(&env);
        result
    }

    /// Place a bid. Native auctions take the attached `value` and require
    /// `token_amount == 0`; token auctions take `token_amount` from the
    /// bidder's allowance and require `value == 0`.
    ///
    /// # Errors
    /// * `Error::NotFound`, `Error::AuctionEnded`, `Error::AuctionExpired`
    /// * `Error::InvalidAmount` - non-positive amount or wrong channel
    /// * `Error::BidTooLow` - below start price, or below double the highest bid
    /// * `Error::TransferFailed` - escrow deposit or refund rejected
    pub fn bid(
        env: Env,
        bidder: Address,
        auction_id: u64,
        token_amount: i128,
        value: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();
        storage::acquire_lock(&env)?;
        let result = bidding::place_bid(&env, bidder, auction_id, token_amount, value);
        storage::release_lock(&env);
        storage::extend_instance_ttl(&env);
        result
    }

    /// Settle an expired auction. Callable by anyone.
    ///
    /// # Errors
    /// * `Error::NotFound`, `Error::AlreadyEnded`, `Error::NotExpiredYet`
    /// * `Error::TransferFailed` - a payout was rejected
    pub fn end_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        caller.require_auth();
        storage::acquire_lock(&env)?;
        let result = settlement::end_auction(&env, caller, auction_id);
        storage::release_lock(&env);
        storage::extend_instance_ttl(&env);
        result
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Fetch one auction. Fails with `Error::NotFound` for unknown ids, including 0.
    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        registry::get(&env, auction_id)
    }

    /// Every auction in creation order.
    pub fn get_all_auctions(env: Env) -> Vec<Auction> {
        registry::list_all(&env)
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// Amounts `bidder` placed on `auction_id`, oldest first. Never fails: an
    /// unknown auction or a bidder who never bid yields an empty list.
    pub fn get_user_bid_history(env: Env, bidder: Address, auction_id: u64) -> Vec<i128> {
        query::user_bid_history(&env, &bidder, auction_id)
    }

    /// Every accepted bid on the auction in acceptance order, refunded ones included.
    pub fn get_auction_bids(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        query::auction_bids(&env, auction_id)
    }

    pub fn get_current_highest_bid(
        env: Env,
        auction_id: u64,
    ) -> Result<(Option<Address>, i128), Error> {
        query::highest_bid(&env, auction_id)
    }

    /// Funds held for the auction: the highest bid while active, 0 once ended.
    pub fn get_escrow_balance(env: Env, auction_id: u64) -> Result<i128, Error> {
        query::escrow_balance(&env, auction_id)
    }

    pub fn get_config(env: Env) -> PlatformConfig {
        storage::get_config(&env)
    }

    pub fn platform_fee_address(env: Env) -> Address {
        storage::get_config(&env).fee_recipient
    }

    pub fn platform_fee_basis_points(env: Env) -> u32 {
        storage::get_config(&env).fee_bps
    }
}

#[cfg(test)]
mod test;
