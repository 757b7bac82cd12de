use soroban_sdk::{contractevent, Address, String};

use crate::types::Asset;

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub creator: Address,
    pub title: String,
    pub start_price: i128,
    pub deadline: u64,
    pub asset: Asset,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when a displaced bidder gets their escrow back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub previous_bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction is settled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEvent {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub winning_bid: i128,
    pub creator_amount: i128,
    pub platform_fee: i128,
    pub settled_by: Address,
}
