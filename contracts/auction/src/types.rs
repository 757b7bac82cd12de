use soroban_sdk::{contracttype, Address, String};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Auctions and bid histories are never pruned, keep them alive for a year
pub const PERSISTENT_TTL_AMOUNT: u32 = 365 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - 30 * DAY_IN_LEDGERS;

/// Platform fee in basis points (250 = 2.5%)
pub const PLATFORM_FEE_BASIS_POINTS: u32 = 250;
pub const BASIS_POINTS_DENOMINATOR: i128 = 10_000;

pub const SECONDS_PER_HOUR: u64 = 3600;

/// Asset an auction is denominated in for its whole lifetime.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    /// The network's native asset, reached through its asset contract
    Native,
    /// A fungible token contract
    Token(Address),
}

/// Fee settings fixed when the contract is deployed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub fee_recipient: Address,
    pub fee_bps: u32,
    pub native_asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub description: String,
    /// Off-chain reference to the item, e.g. an IPFS hash
    pub content_ref: String,
    pub start_price: i128,
    pub created_at: u64,
    pub deadline: u64,
    pub asset: Asset,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub ended: bool,
}

impl Auction {
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.deadline
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    AuctionCounter,
    /// Held while a mutating entry point runs
    Lock,
    Auction(u64),
    /// Accepted bids on an auction, in acceptance order
    AuctionBids(u64),
    /// Accepted bid amounts of one bidder on one auction
    UserBids(u64, Address),
    /// Funds held on behalf of an auction
    Escrow(u64),
}
