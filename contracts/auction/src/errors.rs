use soroban_sdk::contracterror;

/// Error codes returned by the auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// No auction exists for the given id
    NotFound = 1,
    /// Token auction created without a usable token contract
    InvalidTokenAddress = 2,
    /// Empty title, description or content reference, or negative start price
    InvalidAuctionTerms = 3,
    /// Zero duration, or a deadline that does not fit in a timestamp
    InvalidDuration = 4,
    /// Bid placed on an auction that has already been settled
    AuctionEnded = 5,
    /// Bid placed at or after the deadline
    AuctionExpired = 6,
    /// Bid below the start price or below double the highest bid
    BidTooLow = 7,
    /// Non-positive bid, or an amount sent through the wrong channel
    InvalidAmount = 8,
    /// Settlement requested twice
    AlreadyEnded = 9,
    /// Settlement requested before the deadline
    NotExpiredYet = 10,
    /// The asset contract rejected a deposit, payout or refund
    TransferFailed = 11,
    /// A mutating entry point was entered while another one was running
    ReentrantCall = 12,
    ArithmeticOverflow = 13,
}
