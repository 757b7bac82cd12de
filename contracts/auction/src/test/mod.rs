
use crate::{DecentralizedAuction, DecentralizedAuctionClient};
use soroban_sdk::{
    testutils::{Address as _, Events, IssuerFlags, Ledger},
    token, Address, Env, Event, String, Val, Vec,
};

/// One whole unit of either asset (7 decimals, like stroops).
pub const UNIT: i128 = 10_000_000;
pub const STARTING_BALANCE: i128 = 1_000 * UNIT;
pub const DAY_HOURS: u64 = 24;

pub struct Setup {
    pub env: Env,
    pub client: DecentralizedAuctionClient<'static>,
    pub platform: Address,
    pub creator: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub native: token::TokenClient<'static>,
    pub token: token::TokenClient<'static>,
}

fn register_asset(env: &Env, holders: &[&Address]) -> token::TokenClient<'static> {
    let asset_admin = Address::generate(env);
    let asset_contract = env.register_stellar_asset_contract_v2(asset_admin);
    let asset_address = asset_contract.address();
    let admin_client = token::StellarAssetClient::new(env, &asset_address);
    for holder in holders {
        admin_client.mint(holder, &STARTING_BALANCE);
    }
    token::TokenClient::new(env, &asset_address)
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let platform = Address::generate(&env);
    let creator = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);

    let native = register_asset(&env, &[&bidder1, &bidder2]);
    let token = register_asset(&env, &[&bidder1, &bidder2]);

    let contract_id = env.register(
        DecentralizedAuction,
        (platform.clone(), native.address.clone()),
    );
    let client = DecentralizedAuctionClient::new(&env, &contract_id);

    Setup {
        env,
        client,
        platform,
        creator,
        bidder1,
        bidder2,
        native,
        token,
    }
}

impl Setup {
    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn create_native_auction(&self, start_price: i128, duration_hours: u64) -> u64 {
        self.client.create_auction(
            &self.creator,
            &self.text("Native Auction"),
            &self.text("Test Description"),
            &self.text("QmTest123"),
            &start_price,
            &duration_hours,
            &false,
            &None,
        )
    }

    pub fn create_token_auction(&self, start_price: i128, duration_hours: u64) -> u64 {
        self.create_auction_in(&self.token.address, start_price, duration_hours)
    }

    pub fn create_auction_in(
        &self,
        token: &Address,
        start_price: i128,
        duration_hours: u64,
    ) -> u64 {
        self.client.create_auction(
            &self.creator,
            &self.text("Token Auction"),
            &self.text("Test with token"),
            &self.text("QmTest456"),
            &start_price,
            &duration_hours,
            &true,
            &Some(token.clone()),
        )
    }

    /// A token whose issuer can deauthorize holders, funded for both bidders.
    pub fn register_revocable_asset(
        &self,
    ) -> (token::TokenClient<'static>, token::StellarAssetClient<'static>) {
        let asset_contract = self
            .env
            .register_stellar_asset_contract_v2(Address::generate(&self.env));
        asset_contract.issuer().set_flag(IssuerFlags::RevocableFlag);
        let asset_address = asset_contract.address();
        let admin_client = token::StellarAssetClient::new(&self.env, &asset_address);
        admin_client.mint(&self.bidder1, &STARTING_BALANCE);
        admin_client.mint(&self.bidder2, &STARTING_BALANCE);
        (token::TokenClient::new(&self.env, &asset_address), admin_client)
    }

    /// `event` as this contract would have published it.
    pub fn published(&self, event: &impl Event) -> (Address, Vec<Val>, Val) {
        (
            self.client.address.clone(),
            event.topics(&self.env),
            event.data(&self.env),
        )
    }

    /// Events of the last invocation emitted by this contract, asset transfers left out.
    pub fn auction_events(&self) -> Vec<(Address, Vec<Val>, Val)> {
        let mut own = Vec::new(&self.env);
        for event in self.env.events().all().iter() {
            if event.0 == self.client.address {
                own.push_back(event);
            }
        }
        own
    }

    pub fn bid_native(&self, bidder: &Address, auction_id: u64, value: i128) {
        self.client.bid(bidder, &auction_id, &0, &value);
    }

    pub fn approve(&self, bidder: &Address, amount: i128) {
        let expiration_ledger = self.env.ledger().sequence() + 1_000;
        self.token
            .approve(bidder, &self.client.address, &amount, &expiration_ledger);
    }

    pub fn bid_token(&self, bidder: &Address, auction_id: u64, amount: i128) {
        self.approve(bidder, amount);
        self.client.bid(bidder, &auction_id, &amount, &0);
    }

    pub fn bid_in(
        &self,
        asset: &token::TokenClient<'static>,
        bidder: &Address,
        auction_id: u64,
        amount: i128,
    ) {
        let expiration_ledger = self.env.ledger().sequence() + 1_000;
        asset.approve(bidder, &self.client.address, &amount, &expiration_ledger);
        self.client.bid(bidder, &auction_id, &amount, &0);
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

pub fn hours(count: u64) -> u64 {
    count * 3600
}
