//! Moves auction funds into and out of the contract's escrow.
//!
//! Native and token auctions both settle through a Stellar token interface;
//! they differ only in how a bid is pulled in. A native bid is a direct
//! bidder-signed `transfer` of the attached value, a token bid spends the
//! allowance the bidder granted the contract with `approve`.
//!
//! Every sub-call goes through the `try_` client methods. A rejected transfer
//! comes back as [`Error::TransferFailed`], and returning that error from the
//! entry point rolls back the whole invocation.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;
use crate::types::{Asset, PlatformConfig};

pub struct AssetTransfer<'a> {
    env: &'a Env,
    asset: Asset,
    client: token::Client<'a>,
}

impl<'a> AssetTransfer<'a> {
    pub fn new(env: &'a Env, asset: &Asset, config: &PlatformConfig) -> Self {
        let contract = match asset {
            Asset::Native => &config.native_asset,
            Asset::Token(address) => address,
        };
        Self {
            env,
            asset: asset.clone(),
            client: token::Client::new(env, contract),
        }
    }

    /// Pull `amount` from `payer` into escrow.
    pub fn deposit(&self, payer: &Address, amount: i128) -> Result<(), Error> {
        let escrow = self.env.current_contract_address();
        let accepted = match self.asset {
            Asset::Native => matches!(
                self.client.try_transfer(payer, &escrow, &amount),
                Ok(Ok(()))
            ),
            Asset::Token(_) => matches!(
                self.client.try_transfer_from(&escrow, payer, &escrow, &amount),
                Ok(Ok(()))
            ),
        };
        if !accepted {
            log!(self.env, "deposit rejected", payer.clone(), amount);
            return Err(Error::TransferFailed);
        }
        Ok(())
    }

    /// Push `amount` out of escrow to `recipient`. Zero amounts are skipped.
    pub fn payout(&self, recipient: &Address, amount: i128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let escrow = self.env.current_contract_address();
        if !matches!(self.client.try_transfer(&escrow, recipient, &amount), Ok(Ok(()))) {
            log!(self.env, "payout rejected", recipient.clone(), amount);
            return Err(Error::TransferFailed);
        }
        Ok(())
    }

    /// Return a displaced bid to its bidder.
    pub fn refund(&self, recipient: &Address, amount: i128) -> Result<(), Error> {
        self.payout(recipient, amount)
    }
}
