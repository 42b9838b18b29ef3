//! Caller-facing parameters of the marketplace operations.
//!
//! Optional fields are `None` when the caller relies on the default; every
//! constructor sets `wait_for_transaction` to `true`.

use ark_types::{Felt, U256};
use serde::{Deserialize, Serialize};

/// Parameters for listing a token at a fixed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingParams {
	pub broker_address: Felt,
	/// Defaults to the configured currency contract.
	pub currency_address: Option<Felt>,
	pub token_address: Felt,
	pub token_id: U256,
	pub amount: U256,
	pub start_date: Option<u64>,
	pub end_date: Option<u64>,
	pub wait_for_transaction: bool,
}

impl ListingParams {
	pub fn new(broker_address: Felt, token_address: Felt, token_id: U256, amount: U256) -> Self {
		Self {
			broker_address,
			currency_address: None,
			token_address,
			token_id,
			amount,
			start_date: None,
			end_date: None,
			wait_for_transaction: true,
		}
	}

	pub fn with_currency(mut self, currency_address: Felt) -> Self {
		self.currency_address = Some(currency_address);
		self
	}

	pub fn with_dates(mut self, start_date: Option<u64>, end_date: Option<u64>) -> Self {
		self.start_date = start_date;
		self.end_date = end_date;
		self
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for an offer on a token, or on any token of a collection when
/// `token_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferParams {
	pub broker_address: Felt,
	pub currency_address: Option<Felt>,
	pub token_address: Felt,
	pub token_id: Option<U256>,
	pub amount: U256,
	pub start_date: Option<u64>,
	pub end_date: Option<u64>,
	pub wait_for_transaction: bool,
}

impl OfferParams {
	pub fn new(broker_address: Felt, token_address: Felt, amount: U256) -> Self {
		Self {
			broker_address,
			currency_address: None,
			token_address,
			token_id: None,
			amount,
			start_date: None,
			end_date: None,
			wait_for_transaction: true,
		}
	}

	pub fn with_token_id(mut self, token_id: U256) -> Self {
		self.token_id = Some(token_id);
		self
	}

	pub fn with_currency(mut self, currency_address: Felt) -> Self {
		self.currency_address = Some(currency_address);
		self
	}

	pub fn with_dates(mut self, start_date: Option<u64>, end_date: Option<u64>) -> Self {
		self.start_date = start_date;
		self.end_date = end_date;
		self
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for an auction with a reserve (`start_amount`) and an
/// optional buy-now price (`end_amount`, zero when unset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionParams {
	pub broker_address: Felt,
	pub currency_address: Option<Felt>,
	pub token_address: Felt,
	pub token_id: U256,
	pub start_amount: U256,
	pub end_amount: U256,
	pub start_date: Option<u64>,
	pub end_date: Option<u64>,
	pub wait_for_transaction: bool,
}

impl AuctionParams {
	pub fn new(
		broker_address: Felt,
		token_address: Felt,
		token_id: U256,
		start_amount: U256,
		end_amount: U256,
	) -> Self {
		Self {
			broker_address,
			currency_address: None,
			token_address,
			token_id,
			start_amount,
			end_amount,
			start_date: None,
			end_date: None,
			wait_for_transaction: true,
		}
	}

	pub fn with_currency(mut self, currency_address: Felt) -> Self {
		self.currency_address = Some(currency_address);
		self
	}

	pub fn with_dates(mut self, start_date: Option<u64>, end_date: Option<u64>) -> Self {
		self.start_date = start_date;
		self.end_date = end_date;
		self
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for cancelling an order owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelParams {
	pub order_hash: Felt,
	pub token_address: Felt,
	/// `None` for collection offers.
	pub token_id: Option<U256>,
	pub wait_for_transaction: bool,
}

impl CancelParams {
	pub fn new(order_hash: Felt, token_address: Felt, token_id: Option<U256>) -> Self {
		Self {
			order_hash,
			token_address,
			token_id,
			wait_for_transaction: true,
		}
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for buying a listed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillListingParams {
	pub order_hash: Felt,
	pub token_address: Felt,
	pub token_id: U256,
	/// Price of the listing, approved on top of the current allowance.
	pub amount: U256,
	pub currency_address: Option<Felt>,
	pub broker_address: Felt,
	pub wait_for_transaction: bool,
}

impl FulfillListingParams {
	pub fn new(
		order_hash: Felt,
		token_address: Felt,
		token_id: U256,
		amount: U256,
		broker_address: Felt,
	) -> Self {
		Self {
			order_hash,
			token_address,
			token_id,
			amount,
			currency_address: None,
			broker_address,
			wait_for_transaction: true,
		}
	}

	pub fn with_currency(mut self, currency_address: Felt) -> Self {
		self.currency_address = Some(currency_address);
		self
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for accepting an offer on a token the caller owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillOfferParams {
	pub order_hash: Felt,
	pub token_address: Felt,
	pub token_id: U256,
	pub broker_address: Felt,
	pub wait_for_transaction: bool,
}

impl FulfillOfferParams {
	pub fn new(order_hash: Felt, token_address: Felt, token_id: U256, broker_address: Felt) -> Self {
		Self {
			order_hash,
			token_address,
			token_id,
			broker_address,
			wait_for_transaction: true,
		}
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for closing an auction by accepting one of its bids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillAuctionParams {
	/// Hash of the auction order.
	pub order_hash: Felt,
	/// Hash of the offer being accepted.
	pub related_order_hash: Felt,
	pub token_address: Felt,
	pub token_id: U256,
	pub broker_address: Felt,
	pub wait_for_transaction: bool,
}

impl FulfillAuctionParams {
	pub fn new(
		order_hash: Felt,
		related_order_hash: Felt,
		token_address: Felt,
		token_id: U256,
		broker_address: Felt,
	) -> Self {
		Self {
			order_hash,
			related_order_hash,
			token_address,
			token_id,
			broker_address,
			wait_for_transaction: true,
		}
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for a standalone ERC-20 approval of the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveErc20Params {
	/// Defaults to the configured currency contract.
	pub currency_address: Option<Felt>,
	pub amount: U256,
	pub wait_for_transaction: bool,
}

impl ApproveErc20Params {
	pub fn new(amount: U256) -> Self {
		Self {
			currency_address: None,
			amount,
			wait_for_transaction: true,
		}
	}

	pub fn with_currency(mut self, currency_address: Felt) -> Self {
		self.currency_address = Some(currency_address);
		self
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}

/// Parameters for a standalone ERC-721 approval of the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveErc721Params {
	pub token_address: Felt,
	pub token_id: U256,
	pub wait_for_transaction: bool,
}

impl ApproveErc721Params {
	pub fn new(token_address: Felt, token_id: U256) -> Self {
		Self {
			token_address,
			token_id,
			wait_for_transaction: true,
		}
	}

	pub fn with_wait(mut self, wait_for_transaction: bool) -> Self {
		self.wait_for_transaction = wait_for_transaction;
		self
	}
}
