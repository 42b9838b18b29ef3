//! Assembly of `OrderV1` records.
//!
//! Building happens in two steps. [`OrderDraft`] applies defaults and runs
//! every input check without network access; [`OrderDraft::into_order`]
//! completes the record once the chain id is known.

use ark_types::{to_cairo_u256, CairoU256, Felt, OrderV1, RouteType, U256};

use crate::{AuctionParams, ListingParams, OfferParams, OrderError, OrderWindow};

/// Salt used by version 1 orders.
pub const ORDER_SALT: Felt = Felt::ONE;

/// Validated order fields, pending the chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
	route: RouteType,
	currency_address: Felt,
	offerer: Felt,
	token_address: Felt,
	token_id: Option<U256>,
	start_amount: U256,
	end_amount: U256,
	window: OrderWindow,
	broker_id: Felt,
}

impl OrderDraft {
	/// Draft of a fixed-price listing.
	pub fn listing(
		params: &ListingParams,
		offerer: Felt,
		default_currency: Felt,
		now: u64,
	) -> Result<Self, OrderError> {
		let window = OrderWindow::resolve(params.start_date, params.end_date, now)?;
		ensure_positive(params.amount)?;

		Ok(Self {
			route: RouteType::Erc721ToErc20,
			currency_address: params.currency_address.unwrap_or(default_currency),
			offerer,
			token_address: params.token_address,
			token_id: Some(params.token_id),
			start_amount: params.amount,
			end_amount: U256::ZERO,
			window,
			broker_id: params.broker_address,
		})
	}

	/// Draft of an offer, for a single token or a whole collection.
	pub fn offer(
		params: &OfferParams,
		offerer: Felt,
		default_currency: Felt,
		now: u64,
	) -> Result<Self, OrderError> {
		let window = OrderWindow::resolve(params.start_date, params.end_date, now)?;
		ensure_positive(params.amount)?;

		Ok(Self {
			route: RouteType::Erc20ToErc721,
			currency_address: params.currency_address.unwrap_or(default_currency),
			offerer,
			token_address: params.token_address,
			token_id: params.token_id,
			start_amount: params.amount,
			end_amount: U256::ZERO,
			window,
			broker_id: params.broker_address,
		})
	}

	/// Draft of an auction.
	pub fn auction(
		params: &AuctionParams,
		offerer: Felt,
		default_currency: Felt,
		now: u64,
	) -> Result<Self, OrderError> {
		let window = OrderWindow::resolve(params.start_date, params.end_date, now)?;
		ensure_positive(params.start_amount)?;
		if params.end_amount < params.start_amount {
			return Err(OrderError::InvalidEndAmount {
				start_amount: params.start_amount,
				end_amount: params.end_amount,
			});
		}

		Ok(Self {
			route: RouteType::Erc721ToErc20,
			currency_address: params.currency_address.unwrap_or(default_currency),
			offerer,
			token_address: params.token_address,
			token_id: Some(params.token_id),
			start_amount: params.start_amount,
			end_amount: params.end_amount,
			window,
			broker_id: params.broker_address,
		})
	}

	pub fn currency_address(&self) -> Felt {
		self.currency_address
	}

	pub fn start_amount(&self) -> U256 {
		self.start_amount
	}

	/// Completes the record for the network identified by `chain_id`.
	pub fn into_order(self, chain_id: Felt) -> OrderV1 {
		OrderV1 {
			route: self.route,
			currency_address: self.currency_address,
			currency_chain_id: chain_id,
			salt: ORDER_SALT,
			offerer: self.offerer,
			token_chain_id: chain_id,
			token_address: self.token_address,
			token_id: self.token_id.map(to_cairo_u256),
			quantity: CairoU256::from(1u64),
			start_amount: to_cairo_u256(self.start_amount),
			end_amount: to_cairo_u256(self.end_amount),
			start_date: self.window.start_date,
			end_date: self.window.end_date,
			broker_id: self.broker_id,
			additional_data: Vec::new(),
		}
	}
}

fn ensure_positive(amount: U256) -> Result<(), OrderError> {
	if amount.is_zero() {
		return Err(OrderError::InvalidStartAmount);
	}
	Ok(())
}
