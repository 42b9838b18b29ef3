//! Order records exchanged with the marketplace executor contract.
//!
//! Field order in every struct mirrors the Cairo declaration, since both the
//! calldata and the order hash are computed over the serialized form.

use serde::{Deserialize, Serialize};
use starknet::core::codec::{Decode, Encode};
use starknet::core::types::{Felt, U256 as CairoU256};
use std::fmt;

use crate::codec::cairo_u256_serde;

/// Direction of the exchange encoded in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[starknet(core = "starknet::core")]
pub enum RouteType {
	/// Currency offered for a token (offers, collection offers).
	Erc20ToErc721,
	/// Token offered for currency (listings, auctions).
	Erc721ToErc20,
}

/// Version 1 of the marketplace order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[starknet(core = "starknet::core")]
pub struct OrderV1 {
	pub route: RouteType,
	pub currency_address: Felt,
	pub currency_chain_id: Felt,
	pub salt: Felt,
	pub offerer: Felt,
	pub token_chain_id: Felt,
	pub token_address: Felt,
	/// Absent for collection offers.
	#[serde(default, with = "cairo_u256_serde::option")]
	pub token_id: Option<CairoU256>,
	#[serde(with = "cairo_u256_serde")]
	pub quantity: CairoU256,
	#[serde(with = "cairo_u256_serde")]
	pub start_amount: CairoU256,
	#[serde(with = "cairo_u256_serde")]
	pub end_amount: CairoU256,
	/// Unix seconds.
	pub start_date: u64,
	/// Unix seconds.
	pub end_date: u64,
	pub broker_id: Felt,
	pub additional_data: Vec<Felt>,
}

/// Payload of `cancel_order` on the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode)]
#[starknet(core = "starknet::core")]
pub struct CancelInfo {
	pub order_hash: Felt,
	pub canceller: Felt,
	pub token_chain_id: Felt,
	pub token_address: Felt,
	#[serde(default, with = "cairo_u256_serde::option")]
	pub token_id: Option<CairoU256>,
}

/// Payload of `fulfill_order` on the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode)]
#[starknet(core = "starknet::core")]
pub struct FulfillInfo {
	pub order_hash: Felt,
	/// Offer matched against an auction, when the seller accepts a bid.
	pub related_order_hash: Option<Felt>,
	pub fulfiller: Felt,
	pub token_chain_id: Felt,
	pub token_address: Felt,
	#[serde(default, with = "cairo_u256_serde::option")]
	pub token_id: Option<CairoU256>,
	pub fulfill_broker_address: Felt,
}

/// Status of an order as tracked by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Decode)]
#[starknet(core = "starknet::core")]
pub enum OrderStatus {
	Open,
	Fulfilled,
	Executed,
	CancelledUser,
	CancelledByNewOrder,
	CancelledAssetFault,
	CancelledOwnership,
}

impl OrderStatus {
	/// Whether no further transition is possible.
	pub fn is_terminal(&self) -> bool {
		!matches!(self, OrderStatus::Open | OrderStatus::Fulfilled)
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			OrderStatus::Open => "OPEN",
			OrderStatus::Fulfilled => "FULFILLED",
			OrderStatus::Executed => "EXECUTED",
			OrderStatus::CancelledUser => "CANCELLED_USER",
			OrderStatus::CancelledByNewOrder => "CANCELLED_BY_NEW_ORDER",
			OrderStatus::CancelledAssetFault => "CANCELLED_ASSET_FAULT",
			OrderStatus::CancelledOwnership => "CANCELLED_OWNERSHIP",
		};
		f.write_str(name)
	}
}

/// Kind of order as classified by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Decode)]
#[starknet(core = "starknet::core")]
pub enum OrderType {
	Listing,
	Auction,
	Offer,
	CollectionOffer,
}

impl fmt::Display for OrderType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			OrderType::Listing => "LISTING",
			OrderType::Auction => "AUCTION",
			OrderType::Offer => "OFFER",
			OrderType::CollectionOffer => "COLLECTION_OFFER",
		};
		f.write_str(name)
	}
}
