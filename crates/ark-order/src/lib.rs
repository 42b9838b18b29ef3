//! Order construction for the Ark marketplace.
//!
//! This crate turns user parameters into `OrderV1` records: it applies
//! defaults, validates the time window and amounts, derives the order hash
//! the executor uses to identify orders, and encodes the contract calls that
//! carry orders on chain. Nothing here touches the network.

use ark_types::U256;
use thiserror::Error;

pub mod builder;
pub mod calls;
pub mod hash;
pub mod params;
pub mod window;

pub use builder::OrderDraft;
pub use hash::{compute_order_hash, compute_token_hash};
pub use params::*;
pub use window::{OrderWindow, DEFAULT_ORDER_DURATION_SECS, MAX_ORDER_DURATION_SECS};

/// Errors that can occur while building an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
	#[error("Invalid start date: {start_date} is before current time {now}")]
	InvalidStartDate { start_date: u64, now: u64 },

	#[error("Invalid end date: {end_date} is before start date {start_date}")]
	InvalidEndDate { start_date: u64, end_date: u64 },

	#[error("Invalid end date: {end_date} is after maximum end date {max_end_date}")]
	InvalidDuration { end_date: u64, max_end_date: u64 },

	#[error("Invalid start amount: must be greater than zero")]
	InvalidStartAmount,

	#[error("Invalid end amount: {end_amount} is lower than start amount {start_amount}")]
	InvalidEndAmount { start_amount: U256, end_amount: U256 },

	#[error("Order has no token id")]
	MissingTokenId,

	#[error("Allowance overflow: {current} + {amount} exceeds u256")]
	AmountOverflow { current: U256, amount: U256 },

	#[error("Invalid entrypoint name: {0}")]
	Selector(String),

	#[error("Failed to encode calldata: {0}")]
	Encode(String),
}

/// Amount to approve so that `amount` is spendable on top of what is already
/// allowed.
///
/// Pending orders keep their share of the allowance, so approvals add up
/// rather than replace each other.
pub fn top_up_allowance(current: U256, amount: U256) -> Result<U256, OrderError> {
	current
		.checked_add(amount)
		.ok_or(OrderError::AmountOverflow { current, amount })
}
