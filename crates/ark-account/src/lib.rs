//! Account abstraction for the marketplace SDK.
//!
//! Every state-changing marketplace operation is a batch of contract calls
//! executed atomically by the caller's Starknet account. This crate defines
//! the seam between the order flows and whatever signs and submits them.

use ark_types::{ContractCall, Felt, TransactionHash};
use async_trait::async_trait;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod local;
}

#[derive(Debug, Error)]
pub enum AccountError {
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
	#[error("Provider error: {0}")]
	Provider(String),
	#[error("Execution failed: {0}")]
	Execution(String),
}

/// An account able to sign and submit multicall transactions.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait AccountInterface: Send + Sync {
	/// Address of the account contract.
	fn address(&self) -> Felt;

	/// Signs and submits `calls` as a single atomic transaction.
	///
	/// Returns as soon as the node accepts the transaction; inclusion is
	/// awaited separately through the provider.
	async fn execute(&self, calls: Vec<ContractCall>) -> Result<TransactionHash, AccountError>;
}
