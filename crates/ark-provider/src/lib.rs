//! Read access to the Starknet network for the marketplace SDK.
//!
//! The provider answers chain-id queries, performs read-only contract calls
//! and tracks submitted transactions until they are included. Submission
//! itself goes through the account abstraction.

use ark_types::{truncate_hash, Felt, TransactionHash, TransactionReceipt};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod rpc;
}

/// Errors that can occur while talking to the network.
#[derive(Debug, Error)]
pub enum ProviderError {
	/// The provider could not be built from the given settings.
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
	/// Transport or node-side failure.
	#[error("Network error: {0}")]
	Network(String),
	/// A read-only contract call was rejected.
	#[error("Call to {entrypoint} failed: {message}")]
	Call { entrypoint: String, message: String },
	/// The transaction was included but its execution reverted.
	#[error("Transaction {hash} reverted: {reason}")]
	TransactionReverted {
		hash: TransactionHash,
		reason: String,
	},
}

/// Trait defining the read side of the network.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait ProviderInterface: Send + Sync {
	/// Chain id of the connected network.
	async fn chain_id(&self) -> Result<Felt, ProviderError>;

	/// Calls a view entrypoint against the latest block.
	async fn call(
		&self,
		contract: Felt,
		entrypoint: &str,
		calldata: Vec<Felt>,
	) -> Result<Vec<Felt>, ProviderError>;

	/// Fetches the receipt of a transaction, `None` while the node does not
	/// know about it yet.
	async fn get_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TransactionReceipt>, ProviderError>;

	/// Blocks until the transaction is included, polling every
	/// `retry_interval`. There is no local timeout.
	async fn wait_for_transaction(
		&self,
		hash: &TransactionHash,
		retry_interval: Duration,
	) -> Result<TransactionReceipt, ProviderError>;
}

/// Polls `provider` for the receipt of `hash` until one is available.
///
/// A receipt for a reverted execution is reported as
/// [`ProviderError::TransactionReverted`].
pub async fn poll_receipt<P>(
	provider: &P,
	hash: &TransactionHash,
	retry_interval: Duration,
) -> Result<TransactionReceipt, ProviderError>
where
	P: ProviderInterface + ?Sized,
{
	let short_hash = truncate_hash(&hash.to_string());
	tracing::info!(tx_hash = %short_hash, "Waiting for transaction");

	loop {
		match provider.get_receipt(hash).await? {
			Some(receipt) if receipt.success => {
				tracing::info!(
					tx_hash = %short_hash,
					block = ?receipt.block_number,
					"Transaction included"
				);
				return Ok(receipt);
			}
			Some(receipt) => {
				return Err(ProviderError::TransactionReverted {
					hash: *hash,
					reason: receipt.revert_reason.unwrap_or_default(),
				});
			}
			None => {
				tracing::debug!(tx_hash = %short_hash, "Receipt not available yet");
				tokio::time::sleep(retry_interval).await;
			}
		}
	}
}
