//! JSON-RPC provider implementation.
//!
//! This module provides the production implementation of ProviderInterface,
//! backed by starknet-rs' `JsonRpcClient` over HTTP.

use crate::{poll_receipt, ProviderError, ProviderInterface};
use ark_types::{Felt, TransactionHash, TransactionReceipt};
use async_trait::async_trait;
use starknet::core::types::{
	BlockId, BlockTag, ExecutionResult, FunctionCall, ReceiptBlock, StarknetError,
};
use starknet::core::utils::get_selector_from_name;
use starknet::providers::jsonrpc::HttpTransport;
use starknet::providers::{
	JsonRpcClient, Provider, ProviderError as StarknetProviderError, Url,
};
use std::time::Duration;

/// Starknet JSON-RPC provider.
pub struct RpcProvider {
	client: JsonRpcClient<HttpTransport>,
}

impl RpcProvider {
	/// Creates a provider for the node at `rpc_url`.
	pub fn new(rpc_url: &str) -> Result<Self, ProviderError> {
		let url = Url::parse(rpc_url)
			.map_err(|e| ProviderError::InvalidConfig(format!("Invalid RPC URL: {}", e)))?;

		Ok(Self {
			client: JsonRpcClient::new(HttpTransport::new(url)),
		})
	}
}

#[async_trait]
impl ProviderInterface for RpcProvider {
	async fn chain_id(&self) -> Result<Felt, ProviderError> {
		self.client
			.chain_id()
			.await
			.map_err(|e| ProviderError::Network(format!("Failed to fetch chain id: {}", e)))
	}

	async fn call(
		&self,
		contract: Felt,
		entrypoint: &str,
		calldata: Vec<Felt>,
	) -> Result<Vec<Felt>, ProviderError> {
		let selector = get_selector_from_name(entrypoint).map_err(|e| ProviderError::Call {
			entrypoint: entrypoint.to_string(),
			message: e.to_string(),
		})?;

		tracing::debug!(
			contract = %contract.to_hex_string(),
			entrypoint,
			"Calling view entrypoint"
		);

		self.client
			.call(
				FunctionCall {
					contract_address: contract,
					entry_point_selector: selector,
					calldata,
				},
				BlockId::Tag(BlockTag::Latest),
			)
			.await
			.map_err(|e| ProviderError::Call {
				entrypoint: entrypoint.to_string(),
				message: e.to_string(),
			})
	}

	async fn get_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TransactionReceipt>, ProviderError> {
		let receipt = match self.client.get_transaction_receipt(hash.0).await {
			Ok(receipt) => receipt,
			Err(StarknetProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => {
				return Ok(None);
			}
			Err(e) => {
				return Err(ProviderError::Network(format!(
					"Failed to get receipt: {}",
					e
				)));
			}
		};

		let block_number = match receipt.block {
			ReceiptBlock::Block { block_number, .. } => Some(block_number),
			ReceiptBlock::Pending => None,
		};

		let (success, revert_reason) = match receipt.receipt.execution_result() {
			ExecutionResult::Succeeded => (true, None),
			ExecutionResult::Reverted { reason } => (false, Some(reason.clone())),
		};

		Ok(Some(TransactionReceipt {
			hash: *hash,
			block_number,
			success,
			revert_reason,
		}))
	}

	async fn wait_for_transaction(
		&self,
		hash: &TransactionHash,
		retry_interval: Duration,
	) -> Result<TransactionReceipt, ProviderError> {
		poll_receipt(self, hash, retry_interval).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_malformed_url() {
		assert!(matches!(
			RpcProvider::new("not a url"),
			Err(ProviderError::InvalidConfig(_))
		));
	}

	#[test]
	fn test_accepts_http_url() {
		assert!(RpcProvider::new("http://localhost:5050").is_ok());
	}
}
