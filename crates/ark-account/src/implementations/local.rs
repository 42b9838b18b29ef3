//! Account implementations for the marketplace SDK.
//!
//! This module provides a concrete implementation of the AccountInterface trait
//! backed by a Starknet account contract and a locally held signing key.

use crate::{AccountError, AccountInterface};
use ark_types::{
	parse_felt, truncate_hash, ConfigSchema, ContractCall, Felt, Field, FieldKind, Schema,
	TransactionHash,
};
use async_trait::async_trait;
use starknet::accounts::{Account, ExecutionEncoding, SingleOwnerAccount};
use starknet::core::types::Call;
use starknet::providers::jsonrpc::HttpTransport;
use starknet::providers::{JsonRpcClient, Provider, Url};
use starknet::signers::{LocalWallet, SigningKey};

/// Local key implementation using starknet-rs' single-owner account.
///
/// Transactions are signed with the private key held in memory and sent as
/// v3 invoke transactions through the account's `__execute__` entrypoint.
pub struct LocalAccount {
	account: SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>,
}

impl LocalAccount {
	/// Connects to `rpc_url` and builds an account for `address`.
	///
	/// The chain id is read from the node so signatures are bound to the
	/// network the account actually submits to.
	pub async fn connect(
		rpc_url: &str,
		address: Felt,
		private_key: Felt,
	) -> Result<Self, AccountError> {
		let url = Url::parse(rpc_url)
			.map_err(|e| AccountError::InvalidConfig(format!("Invalid RPC URL: {}", e)))?;
		let provider = JsonRpcClient::new(HttpTransport::new(url));

		let chain_id = provider
			.chain_id()
			.await
			.map_err(|e| AccountError::Provider(format!("Failed to fetch chain id: {}", e)))?;

		let signer = LocalWallet::from(SigningKey::from_secret_scalar(private_key));
		let account =
			SingleOwnerAccount::new(provider, signer, address, chain_id, ExecutionEncoding::New);

		Ok(Self { account })
	}
}

/// Configuration schema for LocalAccount.
pub struct LocalAccountSchema;

impl ConfigSchema for LocalAccountSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ark_types::ValidationError> {
		let schema = Schema::new(vec![
			Field::required("address", FieldKind::Felt),
			Field::required("private_key", FieldKind::Felt).with_check(|value| {
				let key = value.as_str().unwrap_or_default();
				let digits = key.trim_start_matches("0x");
				if digits.is_empty() || digits.len() > 64 {
					return Err("Private key must be at most 64 hex characters".to_string());
				}
				Ok(())
			}),
		]);

		schema.validate(config)
	}
}

#[async_trait]
impl AccountInterface for LocalAccount {
	fn address(&self) -> Felt {
		self.account.address()
	}

	async fn execute(&self, calls: Vec<ContractCall>) -> Result<TransactionHash, AccountError> {
		let call_count = calls.len();
		let calls = calls
			.into_iter()
			.map(|call| Call {
				to: call.to,
				selector: call.selector,
				calldata: call.calldata,
			})
			.collect::<Vec<_>>();

		let result = self
			.account
			.execute_v3(calls)
			.send()
			.await
			.map_err(|e| AccountError::Execution(format!("Failed to execute calls: {}", e)))?;

		let hash = TransactionHash(result.transaction_hash);
		tracing::debug!(
			tx_hash = %truncate_hash(&hash.to_string()),
			calls = call_count,
			"Submitted multicall"
		);

		Ok(hash)
	}
}

/// Factory function to create an account from configuration.
///
/// Reads the `[account]` table (`address`, `private_key`), validates it
/// against [`LocalAccountSchema`] and connects to `rpc_url`.
pub async fn create_account(
	config: &toml::Value,
	rpc_url: &str,
) -> Result<Box<dyn AccountInterface>, AccountError> {
	LocalAccountSchema
		.validate(config)
		.map_err(|e| AccountError::InvalidConfig(e.to_string()))?;

	let read = |name: &str| -> Result<Felt, AccountError> {
		let raw = config
			.get(name)
			.and_then(|v| v.as_str())
			.ok_or_else(|| AccountError::InvalidConfig(format!("{} is required", name)))?;
		parse_felt(raw).map_err(AccountError::InvalidKey)
	};

	let address = read("address")?;
	let private_key = read("private_key")?;

	let account = LocalAccount::connect(rpc_url, address, private_key).await?;
	Ok(Box::new(account))
}
