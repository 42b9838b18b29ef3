//! Marketplace client for the Ark executor contract.
//!
//! [`MarketplaceClient`] ties the order builder to the network. Read
//! operations go through the provider; state-changing operations are
//! validated locally, assembled into a single multicall and submitted by the
//! caller's account.

use ark_account::AccountInterface;
use ark_config::ArkConfig;
use ark_provider::implementations::rpc::RpcProvider;
use ark_provider::ProviderInterface;
use ark_types::{felt_hex, truncate_hash, ContractCall, Felt, TransactionHash};
use std::sync::Arc;
use std::time::Duration;

pub mod actions;
pub mod error;
pub mod reads;

pub use actions::OrderResult;
pub use error::CoreError;

/// Interval between receipt polls while waiting for inclusion.
pub const WAIT_RETRY_INTERVAL: Duration = Duration::from_millis(1000);

/// Client bound to one network and executor deployment.
///
/// Cheap to clone; clones share the configuration and the provider.
#[derive(Clone)]
pub struct MarketplaceClient {
	config: Arc<ArkConfig>,
	provider: Arc<dyn ProviderInterface>,
}

impl MarketplaceClient {
	pub fn new(config: ArkConfig, provider: Arc<dyn ProviderInterface>) -> Self {
		Self {
			config: Arc::new(config),
			provider,
		}
	}

	/// Builds a client backed by the JSON-RPC endpoint of `config`.
	pub fn connect(config: ArkConfig) -> Result<Self, CoreError> {
		let provider = RpcProvider::new(config.rpc_url())?;
		Ok(Self::new(config, Arc::new(provider)))
	}

	/// Builds the signing account described by the `[account]` table.
	pub async fn account_from_config(&self) -> Result<Box<dyn AccountInterface>, CoreError> {
		let account_config = self.config.account.as_ref().ok_or_else(|| {
			CoreError::Configuration("No [account] section configured".to_string())
		})?;

		let account = ark_account::implementations::local::create_account(
			account_config,
			self.config.rpc_url(),
		)
		.await?;
		Ok(account)
	}

	pub fn config(&self) -> &ArkConfig {
		&self.config
	}

	pub fn provider(&self) -> &Arc<dyn ProviderInterface> {
		&self.provider
	}

	fn executor(&self) -> Felt {
		self.config.executor_address
	}

	/// Executes `calls` as one transaction and optionally waits for inclusion.
	async fn submit(
		&self,
		account: &dyn AccountInterface,
		calls: Vec<ContractCall>,
		wait_for_transaction: bool,
	) -> Result<TransactionHash, CoreError> {
		let call_count = calls.len();
		let transaction_hash = account.execute(calls).await?;

		tracing::info!(
			tx_hash = %truncate_hash(&transaction_hash.to_string()),
			calls = call_count,
			account = %truncate_hash(&felt_hex(&account.address())),
			"Submitted transaction"
		);

		if wait_for_transaction {
			self.provider
				.wait_for_transaction(&transaction_hash, WAIT_RETRY_INTERVAL)
				.await?;
		}

		Ok(transaction_hash)
	}
}

/// Current unix time in seconds.
pub(crate) fn now_secs() -> u64 {
	u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}
