//! State-changing marketplace operations.
//!
//! Each operation validates its parameters before touching the network,
//! reads what it needs from the chain, then submits every call it makes as a
//! single multicall so approvals and the order land atomically.

use ark_account::AccountInterface;
use ark_order::{
	calls, compute_order_hash, top_up_allowance, ApproveErc20Params, ApproveErc721Params,
	AuctionParams, CancelParams, FulfillAuctionParams, FulfillListingParams, FulfillOfferParams,
	ListingParams, OfferParams, OrderDraft,
};
use ark_types::{
	felt_hex, to_cairo_u256, truncate_hash, CancelInfo, Felt, FulfillInfo, TransactionHash,
};
use serde::{Deserialize, Serialize};

use crate::{now_secs, CoreError, MarketplaceClient};

/// Outcome of an order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
	/// Hash the executor stores the order under.
	pub order_hash: Felt,
	pub transaction_hash: TransactionHash,
}

impl MarketplaceClient {
	/// Lists a token at a fixed price.
	///
	/// Approves the executor for the token and creates the order in one
	/// transaction.
	pub async fn create_listing(
		&self,
		account: &dyn AccountInterface,
		params: &ListingParams,
	) -> Result<OrderResult, CoreError> {
		let draft = OrderDraft::listing(
			params,
			account.address(),
			self.config.currency_address(),
			now_secs(),
		)?;

		let chain_id = self.provider.chain_id().await?;
		let order = draft.into_order(chain_id);
		let order_hash = compute_order_hash(&order)?;

		let calls = vec![
			calls::approve_erc721(params.token_address, self.executor(), params.token_id)?,
			calls::create_order(self.executor(), &order)?,
		];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&order_hash)),
			token_id = %params.token_id,
			"Created listing"
		);

		Ok(OrderResult {
			order_hash,
			transaction_hash,
		})
	}

	/// Offers currency for a token, or for any token of a collection.
	///
	/// The executor's allowance is raised by the offer amount so that
	/// pending offers stay funded.
	pub async fn create_offer(
		&self,
		account: &dyn AccountInterface,
		params: &OfferParams,
	) -> Result<OrderResult, CoreError> {
		let offerer = account.address();
		let draft = OrderDraft::offer(params, offerer, self.config.currency_address(), now_secs())?;

		let chain_id = self.provider.chain_id().await?;
		let currency_address = draft.currency_address();
		let current = self.get_allowance(currency_address, offerer).await?;
		let allowance = top_up_allowance(current, draft.start_amount())?;

		let order = draft.into_order(chain_id);
		let order_hash = compute_order_hash(&order)?;

		let calls = vec![
			calls::approve_erc20(currency_address, self.executor(), allowance)?,
			calls::create_order(self.executor(), &order)?,
		];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&order_hash)),
			collection = params.token_id.is_none(),
			%allowance,
			"Created offer"
		);

		Ok(OrderResult {
			order_hash,
			transaction_hash,
		})
	}

	/// Puts a token up for auction.
	pub async fn create_auction(
		&self,
		account: &dyn AccountInterface,
		params: &AuctionParams,
	) -> Result<OrderResult, CoreError> {
		let draft = OrderDraft::auction(
			params,
			account.address(),
			self.config.currency_address(),
			now_secs(),
		)?;

		let chain_id = self.provider.chain_id().await?;
		let order = draft.into_order(chain_id);
		let order_hash = compute_order_hash(&order)?;

		let calls = vec![
			calls::approve_erc721(params.token_address, self.executor(), params.token_id)?,
			calls::create_order(self.executor(), &order)?,
		];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&order_hash)),
			"Created auction"
		);

		Ok(OrderResult {
			order_hash,
			transaction_hash,
		})
	}

	/// Cancels an order placed by `account`.
	pub async fn cancel_order(
		&self,
		account: &dyn AccountInterface,
		params: &CancelParams,
	) -> Result<TransactionHash, CoreError> {
		let chain_id = self.provider.chain_id().await?;
		let info = CancelInfo {
			order_hash: params.order_hash,
			canceller: account.address(),
			token_chain_id: chain_id,
			token_address: params.token_address,
			token_id: params.token_id.map(to_cairo_u256),
		};

		let calls = vec![calls::cancel_order(self.executor(), &info)?];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&params.order_hash)),
			"Cancelled order"
		);
		Ok(transaction_hash)
	}

	/// Buys a listed token, topping up the currency allowance by the price.
	pub async fn fulfill_listing(
		&self,
		account: &dyn AccountInterface,
		params: &FulfillListingParams,
	) -> Result<TransactionHash, CoreError> {
		let fulfiller = account.address();
		let currency_address = params
			.currency_address
			.unwrap_or_else(|| self.config.currency_address());

		let chain_id = self.provider.chain_id().await?;
		let current = self.get_allowance(currency_address, fulfiller).await?;
		let allowance = top_up_allowance(current, params.amount)?;

		let info = FulfillInfo {
			order_hash: params.order_hash,
			related_order_hash: None,
			fulfiller,
			token_chain_id: chain_id,
			token_address: params.token_address,
			token_id: Some(to_cairo_u256(params.token_id)),
			fulfill_broker_address: params.broker_address,
		};

		let calls = vec![
			calls::approve_erc20(currency_address, self.executor(), allowance)?,
			calls::fulfill_order(self.executor(), &info)?,
		];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&params.order_hash)),
			"Fulfilled listing"
		);
		Ok(transaction_hash)
	}

	/// Accepts an offer on a token owned by `account`.
	pub async fn fulfill_offer(
		&self,
		account: &dyn AccountInterface,
		params: &FulfillOfferParams,
	) -> Result<TransactionHash, CoreError> {
		let chain_id = self.provider.chain_id().await?;
		let info = FulfillInfo {
			order_hash: params.order_hash,
			related_order_hash: None,
			fulfiller: account.address(),
			token_chain_id: chain_id,
			token_address: params.token_address,
			token_id: Some(to_cairo_u256(params.token_id)),
			fulfill_broker_address: params.broker_address,
		};

		let calls = vec![
			calls::approve_erc721(params.token_address, self.executor(), params.token_id)?,
			calls::fulfill_order(self.executor(), &info)?,
		];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&params.order_hash)),
			"Fulfilled offer"
		);
		Ok(transaction_hash)
	}

	/// Closes an auction by accepting the offer `related_order_hash`.
	///
	/// The token was approved when the auction was created.
	pub async fn fulfill_auction(
		&self,
		account: &dyn AccountInterface,
		params: &FulfillAuctionParams,
	) -> Result<TransactionHash, CoreError> {
		let chain_id = self.provider.chain_id().await?;
		let info = FulfillInfo {
			order_hash: params.order_hash,
			related_order_hash: Some(params.related_order_hash),
			fulfiller: account.address(),
			token_chain_id: chain_id,
			token_address: params.token_address,
			token_id: Some(to_cairo_u256(params.token_id)),
			fulfill_broker_address: params.broker_address,
		};

		let calls = vec![calls::fulfill_order(self.executor(), &info)?];
		let transaction_hash = self
			.submit(account, calls, params.wait_for_transaction)
			.await?;

		tracing::info!(
			order_hash = %truncate_hash(&felt_hex(&params.order_hash)),
			offer_hash = %truncate_hash(&felt_hex(&params.related_order_hash)),
			"Fulfilled auction"
		);
		Ok(transaction_hash)
	}

	/// Sets the executor's allowance for a currency to `amount`.
	pub async fn approve_erc20(
		&self,
		account: &dyn AccountInterface,
		params: &ApproveErc20Params,
	) -> Result<TransactionHash, CoreError> {
		let currency_address = params
			.currency_address
			.unwrap_or_else(|| self.config.currency_address());
		let calls = vec![calls::approve_erc20(
			currency_address,
			self.executor(),
			params.amount,
		)?];
		self.submit(account, calls, params.wait_for_transaction)
			.await
	}

	/// Approves the executor to transfer a single token.
	pub async fn approve_erc721(
		&self,
		account: &dyn AccountInterface,
		params: &ApproveErc721Params,
	) -> Result<TransactionHash, CoreError> {
		let calls = vec![calls::approve_erc721(
			params.token_address,
			self.executor(),
			params.token_id,
		)?];
		self.submit(account, calls, params.wait_for_transaction)
			.await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::*;
	use crate::WAIT_RETRY_INTERVAL;
	use ark_account::MockAccountInterface;
	use ark_config::ETH_ADDRESS;
	use ark_order::{OrderError, DEFAULT_ORDER_DURATION_SECS, MAX_ORDER_DURATION_SECS};
	use ark_provider::MockProviderInterface;
	use ark_types::{
		from_cairo_u256, from_felts, to_calldata, CairoU256, ContractCall, OrderStatus, OrderV1,
		RouteType, U256,
	};
	use std::sync::{Arc, Mutex};

	const TOKEN: Felt = Felt::from_hex_unchecked("0x721");
	const BROKER: Felt = Felt::from_hex_unchecked("0xb0");

	fn tx(n: u64) -> TransactionHash {
		TransactionHash(Felt::from(n))
	}

	fn selector(entrypoint: &str) -> Felt {
		calls::selector(entrypoint).unwrap()
	}

	fn decoded_order(call: &ContractCall) -> OrderV1 {
		from_felts(&call.calldata).unwrap()
	}

	/// Account that records every multicall it is asked to execute.
	fn recording_account(executed: Arc<Mutex<Vec<Vec<ContractCall>>>>) -> MockAccountInterface {
		let mut account = account();
		account.expect_execute().returning(move |calls| {
			let mut executed = executed.lock().unwrap();
			executed.push(calls);
			Ok(tx(executed.len() as u64))
		});
		account
	}

	#[tokio::test]
	async fn test_create_listing() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		provider
			.expect_wait_for_transaction()
			.withf(|hash, interval| *hash == tx(1) && *interval == WAIT_RETRY_INTERVAL)
			.times(1)
			.returning(|hash, _| Ok(included(hash)));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let params = ListingParams::new(BROKER, TOKEN, U256::from(7u64), U256::from(1_000u64));
		let before = now_secs();
		let result = client.create_listing(&account, &params).await.unwrap();

		let executed = executed.lock().unwrap();
		assert_eq!(executed.len(), 1);
		let multicall = &executed[0];
		assert_eq!(multicall.len(), 2);

		let approve = &multicall[0];
		assert_eq!(approve.to, TOKEN);
		assert_eq!(approve.selector, selector("approve"));
		assert_eq!(approve.calldata, vec![EXECUTOR, Felt::from(7u64), Felt::ZERO]);

		let create = &multicall[1];
		assert_eq!(create.to, EXECUTOR);
		assert_eq!(create.selector, selector("create_order"));

		let order = decoded_order(create);
		assert_eq!(order.route, RouteType::Erc721ToErc20);
		assert_eq!(order.offerer, OFFERER);
		assert_eq!(order.currency_address, ETH_ADDRESS);
		assert_eq!(order.currency_chain_id, CHAIN_ID);
		assert_eq!(order.token_chain_id, CHAIN_ID);
		assert_eq!(order.token_id, Some(CairoU256::from(7u64)));
		assert_eq!(order.start_amount, CairoU256::from(1_000u64));
		assert_eq!(order.end_amount, CairoU256::from(0u64));
		assert!(order.start_date >= before);
		assert_eq!(order.end_date, order.start_date + DEFAULT_ORDER_DURATION_SECS);

		assert_eq!(result.order_hash, compute_order_hash(&order).unwrap());
		assert_eq!(result.transaction_hash, tx(1));
	}

	#[tokio::test]
	async fn test_zero_amount_rejected_before_network() {
		// No expectations: any provider or execute call would panic.
		let client = client(MockProviderInterface::new());
		let account = account();

		let listing = ListingParams::new(BROKER, TOKEN, U256::from(1u64), U256::ZERO);
		assert!(matches!(
			client.create_listing(&account, &listing).await,
			Err(CoreError::Order(OrderError::InvalidStartAmount))
		));

		let offer = OfferParams::new(BROKER, TOKEN, U256::ZERO);
		assert!(matches!(
			client.create_offer(&account, &offer).await,
			Err(CoreError::Order(OrderError::InvalidStartAmount))
		));
	}

	#[tokio::test]
	async fn test_end_before_start_rejected_before_network() {
		let client = client(MockProviderInterface::new());
		let account = account();

		let now = now_secs();
		let params = ListingParams::new(BROKER, TOKEN, U256::from(1u64), U256::from(1u64))
			.with_dates(Some(now + 1_000), Some(now + 500));
		assert!(matches!(
			client.create_listing(&account, &params).await,
			Err(CoreError::Order(OrderError::InvalidEndDate { .. }))
		));

		let params = OfferParams::new(BROKER, TOKEN, U256::from(1u64))
			.with_dates(Some(now + 1_000), Some(now + 500));
		assert!(matches!(
			client.create_offer(&account, &params).await,
			Err(CoreError::Order(OrderError::InvalidEndDate { .. }))
		));
	}

	#[tokio::test]
	async fn test_duration_over_thirty_days_rejected() {
		let client = client(MockProviderInterface::new());
		let account = account();

		let now = now_secs();
		let params = ListingParams::new(BROKER, TOKEN, U256::from(1u64), U256::from(1u64))
			.with_dates(Some(now + 60), Some(now + MAX_ORDER_DURATION_SECS + 3_600));
		assert!(matches!(
			client.create_listing(&account, &params).await,
			Err(CoreError::Order(OrderError::InvalidDuration { .. }))
		));
	}

	#[tokio::test]
	async fn test_offer_allowance_is_additive() {
		let allowance = Arc::new(Mutex::new(U256::from(500u64)));

		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		let chain_allowance = allowance.clone();
		provider
			.expect_call()
			.withf(|contract, entrypoint, calldata| {
				*contract == ETH_ADDRESS
					&& entrypoint == "allowance"
					&& calldata == &vec![OFFERER, EXECUTOR]
			})
			.returning(move |_, _, _| {
				let current = *chain_allowance.lock().unwrap();
				Ok(to_calldata(&to_cairo_u256(current)).unwrap())
			});
		let client = client(provider);

		// Applies each approval to the simulated chain state.
		let approvals = Arc::new(Mutex::new(Vec::new()));
		let mut account = account();
		let chain_allowance = allowance.clone();
		let recorded = approvals.clone();
		account.expect_execute().returning(move |calls| {
			let approve = &calls[0];
			let amount = from_cairo_u256(from_felts(&approve.calldata[1..]).unwrap());
			*chain_allowance.lock().unwrap() = amount;
			recorded.lock().unwrap().push(amount);
			Ok(tx(1))
		});

		for amount in [20u64, 7] {
			let params = OfferParams::new(BROKER, TOKEN, U256::from(amount))
				.with_token_id(U256::from(1u64))
				.with_wait(false);
			client.create_offer(&account, &params).await.unwrap();
		}

		assert_eq!(
			*approvals.lock().unwrap(),
			vec![U256::from(520u64), U256::from(527u64)]
		);
	}

	#[tokio::test]
	async fn test_create_offer_waits_by_default() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		provider
			.expect_call()
			.withf(|_, entrypoint, _| entrypoint == "allowance")
			.returning(|_, _, _| Ok(vec![Felt::ZERO, Felt::ZERO]));
		provider
			.expect_wait_for_transaction()
			.withf(|hash, interval| *hash == tx(1) && *interval == WAIT_RETRY_INTERVAL)
			.times(1)
			.returning(|hash, _| Ok(included(hash)));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let params = OfferParams::new(BROKER, TOKEN, U256::from(25u64)).with_token_id(U256::from(4u64));
		assert!(params.wait_for_transaction);
		let result = client.create_offer(&account, &params).await.unwrap();

		assert_eq!(result.transaction_hash, tx(1));
		let executed = executed.lock().unwrap();
		assert_eq!(executed.len(), 1);
		assert_eq!(
			executed[0][0].calldata,
			vec![EXECUTOR, Felt::from(25u64), Felt::ZERO]
		);
	}

	#[tokio::test]
	async fn test_offer_allowance_overflow() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		provider
			.expect_call()
			.returning(|_, _, _| Ok(to_calldata(&to_cairo_u256(U256::MAX)).unwrap()));
		let client = client(provider);

		let params = OfferParams::new(BROKER, TOKEN, U256::from(1u64));
		assert!(matches!(
			client.create_offer(&account(), &params).await,
			Err(CoreError::Order(OrderError::AmountOverflow { .. }))
		));
	}

	#[tokio::test]
	async fn test_collection_offer_encodes_absent_token_id() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		provider
			.expect_call()
			.returning(|_, _, _| Ok(vec![Felt::ZERO, Felt::ZERO]));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let collection = OfferParams::new(BROKER, TOKEN, U256::from(5u64)).with_wait(false);
		let token_zero = collection.clone().with_token_id(U256::ZERO);

		let collection_result = client.create_offer(&account, &collection).await.unwrap();
		let token_zero_result = client.create_offer(&account, &token_zero).await.unwrap();

		let executed = executed.lock().unwrap();
		let collection_order = decoded_order(&executed[0][1]);
		let token_zero_order = decoded_order(&executed[1][1]);

		assert_eq!(collection_order.route, RouteType::Erc20ToErc721);
		assert_eq!(collection_order.token_id, None);
		assert_eq!(executed[0][1].calldata[7], Felt::ONE);

		assert_eq!(token_zero_order.token_id, Some(CairoU256::from(0u64)));
		assert_eq!(&executed[1][1].calldata[7..10], &[
			Felt::ZERO,
			Felt::ZERO,
			Felt::ZERO
		]);

		assert_ne!(collection_result.order_hash, token_zero_result.order_hash);
	}

	#[tokio::test]
	async fn test_listing_then_cancel() {
		let executed: Arc<Mutex<Vec<Vec<ContractCall>>>> = Arc::new(Mutex::new(Vec::new()));

		// Executor state derived from the calls the account has executed.
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		provider
			.expect_wait_for_transaction()
			.returning(|hash, _| Ok(included(hash)));
		let chain = executed.clone();
		provider
			.expect_call()
			.withf(|contract, entrypoint, _| {
				*contract == EXECUTOR && entrypoint == "get_order_status"
			})
			.returning(move |_, _, calldata| {
				let order_hash = calldata[0];
				let cancel = selector("cancel_order");
				let cancelled = chain.lock().unwrap().iter().flatten().any(|call| {
					call.selector == cancel && call.calldata.first() == Some(&order_hash)
				});
				let status = if cancelled { 3u64 } else { 0 };
				Ok(vec![Felt::from(status)])
			});
		let client = client(provider);
		let account = recording_account(executed.clone());

		let listing = ListingParams::new(BROKER, TOKEN, U256::from(7u64), U256::from(1_000u64));
		let created = client.create_listing(&account, &listing).await.unwrap();
		assert_eq!(
			client.get_order_status(created.order_hash).await.unwrap(),
			OrderStatus::Open
		);

		let cancel = CancelParams::new(created.order_hash, TOKEN, Some(U256::from(7u64)));
		client.cancel_order(&account, &cancel).await.unwrap();

		assert_eq!(
			client.get_order_status(created.order_hash).await.unwrap(),
			OrderStatus::CancelledUser
		);

		let executed = executed.lock().unwrap();
		let info = &executed[1][0];
		assert_eq!(info.to, EXECUTOR);
		assert_eq!(info.calldata[1], OFFERER);
		assert_eq!(info.calldata[2], CHAIN_ID);
	}

	#[tokio::test]
	async fn test_create_auction() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let params = AuctionParams::new(
			BROKER,
			TOKEN,
			U256::from(3u64),
			U256::from(100u64),
			U256::from(400u64),
		)
		.with_wait(false);
		client.create_auction(&account, &params).await.unwrap();

		let executed = executed.lock().unwrap();
		assert_eq!(executed[0][0].selector, selector("approve"));
		let order = decoded_order(&executed[0][1]);
		assert_eq!(order.route, RouteType::Erc721ToErc20);
		assert_eq!(order.end_amount, CairoU256::from(400u64));
	}

	#[tokio::test]
	async fn test_auction_end_amount_rejected_before_network() {
		let client = client(MockProviderInterface::new());
		let params = AuctionParams::new(
			BROKER,
			TOKEN,
			U256::from(3u64),
			U256::from(100u64),
			U256::from(99u64),
		);
		assert!(matches!(
			client.create_auction(&account(), &params).await,
			Err(CoreError::Order(OrderError::InvalidEndAmount { .. }))
		));
	}

	#[tokio::test]
	async fn test_fulfill_listing_tops_up_allowance() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		provider
			.expect_call()
			.withf(|_, entrypoint, _| entrypoint == "allowance")
			.returning(|_, _, _| Ok(vec![Felt::from(40u64), Felt::ZERO]));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let params = FulfillListingParams::new(
			Felt::from(0xabcu64),
			TOKEN,
			U256::from(7u64),
			U256::from(60u64),
			BROKER,
		)
		.with_wait(false);
		client.fulfill_listing(&account, &params).await.unwrap();

		let executed = executed.lock().unwrap();
		let approve = &executed[0][0];
		assert_eq!(approve.to, ETH_ADDRESS);
		assert_eq!(
			from_felts::<CairoU256>(&approve.calldata[1..]).unwrap(),
			CairoU256::from(100u64)
		);

		let fulfill = &executed[0][1];
		assert_eq!(fulfill.selector, selector("fulfill_order"));
		// order_hash, related_order_hash = None, fulfiller
		assert_eq!(&fulfill.calldata[..3], &[Felt::from(0xabcu64), Felt::ONE, OFFERER]);
	}

	#[tokio::test]
	async fn test_fulfill_offer_approves_token() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let params =
			FulfillOfferParams::new(Felt::from(0xabcu64), TOKEN, U256::from(7u64), BROKER)
				.with_wait(false);
		client.fulfill_offer(&account, &params).await.unwrap();

		let executed = executed.lock().unwrap();
		assert_eq!(executed[0].len(), 2);
		assert_eq!(executed[0][0].to, TOKEN);
		assert_eq!(executed[0][1].selector, selector("fulfill_order"));
	}

	#[tokio::test]
	async fn test_fulfill_auction_links_offer() {
		let mut provider = MockProviderInterface::new();
		provider.expect_chain_id().returning(|| Ok(CHAIN_ID));
		let client = client(provider);

		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let params = FulfillAuctionParams::new(
			Felt::from(0xaaau64),
			Felt::from(0xbbbu64),
			TOKEN,
			U256::from(7u64),
			BROKER,
		)
		.with_wait(false);
		client.fulfill_auction(&account, &params).await.unwrap();

		let executed = executed.lock().unwrap();
		assert_eq!(executed[0].len(), 1);
		assert_eq!(&executed[0][0].calldata[..3], &[
			Felt::from(0xaaau64),
			Felt::ZERO,
			Felt::from(0xbbbu64)
		]);
	}

	#[tokio::test]
	async fn test_standalone_approvals() {
		let client = client(MockProviderInterface::new());
		let executed = Arc::new(Mutex::new(Vec::new()));
		let account = recording_account(executed.clone());

		let erc20 = ApproveErc20Params::new(U256::from(10u64)).with_wait(false);
		client.approve_erc20(&account, &erc20).await.unwrap();

		let erc721 = ApproveErc721Params::new(TOKEN, U256::from(2u64)).with_wait(false);
		client.approve_erc721(&account, &erc721).await.unwrap();

		let executed = executed.lock().unwrap();
		assert_eq!(executed[0][0].to, ETH_ADDRESS);
		assert_eq!(executed[0][0].calldata, vec![EXECUTOR, Felt::from(10u64), Felt::ZERO]);
		assert_eq!(executed[1][0].to, TOKEN);
		assert_eq!(executed[1][0].calldata, vec![EXECUTOR, Felt::from(2u64), Felt::ZERO]);
	}
}
