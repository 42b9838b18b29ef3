//! Read-only queries against the executor and token contracts.

use ark_order::calls::{ALLOWANCE, GET_ORDER, GET_ORDER_STATUS, GET_ORDER_TYPE, OWNER_OF};
use ark_order::calls::encode;
use ark_types::{
	from_cairo_u256, from_felts, to_cairo_u256, CairoU256, Felt, OrderStatus, OrderType, OrderV1,
	U256,
};

use crate::{CoreError, MarketplaceClient};

impl MarketplaceClient {
	/// Status of the order stored under `order_hash`.
	pub async fn get_order_status(&self, order_hash: Felt) -> Result<OrderStatus, CoreError> {
		let response = self
			.provider
			.call(self.executor(), GET_ORDER_STATUS, vec![order_hash])
			.await?;
		let status: OrderStatus = from_felts(&response)?;

		tracing::debug!(order_hash = %order_hash.to_hex_string(), %status, "Fetched order status");
		Ok(status)
	}

	pub async fn get_order_type(&self, order_hash: Felt) -> Result<OrderType, CoreError> {
		let response = self
			.provider
			.call(self.executor(), GET_ORDER_TYPE, vec![order_hash])
			.await?;
		Ok(from_felts(&response)?)
	}

	/// Full order record stored under `order_hash`.
	pub async fn get_order(&self, order_hash: Felt) -> Result<OrderV1, CoreError> {
		let response = self
			.provider
			.call(self.executor(), GET_ORDER, vec![order_hash])
			.await?;
		Ok(from_felts(&response)?)
	}

	/// Amount of `currency_address` the executor may spend on behalf of
	/// `owner`.
	pub async fn get_allowance(
		&self,
		currency_address: Felt,
		owner: Felt,
	) -> Result<U256, CoreError> {
		let response = self
			.provider
			.call(currency_address, ALLOWANCE, vec![owner, self.executor()])
			.await?;
		let allowance = from_cairo_u256(from_felts::<CairoU256>(&response)?);

		tracing::debug!(
			currency = %currency_address.to_hex_string(),
			owner = %owner.to_hex_string(),
			%allowance,
			"Fetched allowance"
		);
		Ok(allowance)
	}

	/// Current owner of an ERC-721 token.
	pub async fn get_nft_owner(&self, token_address: Felt, token_id: U256) -> Result<Felt, CoreError> {
		let response = self
			.provider
			.call(token_address, OWNER_OF, encode(&to_cairo_u256(token_id))?)
			.await?;
		Ok(from_felts(&response)?)
	}
}
