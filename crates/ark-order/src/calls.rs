//! Contract calls submitted by the marketplace operations.

use ark_types::{to_cairo_u256, CancelInfo, ContractCall, Encode, Felt, FulfillInfo, OrderV1, U256};
use starknet::core::utils::get_selector_from_name;

use crate::OrderError;

pub const CREATE_ORDER: &str = "create_order";
pub const CANCEL_ORDER: &str = "cancel_order";
pub const FULFILL_ORDER: &str = "fulfill_order";
pub const GET_ORDER: &str = "get_order";
pub const GET_ORDER_STATUS: &str = "get_order_status";
pub const GET_ORDER_TYPE: &str = "get_order_type";
pub const APPROVE: &str = "approve";
pub const ALLOWANCE: &str = "allowance";
pub const OWNER_OF: &str = "owner_of";

/// Selector of an entrypoint, `sn_keccak` of its name.
pub fn selector(entrypoint: &str) -> Result<Felt, OrderError> {
	get_selector_from_name(entrypoint).map_err(|e| OrderError::Selector(e.to_string()))
}

/// Serializes `value` as calldata.
pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Vec<Felt>, OrderError> {
	ark_types::to_calldata(value).map_err(|e| OrderError::Encode(e.to_string()))
}

fn contract_call(
	to: Felt,
	entrypoint: &str,
	calldata: Vec<Felt>,
) -> Result<ContractCall, OrderError> {
	Ok(ContractCall {
		to,
		selector: selector(entrypoint)?,
		calldata,
	})
}

/// ERC-20 `approve(spender, amount)`.
pub fn approve_erc20(
	currency_address: Felt,
	spender: Felt,
	amount: U256,
) -> Result<ContractCall, OrderError> {
	let mut calldata = vec![spender];
	calldata.extend(encode(&to_cairo_u256(amount))?);
	contract_call(currency_address, APPROVE, calldata)
}

/// ERC-721 `approve(to, token_id)`.
pub fn approve_erc721(
	token_address: Felt,
	to: Felt,
	token_id: U256,
) -> Result<ContractCall, OrderError> {
	let mut calldata = vec![to];
	calldata.extend(encode(&to_cairo_u256(token_id))?);
	contract_call(token_address, APPROVE, calldata)
}

/// Executor `create_order(order)`.
pub fn create_order(executor: Felt, order: &OrderV1) -> Result<ContractCall, OrderError> {
	contract_call(executor, CREATE_ORDER, encode(order)?)
}

/// Executor `cancel_order(cancel_info)`.
pub fn cancel_order(executor: Felt, info: &CancelInfo) -> Result<ContractCall, OrderError> {
	contract_call(executor, CANCEL_ORDER, encode(info)?)
}

/// Executor `fulfill_order(fulfill_info)`.
pub fn fulfill_order(executor: Felt, info: &FulfillInfo) -> Result<ContractCall, OrderError> {
	contract_call(executor, FULFILL_ORDER, encode(info)?)
}
