//! Order and token hashing.
//!
//! The executor identifies an order by the Poseidon hash of its serialized
//! form. Computing it locally lets callers know the hash before the
//! transaction carrying the order is accepted.

use ark_types::{Encode, Felt, OrderV1};
use starknet_crypto::{poseidon_hash_many, PoseidonHasher};

use crate::OrderError;

/// Computes the hash the executor stores the order under.
///
/// The serialized order is streamed into the hasher, which matches
/// `poseidon_hash_many` over the order's calldata.
pub fn compute_order_hash(order: &OrderV1) -> Result<Felt, OrderError> {
	let mut hasher = PoseidonHasher::new();
	order
		.encode(&mut hasher)
		.map_err(|e| OrderError::Encode(e.to_string()))?;
	Ok(hasher.finalize())
}

/// Computes the hash of the token an order targets.
///
/// Collection offers target no single token and have no token hash.
pub fn compute_token_hash(order: &OrderV1) -> Result<Felt, OrderError> {
	let token_id = order.token_id.ok_or(OrderError::MissingTokenId)?;

	Ok(poseidon_hash_many(&[
		Felt::from(token_id.low()),
		Felt::from(token_id.high()),
		order.token_address,
		order.token_chain_id,
	]))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::calls::encode;
	use ark_types::{CairoU256, RouteType};

	fn sample_order() -> OrderV1 {
		OrderV1 {
			route: RouteType::Erc721ToErc20,
			currency_address: Felt::from_hex_unchecked(
				"0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
			),
			currency_chain_id: Felt::from_hex_unchecked("0x534e5f5345504f4c4941"),
			salt: Felt::ONE,
			offerer: Felt::from(0xa11ceu64),
			token_chain_id: Felt::from_hex_unchecked("0x534e5f5345504f4c4941"),
			token_address: Felt::from(0x721u64),
			token_id: Some(CairoU256::from(1u64)),
			quantity: CairoU256::from(1u64),
			start_amount: CairoU256::from(1_000_000_000_000_000u64),
			end_amount: CairoU256::from(0u64),
			start_date: 1_700_000_000,
			end_date: 1_700_086_400,
			broker_id: Felt::from(0xb0u64),
			additional_data: Vec::new(),
		}
	}

	#[test]
	fn test_order_hash_is_deterministic() {
		let order = sample_order();
		assert_eq!(
			compute_order_hash(&order).unwrap(),
			compute_order_hash(&order.clone()).unwrap()
		);
	}

	#[test]
	fn test_order_hash_matches_serialized_form() {
		let order = sample_order();
		assert_eq!(
			compute_order_hash(&order).unwrap(),
			poseidon_hash_many(&encode(&order).unwrap())
		);
	}

	#[test]
	fn test_order_hash_depends_on_every_field() {
		let base = compute_order_hash(&sample_order()).unwrap();

		let mut order = sample_order();
		order.end_date += 1;
		assert_ne!(compute_order_hash(&order).unwrap(), base);

		let mut order = sample_order();
		order.start_amount = CairoU256::from(1_000_000_000_000_001u64);
		assert_ne!(compute_order_hash(&order).unwrap(), base);

		let mut order = sample_order();
		order.route = RouteType::Erc20ToErc721;
		assert_ne!(compute_order_hash(&order).unwrap(), base);

		let mut order = sample_order();
		order.additional_data.push(Felt::ZERO);
		assert_ne!(compute_order_hash(&order).unwrap(), base);
	}

	#[test]
	fn test_collection_offer_differs_from_token_zero() {
		let mut absent = sample_order();
		absent.token_id = None;
		let mut zero = sample_order();
		zero.token_id = Some(CairoU256::from(0u64));

		assert_ne!(
			compute_order_hash(&absent).unwrap(),
			compute_order_hash(&zero).unwrap()
		);
	}

	#[test]
	fn test_token_hash() {
		let order = sample_order();
		let expected = poseidon_hash_many(&[
			Felt::ONE,
			Felt::ZERO,
			order.token_address,
			order.token_chain_id,
		]);
		assert_eq!(compute_token_hash(&order), Ok(expected));

		let mut offer = sample_order();
		offer.token_id = None;
		assert_eq!(compute_token_hash(&offer), Err(OrderError::MissingTokenId));
	}
}
