//! Cairo calldata for marketplace values.
//!
//! Records derive the `starknet` codec traits. This module bridges the SDK's
//! `U256` amounts to the Cairo `u256` the codec understands, and carries the
//! serde adapters for records holding Cairo integers.

use alloy_primitives::U256;
use starknet::core::codec::{self, Decode, Encode};
use starknet::core::types::{Felt, U256 as CairoU256};
use thiserror::Error;

/// Contract data that could not be encoded or decoded.
#[derive(Debug, Error)]
#[error("Cairo codec error: {0}")]
pub struct CodecError(#[from] codec::Error);

/// Serializes `value` into a fresh calldata vector.
pub fn to_calldata<T: Encode + ?Sized>(value: &T) -> Result<Vec<Felt>, CodecError> {
	let mut calldata = Vec::new();
	value.encode(&mut calldata)?;
	Ok(calldata)
}

/// Decodes a value from the start of `felts`, ignoring trailing elements.
pub fn from_felts<'a, T: Decode<'a>>(felts: &'a [Felt]) -> Result<T, CodecError> {
	Ok(T::decode(felts)?)
}

pub fn to_cairo_u256(value: U256) -> CairoU256 {
	let limbs = value.as_limbs();
	let low = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
	let high = u128::from(limbs[2]) | (u128::from(limbs[3]) << 64);
	CairoU256::from_words(low, high)
}

pub fn from_cairo_u256(value: CairoU256) -> U256 {
	(U256::from(value.high()) << 128) | U256::from(value.low())
}

/// Serde adapter writing a Cairo `u256` as a decimal string.
///
/// Both decimal and `0x`-prefixed hex are accepted when reading.
pub mod cairo_u256_serde {
	use super::{from_cairo_u256, to_cairo_u256, CairoU256};
	use alloy_primitives::U256;
	use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

	pub fn serialize<S>(value: &CairoU256, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		from_cairo_u256(*value).to_string().serialize(serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<CairoU256, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		s.parse::<U256>().map(to_cairo_u256).map_err(D::Error::custom)
	}

	pub mod option {
		use super::*;

		pub fn serialize<S>(value: &Option<CairoU256>, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			value
				.map(|v| from_cairo_u256(v).to_string())
				.serialize(serializer)
		}

		pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<CairoU256>, D::Error>
		where
			D: Deserializer<'de>,
		{
			Option::<String>::deserialize(deserializer)?
				.map(|s| s.parse::<U256>().map(to_cairo_u256).map_err(D::Error::custom))
				.transpose()
		}
	}
}
