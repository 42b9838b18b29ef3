//! Shared types for the Ark marketplace SDK.
//!
//! Order records, their Cairo serialization, transaction types and the
//! configuration validation helpers used by the other crates.

pub mod codec;
pub mod order;
pub mod transaction;
pub mod utils;
pub mod validation;

pub use alloy_primitives::U256;
pub use codec::*;
pub use order::*;
pub use starknet::core::codec::{Decode, Encode};
pub use starknet::core::types::{Felt, U256 as CairoU256};
pub use transaction::*;
pub use utils::*;
pub use validation::*;
