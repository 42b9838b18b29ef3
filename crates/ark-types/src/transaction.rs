//! Transaction types for the marketplace SDK.
//!
//! This module defines the contract calls an account executes as a multicall,
//! along with the hashes and receipts returned once they are submitted.

use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use std::fmt;

/// A single contract invocation inside a multicall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
	/// Contract being invoked.
	pub to: Felt,
	/// Entrypoint selector (`sn_keccak` of the entrypoint name).
	pub selector: Felt,
	/// Serialized arguments.
	pub calldata: Vec<Felt>,
}

/// Starknet transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionHash(pub Felt);

impl fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.to_hex_string())
	}
}

impl From<Felt> for TransactionHash {
	fn from(felt: Felt) -> Self {
		TransactionHash(felt)
	}
}

/// Transaction receipt containing execution details.
///
/// Provides information about a transaction after it has been included in a block,
/// including its success status and block number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included, if not pending.
	pub block_number: Option<u64>,
	/// Whether the transaction executed successfully.
	pub success: bool,
	/// Revert reason reported by the node for failed executions.
	pub revert_reason: Option<String>,
}
