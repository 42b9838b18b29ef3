//! Formatting helpers shared across crates.

use starknet::core::types::Felt;

/// Truncates a hex hash for log output, keeping the prefix and the last
/// four characters.
pub fn truncate_hash(hash: &str) -> String {
	if hash.len() <= 12 {
		return hash.to_string();
	}
	format!("{}...{}", &hash[..6], &hash[hash.len() - 4..])
}

/// Formats a felt as `0x`-prefixed hex.
pub fn felt_hex(felt: &Felt) -> String {
	felt.to_hex_string()
}
