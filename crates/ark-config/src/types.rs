//! Configuration types for the marketplace client.

use ark_types::Felt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ETH token contract, deployed at the same address on every public network.
pub const ETH_ADDRESS: Felt =
	Felt::from_hex_unchecked("0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7");

/// Starknet network the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	Mainnet,
	Sepolia,
	/// Local devnet.
	#[default]
	Dev,
}

impl Network {
	/// RPC endpoint used when the configuration does not name one.
	pub fn default_rpc_url(&self) -> &'static str {
		match self {
			Network::Mainnet => "https://free-rpc.nethermind.io/mainnet-juno",
			Network::Sepolia => "https://free-rpc.nethermind.io/sepolia-juno",
			Network::Dev => "http://127.0.0.1:5050",
		}
	}

	pub fn default_currency_address(&self) -> Felt {
		ETH_ADDRESS
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Network::Mainnet => write!(f, "mainnet"),
			Network::Sepolia => write!(f, "sepolia"),
			Network::Dev => write!(f, "dev"),
		}
	}
}

/// Complete client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArkConfig {
	/// Network preset supplying the defaults below
	#[serde(default)]
	pub network: Network,
	/// RPC endpoint URL, overrides the preset
	pub rpc_url: Option<String>,
	/// Marketplace executor contract
	pub executor_address: Felt,
	/// Default currency for orders, overrides the preset
	pub currency_address: Option<Felt>,
	/// Signing account, validated by the account implementation
	pub account: Option<toml::Value>,
}

impl ArkConfig {
	pub fn new(network: Network, executor_address: Felt) -> Self {
		Self {
			network,
			rpc_url: None,
			executor_address,
			currency_address: None,
			account: None,
		}
	}

	pub fn rpc_url(&self) -> &str {
		self.rpc_url
			.as_deref()
			.unwrap_or_else(|| self.network.default_rpc_url())
	}

	pub fn currency_address(&self) -> Felt {
		self.currency_address
			.unwrap_or_else(|| self.network.default_currency_address())
	}
}
