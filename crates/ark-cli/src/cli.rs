//! Command-line interface definitions.

use ark_types::{parse_felt, Felt, U256};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ark")]
#[command(about = "Ark marketplace client for Starknet", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file
	#[arg(short, long, env = "ARK_CONFIG", default_value = "ark.toml")]
	pub config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, env = "ARK_LOG_LEVEL", default_value = "info")]
	pub log_level: String,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Validate the configuration file
	Validate,

	/// Print the status of an order
	OrderStatus {
		#[arg(value_parser = parse_felt)]
		order_hash: Felt,
	},

	/// Compute the hash of an order read from a JSON file
	OrderHash {
		#[arg(value_name = "FILE")]
		order: PathBuf,
	},

	/// List a token at a fixed price
	CreateListing {
		#[command(flatten)]
		token: TokenArgs,

		#[arg(long, value_parser = parse_u256)]
		token_id: U256,

		#[command(flatten)]
		order: OrderArgs,
	},

	/// Offer currency for a token, or for a whole collection without --token-id
	CreateOffer {
		#[command(flatten)]
		token: TokenArgs,

		#[arg(long, value_parser = parse_u256)]
		token_id: Option<U256>,

		#[command(flatten)]
		order: OrderArgs,
	},

	/// Cancel an order placed by the configured account
	CancelOrder {
		#[arg(long, value_parser = parse_felt)]
		order_hash: Felt,

		#[command(flatten)]
		token: TokenArgs,

		#[arg(long, value_parser = parse_u256)]
		token_id: Option<U256>,

		#[arg(long)]
		no_wait: bool,
	},
}

#[derive(ClapArgs, Debug)]
pub struct TokenArgs {
	/// ERC-721 contract address
	#[arg(long, value_parser = parse_felt)]
	pub token_address: Felt,
}

#[derive(ClapArgs, Debug)]
pub struct OrderArgs {
	/// Price in the smallest currency unit
	#[arg(long, value_parser = parse_u256)]
	pub amount: U256,

	/// Broker receiving the marketplace fees
	#[arg(long, value_parser = parse_felt)]
	pub broker: Felt,

	/// Currency contract, defaults to the configured one
	#[arg(long, value_parser = parse_felt)]
	pub currency: Option<Felt>,

	/// Unix timestamp, defaults to now
	#[arg(long)]
	pub start_date: Option<u64>,

	/// Unix timestamp, defaults to one day from now
	#[arg(long)]
	pub end_date: Option<u64>,

	/// Return once the transaction is submitted
	#[arg(long)]
	pub no_wait: bool,
}

pub fn parse_u256(value: &str) -> Result<U256, String> {
	value
		.parse::<U256>()
		.map_err(|e| format!("invalid 256-bit integer {}: {}", value, e))
}
