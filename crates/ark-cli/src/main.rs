use anyhow::{Context, Result};
use ark_config::{ArkConfig, ConfigLoader};
use ark_core::MarketplaceClient;
use ark_order::{compute_order_hash, CancelParams, ListingParams, OfferParams};
use ark_types::{felt_hex, Felt, OrderStatus, OrderV1, U256};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{Args, Command, OrderArgs};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	setup_tracing(&args.log_level)?;

	match args.command {
		Command::Validate => validate_config(&args.config).await,
		Command::OrderHash { order } => order_hash(&order).await,
		Command::OrderStatus { order_hash } => {
			let client = connect(&args.config).await?;
			let status = client
				.get_order_status(order_hash)
				.await
				.context("Failed to fetch order status")?;
			println!("{}", status_line(status));
			Ok(())
		}
		Command::CreateListing {
			token,
			token_id,
			order,
		} => {
			let params = listing_params(token.token_address, token_id, &order);
			let client = connect(&args.config).await?;
			let account = client
				.account_from_config()
				.await
				.context("Failed to load account")?;

			let result = client
				.create_listing(account.as_ref(), &params)
				.await
				.context("Failed to create listing")?;
			println!("order_hash: {}", felt_hex(&result.order_hash));
			println!("transaction_hash: {}", result.transaction_hash);
			Ok(())
		}
		Command::CreateOffer {
			token,
			token_id,
			order,
		} => {
			let params = offer_params(token.token_address, token_id, &order);
			let client = connect(&args.config).await?;
			let account = client
				.account_from_config()
				.await
				.context("Failed to load account")?;

			let result = client
				.create_offer(account.as_ref(), &params)
				.await
				.context("Failed to create offer")?;
			println!("order_hash: {}", felt_hex(&result.order_hash));
			println!("transaction_hash: {}", result.transaction_hash);
			Ok(())
		}
		Command::CancelOrder {
			order_hash,
			token,
			token_id,
			no_wait,
		} => {
			let params =
				CancelParams::new(order_hash, token.token_address, token_id).with_wait(!no_wait);
			let client = connect(&args.config).await?;
			let account = client
				.account_from_config()
				.await
				.context("Failed to load account")?;

			let transaction_hash = client
				.cancel_order(account.as_ref(), &params)
				.await
				.context("Failed to cancel order")?;
			println!("transaction_hash: {}", transaction_hash);
			Ok(())
		}
	}
}

async fn load_config(path: &Path) -> Result<ArkConfig> {
	info!("Loading configuration from: {:?}", path);

	ConfigLoader::new()
		.with_file(path)
		.load()
		.await
		.context("Failed to load configuration")
}

async fn connect(path: &Path) -> Result<MarketplaceClient> {
	let config = load_config(path).await?;
	MarketplaceClient::connect(config).context("Failed to connect to RPC endpoint")
}

async fn validate_config(path: &Path) -> Result<()> {
	let config = load_config(path).await?;

	info!("Configuration is valid");
	info!("Network: {}", config.network);
	info!("RPC URL: {}", config.rpc_url());
	info!("Executor: {}", felt_hex(&config.executor_address));
	info!("Currency: {}", felt_hex(&config.currency_address()));
	if config.account.is_some() {
		info!("Account configured");
	}

	Ok(())
}

async fn order_hash(path: &Path) -> Result<()> {
	let content = tokio::fs::read_to_string(path)
		.await
		.with_context(|| format!("Failed to read order file: {:?}", path))?;
	let order: OrderV1 = serde_json::from_str(&content).context("Failed to parse order")?;

	let hash = compute_order_hash(&order).context("Failed to hash order")?;
	println!("{}", felt_hex(&hash));
	Ok(())
}

/// Status as printed by `order-status`; statuses no transition leaves are
/// marked final.
fn status_line(status: OrderStatus) -> String {
	if status.is_terminal() {
		format!("{} (final)", status)
	} else {
		status.to_string()
	}
}

fn listing_params(token_address: Felt, token_id: U256, order: &OrderArgs) -> ListingParams {
	let mut params = ListingParams::new(order.broker, token_address, token_id, order.amount)
		.with_dates(order.start_date, order.end_date)
		.with_wait(!order.no_wait);
	params.currency_address = order.currency;
	params
}

fn offer_params(token_address: Felt, token_id: Option<U256>, order: &OrderArgs) -> OfferParams {
	let mut params = OfferParams::new(order.broker, token_address, order.amount)
		.with_dates(order.start_date, order.end_date)
		.with_wait(!order.no_wait);
	params.token_id = token_id;
	params.currency_address = order.currency;
	params
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}
