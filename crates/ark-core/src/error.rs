// ark-core/src/error.rs

use ark_account::AccountError;
use ark_order::OrderError;
use ark_provider::ProviderError;
use ark_types::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
	#[error("Configuration error: {0}")]
	Configuration(String),

	#[error(transparent)]
	Order(#[from] OrderError),

	#[error("Provider error: {0}")]
	Provider(#[from] ProviderError),

	#[error("Account error: {0}")]
	Account(#[from] AccountError),

	#[error("Failed to decode contract response: {0}")]
	Decode(#[from] CodecError),
}
