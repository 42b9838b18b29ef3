//! Loading of the marketplace client configuration.
//!
//! A configuration is a TOML document naming the network, the executor
//! contract and optionally the signing account. `${VAR}` references are
//! expanded from the environment before parsing, and `ARK_*` variables
//! override the parsed values.

use ark_types::{parse_felt, ConfigSchema, Felt, Field, FieldKind, Schema, ValidationError};
use regex::{Captures, Regex};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod types;

pub use types::{ArkConfig, Network, ETH_ADDRESS};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Configuration file not found: {0}")]
	NotFound(String),

	#[error("Malformed configuration: {0}")]
	Parse(String),

	#[error("Invalid configuration: {0}")]
	Invalid(String),

	#[error("Referenced environment variable is not set: {0}")]
	MissingEnvVar(String),

	#[error("Failed to read configuration: {0}")]
	Io(#[from] std::io::Error),
}

/// Builder that reads an [`ArkConfig`] from disk and the environment.
pub struct ConfigLoader {
	path: Option<PathBuf>,
	env_prefix: String,
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			path: None,
			env_prefix: "ARK_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.path = Some(path.as_ref().to_path_buf());
		self
	}

	/// Prefix of the override variables, `ARK_` unless set.
	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<ArkConfig, ConfigError> {
		let path = self
			.path
			.as_deref()
			.ok_or_else(|| ConfigError::NotFound("no configuration file given".to_string()))?;

		let content = tokio::fs::read_to_string(path).await.map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				ConfigError::NotFound(path.display().to_string())
			} else {
				ConfigError::Io(e)
			}
		})?;

		let mut config = parse_config(&substitute_env_vars(&content)?)?;
		self.apply_overrides(&mut config)?;
		validate_config(&config)?;

		tracing::debug!(
			path = %path.display(),
			network = %config.network,
			rpc_url = config.rpc_url(),
			"Configuration loaded"
		);

		Ok(config)
	}

	fn apply_overrides(&self, config: &mut ArkConfig) -> Result<(), ConfigError> {
		let var = |name: &str| env::var(format!("{}{}", self.env_prefix, name)).ok();

		if let Some(rpc_url) = var("RPC_URL") {
			config.rpc_url = Some(rpc_url);
		}
		if let Some(executor) = var("EXECUTOR_ADDRESS") {
			config.executor_address = parse_env_felt("executor address", &executor)?;
		}
		if let Some(currency) = var("CURRENCY_ADDRESS") {
			config.currency_address = Some(parse_env_felt("currency address", &currency)?);
		}

		Ok(())
	}
}

/// Schema of the top-level configuration document.
pub struct ArkConfigSchema;

impl ConfigSchema for ArkConfigSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let schema = Schema::new(vec![
			Field::optional("network", FieldKind::Text).with_check(|value| {
				match value.as_str() {
					Some("mainnet" | "sepolia" | "dev") => Ok(()),
					other => Err(format!(
						"unknown network '{}', expected mainnet, sepolia or dev",
						other.unwrap_or_default()
					)),
				}
			}),
			Field::optional("rpc_url", FieldKind::Url),
			Field::required("executor_address", FieldKind::Felt),
			Field::optional("currency_address", FieldKind::Felt),
		]);

		schema.validate(config)
	}
}

/// Parses a configuration document without touching the environment.
pub fn parse_config(content: &str) -> Result<ArkConfig, ConfigError> {
	let document: toml::Table =
		toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
	let document = toml::Value::Table(document);

	ArkConfigSchema
		.validate(&document)
		.map_err(|e| ConfigError::Invalid(e.to_string()))?;

	document
		.try_into()
		.map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))
}

/// Expands every `${VAR_NAME}` from the environment.
///
/// Fails on the first variable that is not set.
pub fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
	let pattern = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::Parse(e.to_string()))?;

	let mut missing = None;
	let expanded = pattern.replace_all(content, |caps: &Captures| {
		env::var(&caps[1]).unwrap_or_else(|_| {
			missing.get_or_insert_with(|| caps[1].to_string());
			String::new()
		})
	});

	match missing {
		Some(name) => Err(ConfigError::MissingEnvVar(name)),
		None => Ok(expanded.into_owned()),
	}
}

pub fn validate_config(config: &ArkConfig) -> Result<(), ConfigError> {
	let rpc_url = config.rpc_url();
	if !(rpc_url.starts_with("http://") || rpc_url.starts_with("https://")) {
		return Err(ConfigError::Invalid(format!(
			"RPC URL must use http or https: {}",
			rpc_url
		)));
	}

	if config.executor_address == Felt::ZERO {
		return Err(ConfigError::Invalid(
			"Executor address must not be zero".to_string(),
		));
	}

	if config.currency_address() == Felt::ZERO {
		return Err(ConfigError::Invalid(
			"Currency address must not be zero".to_string(),
		));
	}

	if let Some(account) = &config.account {
		if !account.is_table() {
			return Err(ConfigError::Invalid(
				"Account configuration must be a table".to_string(),
			));
		}
	}

	Ok(())
}

fn parse_env_felt(name: &str, value: &str) -> Result<Felt, ConfigError> {
	parse_felt(value).map_err(|e| ConfigError::Invalid(format!("Invalid {}: {}", name, e)))
}
