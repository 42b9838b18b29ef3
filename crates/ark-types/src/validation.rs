//! Validation of raw TOML configuration tables.
//!
//! Configuration documents and the `[account]` table are checked against a
//! [`Schema`] before anything is built from them, so a bad key is reported by
//! name.

use starknet::core::types::Felt;
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Expected a table, got {0}")]
	NotATable(String),
	#[error("Missing required field: {0}")]
	MissingField(String),
	#[error("Invalid value for field '{field}': {message}")]
	InvalidValue { field: String, message: String },
	#[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
	TypeMismatch {
		field: String,
		expected: &'static str,
		actual: &'static str,
	},
}

/// Kind of value a configuration key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	Text,
	/// `0x`-prefixed field element: addresses, keys, chain ids.
	Felt,
	/// `http://` or `https://` endpoint.
	Url,
}

impl FieldKind {
	fn expected(&self) -> &'static str {
		match self {
			FieldKind::Text | FieldKind::Url => "string",
			FieldKind::Felt => "hex string",
		}
	}

	/// Checks `value` against the kind, returning a message on failure.
	/// `None` means the TOML type itself is wrong.
	fn check(&self, value: &toml::Value) -> Option<Result<(), String>> {
		let result = match self {
			FieldKind::Text => {
				value.as_str()?;
				Ok(())
			}
			FieldKind::Felt => parse_felt(value.as_str()?).map(|_| ()),
			FieldKind::Url => {
				let url = value.as_str()?;
				if url.starts_with("http://") || url.starts_with("https://") {
					Ok(())
				} else {
					Err(format!("'{}' is not an http(s) URL", url))
				}
			}
		};
		Some(result)
	}
}

type Check = Box<dyn Fn(&toml::Value) -> Result<(), String> + Send + Sync>;

/// A configuration key.
pub struct Field {
	name: &'static str,
	kind: FieldKind,
	required: bool,
	check: Option<Check>,
}

impl Field {
	pub fn required(name: &'static str, kind: FieldKind) -> Self {
		Self {
			name,
			kind,
			required: true,
			check: None,
		}
	}

	pub fn optional(name: &'static str, kind: FieldKind) -> Self {
		Self {
			required: false,
			..Self::required(name, kind)
		}
	}

	/// Adds a check run once the value has the right kind.
	pub fn with_check<F>(mut self, check: F) -> Self
	where
		F: Fn(&toml::Value) -> Result<(), String> + Send + Sync + 'static,
	{
		self.check = Some(Box::new(check));
		self
	}

	fn validate(&self, value: &toml::Value) -> Result<(), ValidationError> {
		let invalid = |message| ValidationError::InvalidValue {
			field: self.name.to_string(),
			message,
		};

		match self.kind.check(value) {
			None => Err(ValidationError::TypeMismatch {
				field: self.name.to_string(),
				expected: self.kind.expected(),
				actual: value.type_str(),
			}),
			Some(Err(message)) => Err(invalid(message)),
			Some(Ok(())) => match &self.check {
				Some(check) => check(value).map_err(invalid),
				None => Ok(()),
			},
		}
	}
}

impl std::fmt::Debug for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("required", &self.required)
			.finish()
	}
}

/// Set of keys expected in a configuration table.
#[derive(Debug)]
pub struct Schema {
	fields: Vec<Field>,
}

impl Schema {
	pub fn new(fields: Vec<Field>) -> Self {
		Self { fields }
	}

	/// Validates every declared key of `config`. Unknown keys are ignored.
	pub fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let table = config
			.as_table()
			.ok_or_else(|| ValidationError::NotATable(config.type_str().to_string()))?;

		for field in &self.fields {
			match table.get(field.name) {
				Some(value) => field.validate(value)?,
				None if field.required => {
					return Err(ValidationError::MissingField(field.name.to_string()))
				}
				None => {}
			}
		}

		Ok(())
	}
}

/// Validation of the configuration table an implementation is built from.
pub trait ConfigSchema: Send + Sync {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError>;
}

/// Parses a `0x`-prefixed hex string into a felt.
pub fn parse_felt(value: &str) -> Result<Felt, String> {
	if !value.starts_with("0x") {
		return Err(format!("'{}' must be 0x-prefixed hex", value));
	}
	Felt::from_hex(value).map_err(|e| format!("'{}' is not a valid felt: {}", value, e))
}
