//! Error types for history configuration.
//!
//! History bookkeeping itself never fails; only parsing configuration does.

use thiserror::Error;

/// Errors that can occur when parsing history configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an invalid value.
	#[error("history config parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
