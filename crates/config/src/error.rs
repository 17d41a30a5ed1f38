//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Malformed TOML, a wrongly typed value or an unknown key.
	#[error("invalid config TOML: {0}")]
	Toml(#[from] toml::de::Error),

	/// The config file could not be read.
	#[error("cannot read config file {path}: {error}")]
	Io {
		/// File that could not be read.
		path: PathBuf,
		/// Underlying I/O failure.
		error: std::io::Error,
	},

	/// A width or wrap column of zero.
	#[error("{key} must be at least 1")]
	ZeroWidth {
		/// Config key holding the zero.
		key: &'static str,
	},

	/// A blank theme id.
	#[error("theme id for {mode} mode is empty")]
	BlankTheme {
		/// Mode whose theme id is blank.
		mode: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
