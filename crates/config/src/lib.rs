//! Configuration for the protected-region editor.
//!
//! Configuration is written in TOML. Every key is optional; an empty document
//! yields the defaults below.
//!
//! ```toml
//! # Width of a protected line span, in columns.
//! max-line-width = 132
//!
//! [wrap-column]
//! normal = 256
//! condensed = 512
//!
//! [themes]
//! editable = "resource-editor"
//! read-only = "readonly-resource-editor"
//! ```
//!
//! The minimap is not configured directly: it is shown exactly when the
//! condensed display is off.

pub mod error;
pub mod theme;

use std::path::Path;

use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use theme::{DEFAULT_EDITABLE_THEME, DEFAULT_READ_ONLY_THEME, ThemeNames};

/// Default width of a protected line span.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 132;

/// Word-wrap columns for the two display densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapColumns {
	/// Wrap column in the normal display.
	pub normal: usize,
	/// Wrap column in the condensed display.
	pub condensed: usize,
}

impl WrapColumns {
	/// Wrap column for the given display density.
	pub const fn column(self, condensed: bool) -> usize {
		if condensed { self.condensed } else { self.normal }
	}
}

impl Default for WrapColumns {
	fn default() -> Self {
		Self {
			normal: 256,
			condensed: 512,
		}
	}
}

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Columns covered by each protected line span.
	pub max_line_width: usize,
	/// Word-wrap columns.
	pub wrap_column: WrapColumns,
	/// Theme ids per mode.
	pub themes: ThemeNames,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_line_width: DEFAULT_MAX_LINE_WIDTH,
			wrap_column: WrapColumns::default(),
			themes: ThemeNames::default(),
		}
	}
}

impl Config {
	/// Parse a TOML string into a validated [`Config`].
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_toml_str(&content)
	}

	/// Rejects values that parse but cannot drive the editor.
	pub fn validate(&self) -> Result<()> {
		if self.max_line_width == 0 {
			return Err(ConfigError::ZeroWidth { key: "max-line-width" });
		}
		if self.wrap_column.normal == 0 {
			return Err(ConfigError::ZeroWidth { key: "wrap-column.normal" });
		}
		if self.wrap_column.condensed == 0 {
			return Err(ConfigError::ZeroWidth { key: "wrap-column.condensed" });
		}
		if self.themes.editable.trim().is_empty() {
			return Err(ConfigError::BlankTheme { mode: "editable" });
		}
		if self.themes.read_only.trim().is_empty() {
			return Err(ConfigError::BlankTheme { mode: "read-only" });
		}
		Ok(())
	}
}
