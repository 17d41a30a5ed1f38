//! Theme id section.
//!
//! Only the ids are configurable here; palettes are resolved by the host
//! widget from the descriptors the render layer hands it.

use serde::Deserialize;

/// Id of the theme used while the document accepts edits.
pub const DEFAULT_EDITABLE_THEME: &str = "resource-editor";

/// Id of the theme used while the whole document is read-only.
pub const DEFAULT_READ_ONLY_THEME: &str = "readonly-resource-editor";

/// Theme ids per editor mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThemeNames {
	/// Theme for editable documents.
	pub editable: String,
	/// Theme for read-only documents.
	pub read_only: String,
}

impl Default for ThemeNames {
	fn default() -> Self {
		Self {
			editable: DEFAULT_EDITABLE_THEME.to_string(),
			read_only: DEFAULT_READ_ONLY_THEME.to_string(),
		}
	}
}
