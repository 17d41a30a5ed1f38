use std::fmt;

use bulwark_config::{Config, DEFAULT_EDITABLE_THEME, DEFAULT_READ_ONLY_THEME};
use bulwark_primitives::EditorMode;

/// Name under which the host widget knows a theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeId(String);

impl ThemeId {
	/// Creates a theme id.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the id as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ThemeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for ThemeId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for ThemeId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Foreground color for one token scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRule {
	/// Token scope, e.g. `number` or `string.yaml`.
	pub token: String,
	/// Hex color without the leading `#`.
	pub foreground: String,
}

impl TokenRule {
	fn new(token: &str, foreground: &str) -> Self {
		Self {
			token: token.to_string(),
			foreground: foreground.to_string(),
		}
	}
}

/// Editor chrome colors, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
	/// Text area background.
	pub background: String,
	/// Gutter (glyph margin and line numbers) background.
	pub gutter_background: String,
	/// Line number on the cursor's line.
	pub line_number_active: String,
	/// Every other line number.
	pub line_number: String,
}

/// Token rules plus chrome colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	/// Per-scope token colors.
	pub rules: Vec<TokenRule>,
	/// Chrome colors.
	pub colors: ThemeColors,
}

/// A theme the host should define before first paint.
///
/// A descriptor without a palette refers to a theme the host already knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
	/// Name the host registers the theme under.
	pub id: ThemeId,
	/// Built-in theme this one extends.
	pub base: String,
	/// Whether unspecified scopes fall back to `base`.
	pub inherit: bool,
	/// Colors to define; `None` for a theme the host already has.
	pub palette: Option<Palette>,
}

impl ThemeDescriptor {
	/// Refers to a theme defined entirely by the host.
	pub fn external(id: impl Into<String>) -> Self {
		Self {
			id: ThemeId::new(id),
			base: "vs-dark".to_string(),
			inherit: true,
			palette: None,
		}
	}

	/// Dark theme with colored YAML tokens, used while editing.
	pub fn resource_editor() -> Self {
		Self {
			id: ThemeId::new(DEFAULT_EDITABLE_THEME),
			base: "vs-dark".to_string(),
			inherit: true,
			palette: Some(Palette {
				rules: vec![
					TokenRule::new("number", "ace12e"),
					TokenRule::new("type", "73bcf7"),
					TokenRule::new("string", "f0ab00"),
					TokenRule::new("keyword", "cbc0ff"),
				],
				colors: ThemeColors {
					background: "#151515".to_string(),
					gutter_background: "#292e34".to_string(),
					line_number_active: "#fff".to_string(),
					line_number: "#f0f0f0".to_string(),
				},
			}),
		}
	}

	/// Greyed-out theme on a light background, used while read-only.
	pub fn readonly_resource_editor() -> Self {
		Self {
			id: ThemeId::new(DEFAULT_READ_ONLY_THEME),
			base: "vs-dark".to_string(),
			inherit: true,
			palette: Some(Palette {
				rules: vec![
					TokenRule::new("number", "b0b0b0"),
					TokenRule::new("type", "b0b0b0"),
					TokenRule::new("string.yaml", "b0b0b0"),
					TokenRule::new("keyword", "b0b0b0"),
				],
				colors: ThemeColors {
					background: "#e0e0e0".to_string(),
					gutter_background: "#e0e0e0".to_string(),
					line_number_active: "#000000".to_string(),
					line_number: "#000000".to_string(),
				},
			}),
		}
	}

	/// Returns the stock descriptor for `id`, or an external reference.
	pub fn stock_or_external(id: &str) -> Self {
		match id {
			DEFAULT_EDITABLE_THEME => Self::resource_editor(),
			DEFAULT_READ_ONLY_THEME => Self::readonly_resource_editor(),
			other => Self::external(other),
		}
	}
}

/// One theme per editor mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
	editable: ThemeDescriptor,
	read_only: ThemeDescriptor,
}

impl Default for ThemeSet {
	fn default() -> Self {
		Self::new(
			ThemeDescriptor::resource_editor(),
			ThemeDescriptor::readonly_resource_editor(),
		)
	}
}

impl ThemeSet {
	/// Creates a set from explicit descriptors.
	pub fn new(editable: ThemeDescriptor, read_only: ThemeDescriptor) -> Self {
		Self { editable, read_only }
	}

	/// Creates a set from the configured theme ids.
	pub fn from_config(config: &Config) -> Self {
		Self::new(
			ThemeDescriptor::stock_or_external(&config.themes.editable),
			ThemeDescriptor::stock_or_external(&config.themes.read_only),
		)
	}

	/// Returns the descriptor for `mode`.
	pub fn get(&self, mode: EditorMode) -> &ThemeDescriptor {
		match mode {
			EditorMode::Editable => &self.editable,
			EditorMode::ReadOnly => &self.read_only,
		}
	}

	/// Iterates both descriptors, editable first.
	pub fn iter(&self) -> impl Iterator<Item = &ThemeDescriptor> {
		[&self.editable, &self.read_only].into_iter()
	}
}
