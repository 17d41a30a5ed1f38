use crate::theme::ThemeId;

/// How long lines wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWrap {
	/// Wrap at a fixed column.
	Column(usize),
}

/// Widget options derived from configuration and the current props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
	/// Syntax highlighting language.
	pub language: &'static str,
	/// Where long lines wrap.
	pub word_wrap: WordWrap,
	/// Whether minified single-line content wraps regardless of `word_wrap`.
	pub word_wrap_minified: bool,
	/// Allow scrolling one screen past the last line.
	pub scroll_beyond_last_line: bool,
	/// Animate scrolling.
	pub smooth_scrolling: bool,
	/// Reserve the gutter column used for decoration glyphs.
	pub glyph_margin: bool,
	/// Columns per indentation level.
	pub tab_size: u8,
	/// Scrollbar thickness in pixels, both axes.
	pub scrollbar_size: u16,
	/// Show the minimap; off in the condensed display.
	pub minimap_enabled: bool,
	/// Widget-level read-only flag, mirroring the editor mode.
	pub read_only: bool,
}

impl EditorOptions {
	/// Base options for a YAML resource editor wrapping at `wrap_column`.
	pub fn resource_yaml(wrap_column: usize) -> Self {
		Self {
			language: "yaml",
			word_wrap: WordWrap::Column(wrap_column),
			word_wrap_minified: false,
			scroll_beyond_last_line: true,
			smooth_scrolling: true,
			glyph_margin: true,
			tab_size: 2,
			scrollbar_size: 17,
			minimap_enabled: true,
			read_only: false,
		}
	}
}

/// Everything the host needs to paint the editor for one set of props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
	/// Theme to paint with.
	pub theme: ThemeId,
	/// Widget options.
	pub options: EditorOptions,
	/// False while the container is hidden.
	pub visible: bool,
}
