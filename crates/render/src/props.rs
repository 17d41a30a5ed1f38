use std::sync::Arc;

use bulwark_primitives::EditorMode;

/// The inputs the host feeds the editor on each update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorProps {
	/// Full document text.
	pub content: Arc<str>,
	/// Whether the editor container is hidden.
	pub hidden: bool,
	/// Whether the whole document is read-only.
	pub read_only: bool,
	/// Whether the condensed display is active.
	pub condensed: bool,
}

impl EditorProps {
	/// Visible, editable, normal-density props for `content`.
	pub fn new(content: impl Into<Arc<str>>) -> Self {
		Self {
			content: content.into(),
			hidden: false,
			read_only: false,
			condensed: false,
		}
	}

	/// Sets the hidden flag.
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	/// Sets the read-only flag.
	pub fn read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;
		self
	}

	/// Sets the condensed flag.
	pub fn condensed(mut self, condensed: bool) -> Self {
		self.condensed = condensed;
		self
	}

	/// The editor mode these props ask for.
	pub fn mode(&self) -> EditorMode {
		EditorMode::from_read_only(self.read_only)
	}

	/// Returns true if `other` carries different document text.
	pub fn content_differs(&self, other: &EditorProps) -> bool {
		!Arc::ptr_eq(&self.content, &other.content) && self.content != other.content
	}
}

/// Returns true if moving from `prev` to `next` changes anything on screen.
///
/// Only content, visibility, read-only mode and density are compared; any
/// other host state is irrelevant to the editor's display.
pub fn needs_redraw(prev: &EditorProps, next: &EditorProps) -> bool {
	prev.content_differs(next)
		|| prev.hidden != next.hidden
		|| prev.read_only != next.read_only
		|| prev.condensed != next.condensed
}
