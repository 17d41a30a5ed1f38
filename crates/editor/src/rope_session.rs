use bulwark_guard::DocumentView;
use bulwark_primitives::{KeyCode, KeyEvent, LineNr, Position, Selection};
use bulwark_render::TokenCache;
use ropey::Rope;

use crate::session::EditorSession;

/// In-memory editor session backed by a [`Rope`].
///
/// Default key handling covers a single cursor: character insertion, Enter,
/// Tab, Backspace, Delete and arrow movement. Extra cursors are carried in
/// the selection snapshot but not edited.
#[derive(Debug, Clone)]
pub struct RopeSession {
	text: Rope,
	selection: Selection,
	cursor: Option<Position>,
	attached: bool,
	tokenized_through: Option<usize>,
	tokenize_calls: usize,
}

impl RopeSession {
	/// Creates a session over `text` with the cursor at 1:1.
	pub fn new(text: &str) -> Self {
		let start = Position::new(1, 1);
		Self {
			text: Rope::from_str(text),
			selection: Selection::point(start),
			cursor: Some(start),
			attached: true,
			tokenized_through: None,
			tokenize_calls: 0,
		}
	}

	/// Creates a session whose widget has no model yet.
	pub fn without_model() -> Self {
		Self {
			attached: false,
			selection: Selection::empty(),
			cursor: None,
			..Self::new("")
		}
	}

	/// The document text.
	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Text of `line` without its line break.
	pub fn line(&self, line: LineNr) -> Option<String> {
		let start = self.char_idx(Position::new(line, 1))?;
		let len = self.line_len(line)?;
		Some(self.text.slice(start..start + len).to_string())
	}

	/// Places a single cursor at `pos`.
	pub fn set_cursor(&mut self, pos: Position) {
		self.selection = Selection::point(pos);
		self.cursor = Some(pos);
	}

	/// Replaces the selection; `cursor` is where the primary selection's head sits.
	pub fn select(&mut self, selection: Selection, cursor: Position) {
		self.selection = selection;
		self.cursor = Some(cursor);
	}

	/// Drops every cursor, as when the widget loses its model focus.
	pub fn clear_selection(&mut self) {
		self.selection = Selection::empty();
		self.cursor = None;
	}

	/// Swaps in new text from outside user input.
	///
	/// The cursor returns to 1:1 and the model counts as attached.
	pub fn replace_content(&mut self, text: &str) {
		self.text = Rope::from_str(text);
		self.attached = true;
		self.set_cursor(Position::new(1, 1));
	}

	/// Last line the token cache was forced through.
	pub fn tokenized_through(&self) -> Option<usize> {
		self.tokenized_through
	}

	/// How many times re-tokenization was forced.
	pub fn tokenize_calls(&self) -> usize {
		self.tokenize_calls
	}

	/// Runs the widget's default handling for `key`.
	///
	/// Returns true if the text changed.
	pub fn apply_default(&mut self, key: &KeyEvent) -> bool {
		let Some(cursor) = self.cursor else {
			return false;
		};
		let Some(idx) = self.char_idx(cursor) else {
			return false;
		};

		match key.code {
			KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
				self.move_cursor(cursor, key.code);
				false
			}
			KeyCode::Char(_) if key.modifiers.is_command() => false,
			KeyCode::Char(c) => {
				let c = if key.modifiers.shift { c.to_ascii_uppercase() } else { c };
				self.text.insert_char(idx, c);
				self.set_cursor(Position::new(cursor.line, cursor.column + 1));
				true
			}
			KeyCode::Tab => {
				self.text.insert(idx, "  ");
				self.set_cursor(Position::new(cursor.line, cursor.column + 2));
				true
			}
			KeyCode::Enter | KeyCode::NumpadEnter => {
				self.text.insert_char(idx, '\n');
				self.set_cursor(Position::new(cursor.line + 1, 1));
				true
			}
			KeyCode::Backspace if idx > 0 => {
				let to = if cursor.column > 1 {
					Position::new(cursor.line, cursor.column - 1)
				} else {
					let prev = cursor.line - 1;
					Position::new(prev, self.line_len(prev).unwrap_or(0) + 1)
				};
				self.text.remove(idx - 1..idx);
				self.set_cursor(to);
				true
			}
			KeyCode::Delete if idx < self.text.len_chars() => {
				self.text.remove(idx..idx + 1);
				true
			}
			_ => false,
		}
	}

	fn move_cursor(&mut self, cursor: Position, code: KeyCode) {
		let len = |line| self.line_len(line).unwrap_or(0);
		let last_line = self.text.len_lines();
		let to = match code {
			KeyCode::Left if cursor.column > 1 => Position::new(cursor.line, cursor.column - 1),
			KeyCode::Right if cursor.column <= len(cursor.line) => {
				Position::new(cursor.line, cursor.column + 1)
			}
			KeyCode::Up if cursor.line > 1 => {
				Position::new(cursor.line - 1, cursor.column.min(len(cursor.line - 1) + 1))
			}
			KeyCode::Down if cursor.line < last_line => {
				Position::new(cursor.line + 1, cursor.column.min(len(cursor.line + 1) + 1))
			}
			_ => cursor,
		};
		self.set_cursor(to);
	}

	/// Char index of `pos`, with the column clamped to the line's end.
	fn char_idx(&self, pos: Position) -> Option<usize> {
		let len = self.line_len(pos.line)?;
		let col = pos.column.saturating_sub(1).min(len);
		Some(self.text.line_to_char(pos.line - 1) + col)
	}
}

impl DocumentView for RopeSession {
	fn cursor(&self) -> Option<Position> {
		self.cursor
	}

	fn line_len(&self, line: LineNr) -> Option<usize> {
		if line == 0 || line > self.text.len_lines() {
			return None;
		}
		let slice = self.text.line(line - 1);
		let mut len = slice.len_chars();
		if len > 0 && slice.char(len - 1) == '\n' {
			len -= 1;
			if len > 0 && slice.char(len - 1) == '\r' {
				len -= 1;
			}
		}
		Some(len)
	}
}

impl TokenCache for RopeSession {
	fn line_count(&self) -> Option<usize> {
		self.attached.then(|| self.text.len_lines())
	}

	fn force_tokenization(&mut self, through_line: usize) {
		self.tokenized_through = Some(through_line);
		self.tokenize_calls += 1;
	}
}

impl EditorSession for RopeSession {
	fn selection(&self) -> Selection {
		self.selection.clone()
	}
}
