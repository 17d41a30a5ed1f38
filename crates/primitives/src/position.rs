use std::fmt;

/// A line number, 1-based.
pub type LineNr = usize;

/// A column number, 1-based for cursors.
///
/// Protected spans start at column 0 so that they also cover a cursor parked
/// before the first character.
pub type ColNr = usize;

/// A position in the document as the host widget reports it.
///
/// Ordering is line-major, then column, which is the order the host uses when it
/// compares range endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// The line, 1-based.
	pub line: LineNr,
	/// The column, 1-based.
	pub column: ColNr,
}

impl Position {
	/// Creates a position at `line`, `column`.
	pub const fn new(line: LineNr, column: ColNr) -> Self {
		Self { line, column }
	}

	/// Returns true if the cursor sits past the last character of a line that is
	/// `line_len` characters long.
	///
	/// Column `line_len + 1` is the append position.
	#[inline]
	pub fn is_past_end_of(&self, line_len: usize) -> bool {
		line_len < self.column
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}
