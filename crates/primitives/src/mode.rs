use std::fmt;

/// Whether the document accepts edits at all.
///
/// In `Editable` mode only protected lines are guarded; in `ReadOnly` mode
/// every mutating key is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
	/// Mixed editable/protected document.
	#[default]
	Editable,
	/// The whole document is read-only.
	ReadOnly,
}

impl EditorMode {
	/// Maps the host's read-only flag to a mode.
	pub const fn from_read_only(read_only: bool) -> Self {
		if read_only { Self::ReadOnly } else { Self::Editable }
	}

	/// Returns true for [`EditorMode::ReadOnly`].
	pub const fn is_read_only(self) -> bool {
		matches!(self, Self::ReadOnly)
	}

	/// Short lowercase name, used in log fields.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Editable => "editable",
			Self::ReadOnly => "read-only",
		}
	}
}

impl From<bool> for EditorMode {
	fn from(read_only: bool) -> Self {
		Self::from_read_only(read_only)
	}
}

impl fmt::Display for EditorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_read_only_flag() {
		assert_eq!(EditorMode::from(true), EditorMode::ReadOnly);
		assert_eq!(EditorMode::from(false), EditorMode::Editable);
		assert!(EditorMode::ReadOnly.is_read_only());
		assert!(!EditorMode::default().is_read_only());
	}
}
