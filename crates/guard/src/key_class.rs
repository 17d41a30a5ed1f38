use bulwark_primitives::KeyEvent;

/// How a key press relates to document mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
	/// One of the four arrow keys.
	Navigation,
	/// Ctrl+C or Cmd+C.
	Copy,
	/// The main Enter key.
	Enter,
	/// Anything else, including modifier-only presses and unidentified keys.
	Edit,
}

impl KeyClass {
	/// Classifies a key press.
	pub fn classify(event: &KeyEvent) -> Self {
		if event.code.is_arrow() {
			Self::Navigation
		} else if event.is_copy() {
			Self::Copy
		} else if event.is_enter() {
			Self::Enter
		} else {
			Self::Edit
		}
	}

	/// Returns true for keys that never mutate content.
	pub const fn is_safe(self) -> bool {
		matches!(self, Self::Navigation | Self::Copy)
	}
}
