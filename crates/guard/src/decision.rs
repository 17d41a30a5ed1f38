use bulwark_primitives::LineNr;

use crate::key_class::KeyClass;

/// Why a key was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
	/// No selection touches a protected line.
	Unprotected,
	/// The widget has no cursor.
	NoSelection,
	/// Navigation or copy, which never mutate content.
	SafeKey(KeyClass),
	/// Enter pressed past the end of the cursor's line.
	EndOfLineEnter,
}

/// Why a key was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
	/// The whole document is read-only.
	ReadOnly,
	/// A selection touches the protected `line`.
	Protected {
		/// First protected line found under a selection.
		line: LineNr,
	},
}

/// Outcome of guarding one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	/// The event may reach the document model.
	Allow(AllowReason),
	/// The event must be suppressed.
	Block(BlockReason),
}

impl Decision {
	/// Returns true if the event must be suppressed.
	pub fn is_block(&self) -> bool {
		matches!(self, Self::Block(_))
	}

	/// Returns true if the event may proceed.
	pub fn is_allow(&self) -> bool {
		!self.is_block()
	}
}
