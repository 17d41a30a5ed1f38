/// Modifier flags as reported on a host key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt (Option) is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Meta is held: Cmd on macOS, the Windows key elsewhere.
	pub meta: bool,
}

impl Modifiers {
	/// Nothing held.
	pub const NONE: Self = Self::from_flags(false, false, false, false);
	/// Only Ctrl held.
	pub const CTRL: Self = Self::from_flags(true, false, false, false);
	/// Only Alt held.
	pub const ALT: Self = Self::from_flags(false, true, false, false);
	/// Only Shift held.
	pub const SHIFT: Self = Self::from_flags(false, false, true, false);
	/// Only Meta held.
	pub const META: Self = Self::from_flags(false, false, false, true);

	/// Builds modifiers from the host's `ctrlKey`/`altKey`/`shiftKey`/`metaKey` flags.
	pub const fn from_flags(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
		Self { ctrl, alt, shift, meta }
	}

	/// Both sets held at once.
	pub const fn and(self, other: Self) -> Self {
		Self::from_flags(
			self.ctrl || other.ctrl,
			self.alt || other.alt,
			self.shift || other.shift,
			self.meta || other.meta,
		)
	}

	/// Ctrl or Meta, the platform "command" chord.
	pub const fn is_command(self) -> bool {
		self.ctrl || self.meta
	}
}
