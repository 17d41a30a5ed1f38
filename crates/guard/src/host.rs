//! Seams to the host widget.

use bulwark_primitives::{KeyEvent, LineNr, Position};

/// Read access to the live document, as much as the guard needs.
pub trait DocumentView {
	/// The primary cursor position, if the widget has one.
	fn cursor(&self) -> Option<Position>;

	/// Character length of `line`, excluding the line break.
	///
	/// Returns `None` if the line does not exist.
	fn line_len(&self, line: LineNr) -> Option<usize>;
}

impl<T: DocumentView + ?Sized> DocumentView for &T {
	fn cursor(&self) -> Option<Position> {
		(**self).cursor()
	}

	fn line_len(&self, line: LineNr) -> Option<usize> {
		(**self).line_len(line)
	}
}

/// A key event in flight through the host's dispatch pipeline.
///
/// Propagation and the default action are separate switches in the host;
/// suppressing a key means flipping both.
pub trait KeyDispatch {
	/// The key being dispatched.
	fn key(&self) -> KeyEvent;

	/// Keeps the event from reaching parent handlers.
	fn stop_propagation(&mut self);

	/// Keeps the widget's default handling from mutating the document.
	fn prevent_default(&mut self);
}

/// A [`KeyDispatch`] that records what was suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterceptedKey {
	key: KeyEvent,
	propagation_stopped: bool,
	default_prevented: bool,
}

impl InterceptedKey {
	/// Wraps a fresh, unsuppressed key event.
	pub fn new(key: KeyEvent) -> Self {
		Self {
			key,
			propagation_stopped: false,
			default_prevented: false,
		}
	}

	/// Returns true if propagation was stopped.
	pub fn propagation_stopped(&self) -> bool {
		self.propagation_stopped
	}

	/// Returns true if the default action was prevented.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented
	}

	/// Returns true if the event was fully suppressed.
	pub fn is_suppressed(&self) -> bool {
		self.propagation_stopped && self.default_prevented
	}
}

impl From<KeyEvent> for InterceptedKey {
	fn from(key: KeyEvent) -> Self {
		Self::new(key)
	}
}

impl KeyDispatch for InterceptedKey {
	fn key(&self) -> KeyEvent {
		self.key
	}

	fn stop_propagation(&mut self) {
		self.propagation_stopped = true;
	}

	fn prevent_default(&mut self) {
		self.default_prevented = true;
	}
}
