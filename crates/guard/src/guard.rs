use bulwark_config::{Config, DEFAULT_MAX_LINE_WIDTH};
use bulwark_primitives::{ColNr, EditorMode, KeyEvent, LineTags, Selection};

use crate::decision::{AllowReason, BlockReason, Decision};
use crate::host::{DocumentView, KeyDispatch};
use crate::key_class::KeyClass;
use crate::spans::ImmutableSpanSet;

/// Decides, per key event, whether input may reach the document model.
///
/// The guard holds no per-document state. Selection, tags and mode are read
/// fresh from the host on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGuard {
	max_line_width: ColNr,
}

impl Default for RegionGuard {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_LINE_WIDTH)
	}
}

impl RegionGuard {
	/// Creates a guard whose protected spans run from column 0 to `max_line_width`.
	pub fn new(max_line_width: ColNr) -> Self {
		Self { max_line_width }
	}

	/// Creates a guard from configuration.
	pub fn from_config(config: &Config) -> Self {
		Self::new(config.max_line_width)
	}

	/// Width of each protected line span.
	pub fn max_line_width(&self) -> ColNr {
		self.max_line_width
	}

	/// Builds the protected spans for the current tags.
	pub fn protected_spans(&self, tags: &LineTags) -> ImmutableSpanSet {
		ImmutableSpanSet::from_tags(tags, self.max_line_width)
	}

	/// Decides whether `event` may proceed.
	///
	/// Read-only mode rejects every mutating key. Otherwise a key is rejected
	/// when any selection touches any protected line, unless it is a
	/// navigation/copy key or an Enter that appends after the end of the
	/// cursor's line. Multiple cursors are not judged separately: one cursor
	/// on a protected line stops the key for all of them.
	pub fn decide(
		&self,
		event: &KeyEvent,
		selection: &Selection,
		tags: &LineTags,
		mode: EditorMode,
		document: &impl DocumentView,
	) -> Decision {
		let class = KeyClass::classify(event);

		let decision = if mode.is_read_only() {
			if class.is_safe() {
				Decision::Allow(AllowReason::SafeKey(class))
			} else {
				Decision::Block(BlockReason::ReadOnly)
			}
		} else if selection.is_empty() {
			Decision::Allow(AllowReason::NoSelection)
		} else {
			match self.protected_spans(tags).first_intersecting(selection) {
				None => Decision::Allow(AllowReason::Unprotected),
				Some(_) if class.is_safe() => Decision::Allow(AllowReason::SafeKey(class)),
				Some(_) if class == KeyClass::Enter && at_end_of_line(document) => {
					Decision::Allow(AllowReason::EndOfLineEnter)
				}
				Some(line) => Decision::Block(BlockReason::Protected { line }),
			}
		};

		match decision {
			Decision::Block(reason) => {
				tracing::debug!(key = %event, mode = %mode, ?reason, "Blocked key");
			}
			Decision::Allow(reason) => {
				tracing::trace!(key = %event, mode = %mode, ?reason, "Allowed key");
			}
		}
		decision
	}

	/// Returns true if `event` must be suppressed.
	pub fn should_block(
		&self,
		event: &KeyEvent,
		selection: &Selection,
		tags: &LineTags,
		mode: EditorMode,
		document: &impl DocumentView,
	) -> bool {
		self.decide(event, selection, tags, mode, document).is_block()
	}

	/// Decides on an in-flight key and suppresses it when blocked.
	///
	/// A blocked key has both its propagation stopped and its default action
	/// prevented; the host mutates text if only one of the two is stopped.
	pub fn intercept(
		&self,
		dispatch: &mut impl KeyDispatch,
		selection: &Selection,
		tags: &LineTags,
		mode: EditorMode,
		document: &impl DocumentView,
	) -> Decision {
		let decision = self.decide(&dispatch.key(), selection, tags, mode, document);
		if decision.is_block() {
			dispatch.stop_propagation();
			dispatch.prevent_default();
		}
		decision
	}
}

/// True if the primary cursor sits past the last character of its line.
fn at_end_of_line(document: &impl DocumentView) -> bool {
	document
		.cursor()
		.and_then(|pos| document.line_len(pos.line).map(|len| pos.is_past_end_of(len)))
		.unwrap_or(false)
}
