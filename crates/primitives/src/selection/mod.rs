use smallvec::{SmallVec, smallvec};

use crate::position::Position;
use crate::span::Span;

#[cfg(test)]
mod tests;

/// A snapshot of the host widget's cursors and selections.
///
/// Spans keep the order the host reported them in; the first one is the
/// primary selection. Unlike an editing core's selection, a snapshot may be
/// empty when the widget has no cursor (e.g. it lost focus before the model
/// attached).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
	spans: SmallVec<[Span; 1]>,
}

impl Selection {
	/// Creates a selection from a primary span plus any additional cursors.
	pub fn new(primary: Span, others: impl IntoIterator<Item = Span>) -> Self {
		let mut spans: SmallVec<[Span; 1]> = smallvec![primary];
		spans.extend(others);
		Self { spans }
	}

	/// Creates a selection with no cursor at all.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates a single-span selection.
	pub fn single(span: Span) -> Self {
		Self {
			spans: smallvec![span],
		}
	}

	/// Creates a point selection (zero-width cursor).
	pub fn point(pos: Position) -> Self {
		Self::single(Span::point(pos))
	}

	/// Returns the primary span, if any cursor exists.
	pub fn primary(&self) -> Option<Span> {
		self.spans.first().copied()
	}

	/// Returns all spans as a slice.
	pub fn spans(&self) -> &[Span] {
		&self.spans
	}

	/// Returns the number of spans.
	pub fn len(&self) -> usize {
		self.spans.len()
	}

	/// Returns true if there is no cursor.
	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Iterates over all spans.
	pub fn iter(&self) -> impl Iterator<Item = &Span> {
		self.spans.iter()
	}

	/// Adds a cursor after the existing ones.
	pub fn push(&mut self, span: Span) {
		self.spans.push(span);
	}

	/// Returns true if any span overlaps `other`, endpoints included.
	pub fn intersects(&self, other: &Span) -> bool {
		self.spans.iter().any(|s| s.intersects(other))
	}
}

impl From<Span> for Selection {
	fn from(span: Span) -> Self {
		Self::single(span)
	}
}

impl FromIterator<Span> for Selection {
	fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
		Self {
			spans: iter.into_iter().collect(),
		}
	}
}
