use crate::position::{ColNr, LineNr, Position};

/// An inclusive range between two positions.
///
/// Spans are stored normalized (`start <= end`), so a selection dragged
/// backwards describes the same extent as its forward twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
	start: Position,
	end: Position,
}

impl Span {
	/// Creates a span between two positions in either order.
	pub fn new(a: Position, b: Position) -> Self {
		if a <= b { Self { start: a, end: b } } else { Self { start: b, end: a } }
	}

	/// Creates a span from raw line/column pairs.
	pub fn from_coords(
		start_line: LineNr,
		start_column: ColNr,
		end_line: LineNr,
		end_column: ColNr,
	) -> Self {
		Self::new(
			Position::new(start_line, start_column),
			Position::new(end_line, end_column),
		)
	}

	/// Creates a zero-width span (cursor) at the given position.
	pub fn point(pos: Position) -> Self {
		Self { start: pos, end: pos }
	}

	/// Creates a span covering `line` from column 0 through `width`.
	pub fn full_line(line: LineNr, width: ColNr) -> Self {
		Self::from_coords(line, 0, line, width)
	}

	/// Returns the earlier endpoint.
	#[inline]
	pub fn start(&self) -> Position {
		self.start
	}

	/// Returns the later endpoint.
	#[inline]
	pub fn end(&self) -> Position {
		self.end
	}

	/// Returns true if start equals end (zero-width cursor).
	#[inline]
	pub fn is_point(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if the span touches more than one line.
	#[inline]
	pub fn is_multiline(&self) -> bool {
		self.start.line != self.end.line
	}

	/// Returns true if `pos` lies inside the span, endpoints included.
	pub fn contains(&self, pos: Position) -> bool {
		self.start <= pos && pos <= self.end
	}

	/// Returns the overlap of two spans, if any.
	///
	/// Endpoints are inclusive: spans that only share a boundary position
	/// intersect in a zero-width span at that position.
	pub fn intersection(&self, other: &Span) -> Option<Span> {
		let start = self.start.max(other.start);
		let end = self.end.min(other.end);
		(start <= end).then_some(Span { start, end })
	}

	/// Returns true if the two spans overlap, endpoints included.
	#[inline]
	pub fn intersects(&self, other: &Span) -> bool {
		self.intersection(other).is_some()
	}
}

impl From<Position> for Span {
	fn from(pos: Position) -> Self {
		Self::point(pos)
	}
}
