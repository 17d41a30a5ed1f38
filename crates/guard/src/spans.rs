use bulwark_primitives::{ColNr, LineNr, LineTags, Selection, Span};

/// Full-width spans over every immutable line.
///
/// Built fresh for each key event. Spans are ordered by line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImmutableSpanSet {
	spans: Vec<(LineNr, Span)>,
}

impl ImmutableSpanSet {
	/// Covers each immutable line from column 0 through `width`.
	pub fn from_tags(tags: &LineTags, width: ColNr) -> Self {
		Self {
			spans: tags.immutable().map(|line| (line, Span::full_line(line, width))).collect(),
		}
	}

	/// Returns the number of protected spans.
	pub fn len(&self) -> usize {
		self.spans.len()
	}

	/// Returns true if nothing is protected.
	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Iterates the protected spans in line order.
	pub fn iter(&self) -> impl Iterator<Item = &Span> {
		self.spans.iter().map(|(_, span)| span)
	}

	/// Returns the first protected line that any span of `selection` touches.
	pub fn first_intersecting(&self, selection: &Selection) -> Option<LineNr> {
		self.spans
			.iter()
			.find(|(_, protected)| selection.intersects(protected))
			.map(|(line, _)| *line)
	}
}

#[cfg(test)]
mod tests {
	use bulwark_primitives::Position;

	use super::*;

	#[test]
	fn test_empty_tags_protect_nothing() {
		let set = ImmutableSpanSet::from_tags(&LineTags::new(), 132);
		assert!(set.is_empty());
		assert_eq!(set.first_intersecting(&Selection::point(Position::new(1, 1))), None);
	}

	#[test]
	fn test_one_span_per_immutable_line() {
		let set = ImmutableSpanSet::from_tags(&LineTags::immutable_lines([2, 5]), 132);
		assert_eq!(set.len(), 2);
		assert_eq!(
			set.iter().copied().collect::<Vec<_>>(),
			vec![Span::full_line(2, 132), Span::full_line(5, 132)]
		);
	}

	#[test]
	fn test_first_intersecting_reports_lowest_line() {
		let set = ImmutableSpanSet::from_tags(&LineTags::immutable_lines([2, 5]), 132);
		let sel = Selection::single(Span::from_coords(1, 1, 6, 1));
		assert_eq!(set.first_intersecting(&sel), Some(2));
		assert_eq!(set.first_intersecting(&Selection::point(Position::new(5, 9))), Some(5));
		assert_eq!(set.first_intersecting(&Selection::point(Position::new(3, 1))), None);
	}
}
