use super::*;

#[test]
fn empty_selection() {
	let sel = Selection::empty();
	assert!(sel.is_empty());
	assert_eq!(sel.len(), 0);
	assert_eq!(sel.primary(), None);
	assert!(!sel.intersects(&Span::full_line(1, 132)));
}

#[test]
fn point_selection() {
	let sel = Selection::point(Position::new(3, 5));
	assert_eq!(sel.len(), 1);
	assert!(sel.primary().unwrap().is_point());
}

#[test]
fn multi_selection_keeps_host_order() {
	let primary = Span::from_coords(10, 1, 10, 4);
	let others = vec![Span::from_coords(2, 1, 2, 3), Span::from_coords(7, 1, 7, 1)];
	let sel = Selection::new(primary, others);
	assert_eq!(sel.len(), 3);
	assert_eq!(sel.primary(), Some(primary));
	assert_eq!(sel.spans()[1].start().line, 2);
	assert_eq!(sel.spans()[2].start().line, 7);
}

#[test]
fn overlapping_cursors_are_not_merged() {
	let a = Span::from_coords(1, 1, 1, 10);
	let sel = Selection::new(a, [a]);
	assert_eq!(sel.len(), 2);
}

#[test]
fn intersects_if_any_span_does() {
	let protected = Span::full_line(5, 132);
	let sel: Selection = [
		Span::point(Position::new(1, 1)),
		Span::point(Position::new(5, 3)),
	]
	.into_iter()
	.collect();
	assert!(sel.intersects(&protected));
	assert!(!sel.intersects(&Span::full_line(6, 132)));
}

#[test]
fn push_appends() {
	let mut sel = Selection::empty();
	sel.push(Span::point(Position::new(4, 2)));
	assert_eq!(sel.primary(), Some(Span::point(Position::new(4, 2))));
}
