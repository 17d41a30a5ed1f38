//! End-to-end guard decisions for typical editing situations.

use bulwark_guard::{AllowReason, BlockReason, Decision, DocumentView, KeyClass, RegionGuard};
use bulwark_primitives::{
	EditorMode, KeyCode, KeyEvent, LineNr, LineTags, Modifiers, Position, Selection, Span,
};
use rstest::rstest;

/// A document made of `count` lines that are each `len` characters long.
struct Uniform {
	count: usize,
	len: usize,
	cursor: Option<Position>,
}

impl DocumentView for Uniform {
	fn cursor(&self) -> Option<Position> {
		self.cursor
	}

	fn line_len(&self, line: LineNr) -> Option<usize> {
		(1..=self.count).contains(&line).then_some(self.len)
	}
}

fn decide(key: KeyEvent, selection: Selection, tags: LineTags, mode: EditorMode) -> Decision {
	let cursor = selection.primary().map(|s| s.end());
	let doc = Uniform {
		count: 10,
		len: 10,
		cursor,
	};
	RegionGuard::default().decide(&key, &selection, &tags, mode, &doc)
}

#[test]
fn typing_inside_protected_line() {
	let decision = decide(
		KeyEvent::char('x'),
		Selection::point(Position::new(3, 5)),
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert_eq!(decision, Decision::Block(BlockReason::Protected { line: 3 }));
}

#[test]
fn typing_on_another_line() {
	let decision = decide(
		KeyEvent::char('x'),
		Selection::point(Position::new(4, 1)),
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert_eq!(decision, Decision::Allow(AllowReason::Unprotected));
}

#[test]
fn enter_at_end_of_protected_line() {
	let decision = decide(
		KeyCode::Enter.into(),
		Selection::point(Position::new(2, 11)),
		LineTags::immutable_lines([2]),
		EditorMode::Editable,
	);
	assert_eq!(decision, Decision::Allow(AllowReason::EndOfLineEnter));
}

#[test]
fn copy_from_fully_protected_selection() {
	let decision = decide(
		KeyEvent::ctrl('c'),
		Selection::single(Span::from_coords(5, 0, 5, 132)),
		LineTags::immutable_lines([5]),
		EditorMode::Editable,
	);
	assert_eq!(decision, Decision::Allow(AllowReason::SafeKey(KeyClass::Copy)));
}

#[test]
fn read_only_without_tags() {
	let decision = decide(
		KeyEvent::char('x'),
		Selection::point(Position::new(1, 1)),
		LineTags::new(),
		EditorMode::ReadOnly,
	);
	assert_eq!(decision, Decision::Block(BlockReason::ReadOnly));
}

#[test]
fn no_cursor_never_blocks() {
	let decision = decide(
		KeyCode::Backspace.into(),
		Selection::empty(),
		LineTags::immutable_lines(1..=10),
		EditorMode::Editable,
	);
	assert_eq!(decision, Decision::Allow(AllowReason::NoSelection));
}

#[rstest]
#[case::up(KeyCode::Up)]
#[case::down(KeyCode::Down)]
#[case::left(KeyCode::Left)]
#[case::right(KeyCode::Right)]
fn arrows_pass_on_protected_lines(#[case] code: KeyCode) {
	for mode in [EditorMode::Editable, EditorMode::ReadOnly] {
		let decision = decide(
			code.into(),
			Selection::point(Position::new(3, 1)),
			LineTags::immutable_lines([3]),
			mode,
		);
		assert_eq!(decision, Decision::Allow(AllowReason::SafeKey(KeyClass::Navigation)));
	}
}

#[rstest]
#[case::backspace(KeyCode::Backspace.into())]
#[case::delete(KeyCode::Delete.into())]
#[case::tab(KeyCode::Tab.into())]
#[case::paste(KeyEvent::ctrl('v'))]
#[case::cut(KeyEvent::meta('x'))]
#[case::numpad_enter(KeyCode::NumpadEnter.into())]
#[case::alt_c(KeyEvent::char('c').with_modifiers(Modifiers::ALT))]
fn mutating_keys_block_on_protected_lines(#[case] key: KeyEvent) {
	let decision = decide(
		key,
		Selection::point(Position::new(3, 11)),
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert!(decision.is_block(), "{key} should be blocked, got {decision:?}");
}

#[rstest]
#[case::end_column(Span::from_coords(3, 132, 3, 140))]
#[case::ends_at_column_zero(Span::from_coords(2, 4, 3, 0))]
#[case::starts_on_line(Span::from_coords(3, 60, 4, 2))]
fn boundary_contact_counts_as_protected(#[case] span: Span) {
	let decision = decide(
		KeyEvent::char('x'),
		Selection::single(span),
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert_eq!(decision, Decision::Block(BlockReason::Protected { line: 3 }));
}

#[test]
fn one_protected_cursor_blocks_all_cursors() {
	let selection = Selection::new(
		Span::point(Position::new(1, 1)),
		[Span::point(Position::new(3, 2)), Span::point(Position::new(6, 1))],
	);
	let decision = decide(
		KeyEvent::char('x'),
		selection,
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert!(decision.is_block());
}

#[rstest]
#[case::intl_backslash("IntlBackslash")]
#[case::intl_ro("IntlRo")]
#[case::numpad_equal("NumpadEqual")]
fn unlisted_physical_keys_block_on_protected_lines(#[case] code: &str) {
	let key = KeyEvent::from_code(code, Modifiers::NONE).unwrap();
	assert_eq!(key.code, KeyCode::Unidentified);

	let blocked = decide(
		key,
		Selection::point(Position::new(3, 5)),
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert_eq!(blocked, Decision::Block(BlockReason::Protected { line: 3 }));

	let elsewhere = decide(
		key,
		Selection::point(Position::new(4, 1)),
		LineTags::immutable_lines([3]),
		EditorMode::Editable,
	);
	assert_eq!(elsewhere, Decision::Allow(AllowReason::Unprotected));
}
