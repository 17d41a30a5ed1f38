use rstest::rstest;

use super::*;

#[rstest]
#[case::letter("KeyC", KeyCode::Char('c'))]
#[case::upper_letter("KeyZ", KeyCode::Char('z'))]
#[case::digit("Digit7", KeyCode::Char('7'))]
#[case::numpad_digit("Numpad3", KeyCode::Char('3'))]
#[case::space("Space", KeyCode::Char(' '))]
#[case::punctuation("Semicolon", KeyCode::Char(';'))]
#[case::enter("Enter", KeyCode::Enter)]
#[case::numpad_enter("NumpadEnter", KeyCode::NumpadEnter)]
#[case::arrow("ArrowDown", KeyCode::Down)]
#[case::function("F12", KeyCode::F(12))]
#[case::modifier("ShiftLeft", KeyCode::Modifier(ModifierKey::Shift))]
fn parses_physical_codes(#[case] code: &str, #[case] expected: KeyCode) {
	assert_eq!(code.parse::<KeyCode>(), Ok(expected));
}

#[test]
fn rejects_empty_code() {
	assert_eq!("".parse::<KeyCode>(), Err(KeyParseError::Empty));
}

#[rstest]
#[case::intl_backslash("IntlBackslash")]
#[case::intl_ro("IntlRo")]
#[case::intl_yen("IntlYen")]
#[case::numpad_equal("NumpadEqual")]
#[case::numpad_comma("NumpadComma")]
#[case::bogus("Hyper")]
#[case::two_letters("KeyCC")]
#[case::f_out_of_range("F25")]
fn unlisted_codes_are_unidentified(#[case] code: &str) {
	assert_eq!(code.parse::<KeyCode>(), Ok(KeyCode::Unidentified));
}

#[test]
fn arrows() {
	for code in [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right] {
		assert!(code.is_arrow());
	}
	assert!(!KeyCode::Home.is_arrow());
	assert!(!KeyCode::Char('j').is_arrow());
}

#[test]
fn copy_needs_ctrl_or_meta() {
	assert!(KeyEvent::ctrl('c').is_copy());
	assert!(KeyEvent::meta('c').is_copy());
	assert!(KeyEvent::char('c').with_modifiers(Modifiers::CTRL.and(Modifiers::SHIFT)).is_copy());
	assert!(!KeyEvent::char('c').is_copy());
	assert!(!KeyEvent::char('c').with_modifiers(Modifiers::ALT).is_copy());
	assert!(!KeyEvent::ctrl('v').is_copy());
}

#[test]
fn from_code_keeps_modifiers() {
	let key = KeyEvent::from_code("KeyC", Modifiers::META).unwrap();
	assert_eq!(key, KeyEvent::meta('c'));
	assert!(KeyEvent::from_code("", Modifiers::NONE).is_err());
	let key = KeyEvent::from_code("IntlBackslash", Modifiers::SHIFT).unwrap();
	assert_eq!(key, KeyEvent::new(KeyCode::Unidentified).with_modifiers(Modifiers::SHIFT));
}

#[test]
fn enter_ignores_modifiers_but_not_numpad() {
	assert!(KeyEvent::new(KeyCode::Enter).is_enter());
	assert!(KeyEvent::new(KeyCode::Enter).with_modifiers(Modifiers::SHIFT).is_enter());
	assert!(!KeyEvent::new(KeyCode::NumpadEnter).is_enter());
}

#[test]
fn display() {
	assert_eq!(KeyEvent::ctrl('c').to_string(), "ctrl+c");
	assert_eq!(KeyEvent::new(KeyCode::PageUp).to_string(), "pageup");
	assert_eq!(KeyEvent::char(' ').with_modifiers(Modifiers::SHIFT).to_string(), "shift+space");
	assert_eq!(KeyEvent::new(KeyCode::Modifier(ModifierKey::CapsLock)).to_string(), "capslock");
	assert_eq!(KeyEvent::new(KeyCode::Unidentified).to_string(), "unidentified");
}
