//! Key events as delivered by the host widget.
//!
//! Keys are identified by their physical code (`"KeyC"`, `"ArrowDown"`,
//! `"Enter"`), not by the character the layout produces. Copy detection and
//! navigation classification depend on the physical key, so a French AZERTY
//! layout still copies with the key labelled C in the QWERTY position.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod modifiers;
#[cfg(test)]
mod tests;

pub use modifiers::Modifiers;

/// A physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A key that produces a character in the base layer (letters lowercase).
	Char(char),
	/// The main Enter key.
	Enter,
	/// The numeric keypad Enter key.
	NumpadEnter,
	/// Tab.
	Tab,
	/// Backspace.
	Backspace,
	/// Forward delete.
	Delete,
	/// Insert.
	Insert,
	/// Escape.
	Escape,
	/// Home.
	Home,
	/// End.
	End,
	/// Page up.
	PageUp,
	/// Page down.
	PageDown,
	/// Arrow up.
	Up,
	/// Arrow down.
	Down,
	/// Arrow left.
	Left,
	/// Arrow right.
	Right,
	/// Function key `F1`..`F24`.
	F(u8),
	/// A modifier pressed on its own.
	Modifier(ModifierKey),
	/// A physical key with no variant of its own, such as `IntlBackslash` or
	/// `NumpadEqual`. Many of these type characters on some layout.
	Unidentified,
}

/// Modifier keys that can arrive as key events of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
	/// Either Shift key.
	Shift,
	/// Either Control key.
	Control,
	/// Either Alt (Option) key.
	Alt,
	/// Either Meta key (Cmd on macOS).
	Meta,
	/// Caps Lock.
	CapsLock,
}

impl ModifierKey {
	/// Lowercase name, as used in key descriptions.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Shift => "shift",
			Self::Control => "control",
			Self::Alt => "alt",
			Self::Meta => "meta",
			Self::CapsLock => "capslock",
		}
	}
}

/// Failure to interpret a physical key code string.
///
/// Codes this crate has no variant for are not an error; they parse to
/// [`KeyCode::Unidentified`] so the guard still sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
	/// The code string was empty.
	#[error("empty key code")]
	Empty,
}

impl KeyCode {
	/// Returns true for the four arrow keys.
	pub const fn is_arrow(self) -> bool {
		matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
	}
}

impl FromStr for KeyCode {
	type Err = KeyParseError;

	fn from_str(code: &str) -> Result<Self, Self::Err> {
		if code.is_empty() {
			return Err(KeyParseError::Empty);
		}

		if let Some(letter) = single_char(code.strip_prefix("Key"))
			&& letter.is_ascii_alphabetic()
		{
			return Ok(Self::Char(letter.to_ascii_lowercase()));
		}
		if let Some(digit) = single_char(code.strip_prefix("Digit").or_else(|| code.strip_prefix("Numpad")))
			&& digit.is_ascii_digit()
		{
			return Ok(Self::Char(digit));
		}
		if let Some(n) = code.strip_prefix('F').and_then(|n| n.parse::<u8>().ok())
			&& (1..=24).contains(&n)
		{
			return Ok(Self::F(n));
		}

		let key = match code {
			"Enter" => Self::Enter,
			"NumpadEnter" => Self::NumpadEnter,
			"Tab" => Self::Tab,
			"Backspace" => Self::Backspace,
			"Delete" => Self::Delete,
			"Insert" => Self::Insert,
			"Escape" => Self::Escape,
			"Home" => Self::Home,
			"End" => Self::End,
			"PageUp" => Self::PageUp,
			"PageDown" => Self::PageDown,
			"ArrowUp" => Self::Up,
			"ArrowDown" => Self::Down,
			"ArrowLeft" => Self::Left,
			"ArrowRight" => Self::Right,
			"Space" => Self::Char(' '),
			"Minus" => Self::Char('-'),
			"Equal" => Self::Char('='),
			"BracketLeft" => Self::Char('['),
			"BracketRight" => Self::Char(']'),
			"Backslash" => Self::Char('\\'),
			"Semicolon" => Self::Char(';'),
			"Quote" => Self::Char('\''),
			"Backquote" => Self::Char('`'),
			"Comma" => Self::Char(','),
			"Period" => Self::Char('.'),
			"Slash" => Self::Char('/'),
			"NumpadAdd" => Self::Char('+'),
			"NumpadSubtract" => Self::Char('-'),
			"NumpadMultiply" => Self::Char('*'),
			"NumpadDivide" => Self::Char('/'),
			"NumpadDecimal" => Self::Char('.'),
			"ShiftLeft" | "ShiftRight" => Self::Modifier(ModifierKey::Shift),
			"ControlLeft" | "ControlRight" => Self::Modifier(ModifierKey::Control),
			"AltLeft" | "AltRight" => Self::Modifier(ModifierKey::Alt),
			"MetaLeft" | "MetaRight" | "OSLeft" | "OSRight" => Self::Modifier(ModifierKey::Meta),
			"CapsLock" => Self::Modifier(ModifierKey::CapsLock),
			_ => Self::Unidentified,
		};
		Ok(key)
	}
}

fn single_char(s: Option<&str>) -> Option<char> {
	let mut chars = s?.chars();
	let c = chars.next()?;
	chars.next().is_none().then_some(c)
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(' ') => f.write_str("space"),
			Self::Char(c) => write!(f, "{c}"),
			Self::F(n) => write!(f, "f{n}"),
			Self::Modifier(m) => f.write_str(m.name()),
			Self::Enter => f.write_str("enter"),
			Self::NumpadEnter => f.write_str("numpadenter"),
			Self::Tab => f.write_str("tab"),
			Self::Backspace => f.write_str("backspace"),
			Self::Delete => f.write_str("delete"),
			Self::Insert => f.write_str("insert"),
			Self::Escape => f.write_str("escape"),
			Self::Home => f.write_str("home"),
			Self::End => f.write_str("end"),
			Self::PageUp => f.write_str("pageup"),
			Self::PageDown => f.write_str("pagedown"),
			Self::Up => f.write_str("up"),
			Self::Down => f.write_str("down"),
			Self::Left => f.write_str("left"),
			Self::Right => f.write_str("right"),
			Self::Unidentified => f.write_str("unidentified"),
		}
	}
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
	/// The physical key.
	pub code: KeyCode,
	/// Modifiers held during the press.
	pub modifiers: Modifiers,
}

impl KeyEvent {
	/// Creates a key event with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Creates a character key with no modifiers.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	/// Creates a character key with Ctrl held.
	pub const fn ctrl(c: char) -> Self {
		Self::char(c).with_modifiers(Modifiers::CTRL)
	}

	/// Creates a character key with Meta (Cmd) held.
	pub const fn meta(c: char) -> Self {
		Self::char(c).with_modifiers(Modifiers::META)
	}

	/// Replaces the modifiers.
	pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self { modifiers, ..self }
	}

	/// Parses a host key event from its physical code and modifier flags.
	pub fn from_code(code: &str, modifiers: Modifiers) -> Result<Self, KeyParseError> {
		Ok(Self {
			code: code.parse()?,
			modifiers,
		})
	}

	/// Returns true if this is the character key `c` (ignoring modifiers).
	pub fn is_char(&self, c: char) -> bool {
		matches!(self.code, KeyCode::Char(ch) if ch == c)
	}

	/// Returns true for the main Enter key, whatever the modifiers.
	pub fn is_enter(&self) -> bool {
		self.code == KeyCode::Enter
	}

	/// Returns true for Ctrl+C or Cmd+C.
	pub fn is_copy(&self) -> bool {
		self.is_char('c') && self.modifiers.is_command()
	}
}

impl From<KeyCode> for KeyEvent {
	fn from(code: KeyCode) -> Self {
		Self::new(code)
	}
}

impl fmt::Display for KeyEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let m = self.modifiers;
		for (held, name) in [(m.ctrl, "ctrl"), (m.meta, "meta"), (m.alt, "alt"), (m.shift, "shift")] {
			if held {
				write!(f, "{name}+")?;
			}
		}
		write!(f, "{}", self.code)
	}
}
