//! Core types for protected-region editing: positions, spans, selections, line tags and keys.

/// Editable vs read-only document mode.
pub mod mode;
/// Key event types: physical key codes and modifiers.
pub mod key;
/// Per-line classification supplied by the decoration classifier.
pub mod line_tag;
/// Line/column positions.
pub mod position;
/// Selection types for single and multi-cursor editing.
pub mod selection;
/// Inclusive line/column spans.
pub mod span;

pub use key::{KeyCode, KeyEvent, KeyParseError, Modifiers};
pub use line_tag::{DecorationRow, DecorationType, LineTag, LineTags};
pub use mode::EditorMode;
pub use position::{ColNr, LineNr, Position};
pub use selection::Selection;
pub use span::Span;
