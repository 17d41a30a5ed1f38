use bulwark_config::{Config, WrapColumns};
use bulwark_primitives::EditorMode;

use crate::presentation::{EditorOptions, Presentation};
use crate::props::EditorProps;
use crate::theme::{ThemeDescriptor, ThemeId, ThemeSet};

/// The host's syntax token cache.
pub trait TokenCache {
	/// Line count of the attached model, or `None` if no model is attached.
	fn line_count(&self) -> Option<usize>;

	/// Tokenizes lines `1..=through_line` before the next paint.
	fn force_tokenization(&mut self, through_line: usize);
}

/// A change of editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
	/// Mode before the change.
	pub from: EditorMode,
	/// Mode after the change.
	pub to: EditorMode,
}

/// Tracks the editor mode and keeps theme and token cache in step with it.
#[derive(Debug, Clone)]
pub struct RenderModeController {
	themes: ThemeSet,
	wrap_column: WrapColumns,
	mode: EditorMode,
}

impl RenderModeController {
	/// Creates a controller in editable mode.
	pub fn new(themes: ThemeSet, config: &Config) -> Self {
		Self {
			themes,
			wrap_column: config.wrap_column,
			mode: EditorMode::Editable,
		}
	}

	/// Creates a controller with the configured themes.
	pub fn from_config(config: &Config) -> Self {
		Self::new(ThemeSet::from_config(config), config)
	}

	/// Current mode.
	pub fn mode(&self) -> EditorMode {
		self.mode
	}

	/// Theme id for `mode`.
	pub fn select_theme(&self, mode: EditorMode) -> &ThemeId {
		&self.themes.get(mode).id
	}

	/// Full theme descriptor for `mode`.
	pub fn theme(&self, mode: EditorMode) -> &ThemeDescriptor {
		self.themes.get(mode)
	}

	/// Descriptors the host must define before the first paint.
	pub fn themes(&self) -> &ThemeSet {
		&self.themes
	}

	/// Applies the host's read-only flag.
	///
	/// Returns the transition if the mode changed.
	pub fn set_read_only(&mut self, read_only: bool) -> Option<ModeTransition> {
		let to = EditorMode::from_read_only(read_only);
		if to == self.mode {
			return None;
		}
		let transition = ModeTransition { from: self.mode, to };
		self.mode = to;
		tracing::debug!(from = %transition.from, to = %transition.to, theme = %self.select_theme(to), "Editor mode changed");
		Some(transition)
	}

	/// Re-tokenizes the whole document after the host replaced its text.
	///
	/// Returns the number of lines scheduled, or `None` if the host has no
	/// model attached yet.
	pub fn on_external_content_replace(&self, cache: &mut impl TokenCache) -> Option<usize> {
		let lines = cache.line_count()?;
		cache.force_tokenization(lines);
		tracing::trace!(lines, "Forced tokenization after content replace");
		Some(lines)
	}

	/// Widget settings for `props`.
	///
	/// Condensed display wraps at the wider configured column and hides the
	/// minimap. The theme follows the props' read-only flag, so a read-only document
	/// never paints with the editable theme.
	pub fn presentation(&self, props: &EditorProps) -> Presentation {
		let options = EditorOptions {
			minimap_enabled: !props.condensed,
			read_only: props.read_only,
			..EditorOptions::resource_yaml(self.wrap_column.column(props.condensed))
		};
		Presentation {
			theme: self.select_theme(props.mode()).clone(),
			options,
			visible: !props.hidden,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::presentation::WordWrap;

	#[derive(Default)]
	struct Cache {
		lines: Option<usize>,
		forced: Vec<usize>,
	}

	impl TokenCache for Cache {
		fn line_count(&self) -> Option<usize> {
			self.lines
		}

		fn force_tokenization(&mut self, through_line: usize) {
			self.forced.push(through_line);
		}
	}

	fn controller() -> RenderModeController {
		RenderModeController::from_config(&Config::default())
	}

	#[test]
	fn test_select_theme() {
		let c = controller();
		assert_eq!(c.select_theme(EditorMode::Editable), "resource-editor");
		assert_eq!(c.select_theme(EditorMode::ReadOnly), "readonly-resource-editor");
		assert_eq!(c.select_theme(EditorMode::ReadOnly), c.select_theme(EditorMode::ReadOnly));
	}

	#[test]
	fn test_select_theme_ignores_current_mode() {
		let mut c = controller();
		let before = c.select_theme(EditorMode::Editable).clone();
		c.set_read_only(true);
		assert_eq!(c.select_theme(EditorMode::Editable), &before);
	}

	#[test]
	fn test_set_read_only_reports_changes_only() {
		let mut c = controller();
		assert_eq!(c.set_read_only(false), None);
		assert_eq!(
			c.set_read_only(true),
			Some(ModeTransition {
				from: EditorMode::Editable,
				to: EditorMode::ReadOnly,
			})
		);
		assert_eq!(c.set_read_only(true), None);
		assert_eq!(c.mode(), EditorMode::ReadOnly);
		assert!(c.set_read_only(false).is_some());
		assert_eq!(c.mode(), EditorMode::Editable);
	}

	#[test]
	fn test_content_replace_tokenizes_every_line_once() {
		let mut cache = Cache {
			lines: Some(42),
			..Default::default()
		};
		assert_eq!(controller().on_external_content_replace(&mut cache), Some(42));
		assert_eq!(cache.forced, vec![42]);
	}

	#[test]
	fn test_content_replace_without_model_is_noop() {
		let mut cache = Cache::default();
		assert_eq!(controller().on_external_content_replace(&mut cache), None);
		assert!(cache.forced.is_empty());
	}

	#[test]
	fn test_presentation_normal() {
		let p = controller().presentation(&EditorProps::new("a: 1\n"));
		assert_eq!(p.theme, "resource-editor");
		assert_eq!(p.options.word_wrap, WordWrap::Column(256));
		assert!(p.options.minimap_enabled);
		assert!(!p.options.read_only);
		assert!(p.visible);
		assert_eq!(p.options.tab_size, 2);
		assert_eq!(p.options.language, "yaml");
	}

	#[test]
	fn test_presentation_condensed_read_only_hidden() {
		let props = EditorProps::new("a: 1\n").condensed(true).read_only(true).hidden(true);
		let p = controller().presentation(&props);
		assert_eq!(p.theme, "readonly-resource-editor");
		assert_eq!(p.options.word_wrap, WordWrap::Column(512));
		assert!(!p.options.minimap_enabled);
		assert!(p.options.read_only);
		assert!(!p.visible);
	}

	#[test]
	fn test_presentation_uses_configured_wrap() {
		let config = Config::from_toml_str("[wrap-column]\nnormal = 100\ncondensed = 300").unwrap();
		let c = RenderModeController::from_config(&config);
		let normal = c.presentation(&EditorProps::new(""));
		let condensed = c.presentation(&EditorProps::new("").condensed(true));
		assert_eq!(normal.options.word_wrap, WordWrap::Column(100));
		assert_eq!(condensed.options.word_wrap, WordWrap::Column(300));
		assert!(!condensed.options.minimap_enabled);
	}
}
