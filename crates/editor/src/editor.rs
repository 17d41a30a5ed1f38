use bulwark_config::Config;
use bulwark_guard::{Decision, KeyDispatch, RegionGuard};
use bulwark_primitives::{DecorationRow, EditorMode, KeyEvent, LineTags};
use bulwark_render::{EditorProps, Presentation, RenderModeController, needs_redraw};

use crate::session::EditorSession;

/// A host session with the protected-region guard and render controller attached.
///
/// Construction is the setup step and [`detach`](Self::detach) the teardown;
/// there are no implicit lifecycle hooks.
#[derive(Debug)]
pub struct ProtectedEditor<S: EditorSession> {
	session: S,
	guard: RegionGuard,
	render: RenderModeController,
	tags: LineTags,
	props: Option<EditorProps>,
}

impl<S: EditorSession> ProtectedEditor<S> {
	/// Attaches to a live session.
	pub fn attach(session: S, config: &Config) -> Self {
		let guard = RegionGuard::from_config(config);
		tracing::debug!(max_line_width = guard.max_line_width(), "Attached protected-region guard");
		Self {
			session,
			guard,
			render: RenderModeController::from_config(config),
			tags: LineTags::new(),
			props: None,
		}
	}

	/// Detaches and hands the session back to the host.
	pub fn detach(self) -> S {
		tracing::debug!("Detached protected-region guard");
		self.session
	}

	/// The attached session.
	pub fn session(&self) -> &S {
		&self.session
	}

	/// The attached session, for host-side edits and cursor moves.
	pub fn session_mut(&mut self) -> &mut S {
		&mut self.session
	}

	/// Current editor mode.
	pub fn mode(&self) -> EditorMode {
		self.render.mode()
	}

	/// The render controller.
	pub fn render(&self) -> &RenderModeController {
		&self.render
	}

	/// Current line tags.
	pub fn line_tags(&self) -> &LineTags {
		&self.tags
	}

	/// Replaces the line tags wholesale.
	pub fn set_line_tags(&mut self, tags: LineTags) {
		self.tags = tags;
	}

	/// Replaces the line tags from classifier rows.
	pub fn set_decorations(&mut self, rows: &[DecorationRow]) {
		self.set_line_tags(LineTags::from_decorations(rows));
	}

	/// Pre-dispatch key filter.
	///
	/// Call before the widget's default key handling. A blocked key comes
	/// back with propagation stopped and its default action prevented.
	pub fn on_key_down(&self, dispatch: &mut impl KeyDispatch) -> Decision {
		let selection = self.session.selection();
		self.guard
			.intercept(dispatch, &selection, &self.tags, self.render.mode(), &self.session)
	}

	/// Returns true if `key` would be blocked right now.
	pub fn should_block(&self, key: &KeyEvent) -> bool {
		let selection = self.session.selection();
		self.guard
			.should_block(key, &selection, &self.tags, self.render.mode(), &self.session)
	}

	/// Applies new props from the host.
	///
	/// Returns `None` when nothing visible changed. Otherwise applies the
	/// read-only flag, re-tokenizes once if the content was replaced, and
	/// returns the presentation to paint. The first update always counts as
	/// a content replace.
	pub fn update(&mut self, next: EditorProps) -> Option<Presentation> {
		let (redraw, content_replaced) = match &self.props {
			Some(prev) => (needs_redraw(prev, &next), prev.content_differs(&next)),
			None => (true, true),
		};
		if !redraw {
			tracing::trace!("Skipped redraw; props unchanged");
			self.props = Some(next);
			return None;
		}

		self.render.set_read_only(next.read_only);
		if content_replaced {
			self.render.on_external_content_replace(&mut self.session);
		}
		let presentation = self.render.presentation(&next);
		self.props = Some(next);
		Some(presentation)
	}

	/// Presentation for the last applied props, if any.
	pub fn presentation(&self) -> Option<Presentation> {
		self.props.as_ref().map(|props| self.render.presentation(props))
	}
}
