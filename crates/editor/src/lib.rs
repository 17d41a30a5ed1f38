//! Protected-region editor wiring.
//!
//! [`ProtectedEditor`] owns a host [`EditorSession`] between an explicit
//! [`attach`](ProtectedEditor::attach) and [`detach`](ProtectedEditor::detach).
//! While attached, the host routes every key through
//! [`on_key_down`](ProtectedEditor::on_key_down) before its own default
//! handling, and every prop change through [`update`](ProtectedEditor::update).
//!
//! ```text
//! host key event ──► on_key_down ──► RegionGuard ──► allow │ stop + prevent
//! host props     ──► update ──► needs_redraw ──► theme, re-tokenize, Presentation
//! ```
//!
//! [`RopeSession`] is an in-memory host backed by a rope, for embedders that
//! have no widget of their own and for tests.

mod editor;
mod rope_session;
mod session;

pub use editor::ProtectedEditor;
pub use rope_session::RopeSession;
pub use session::EditorSession;
