use bulwark_guard::DocumentView;
use bulwark_primitives::Selection;
use bulwark_render::TokenCache;

/// Handle on the live editor widget.
///
/// The guard reads the cursor and line lengths through [`DocumentView`]; the
/// render controller re-tokenizes through [`TokenCache`].
pub trait EditorSession: DocumentView + TokenCache {
	/// Snapshot of the current cursors and selections.
	fn selection(&self) -> Selection;
}
