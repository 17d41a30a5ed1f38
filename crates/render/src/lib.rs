//! Display side of protected-region editing.
//!
//! Maps the editor mode to a theme, decides when a prop change needs a
//! redraw, and forces the host to re-tokenize after it swaps in new content.
//! Themes are plain descriptors handed in at construction; nothing is
//! registered in global state.

mod controller;
mod presentation;
mod props;
mod theme;

pub use controller::{ModeTransition, RenderModeController, TokenCache};
pub use presentation::{EditorOptions, Presentation, WordWrap};
pub use props::{EditorProps, needs_redraw};
pub use theme::{Palette, ThemeColors, ThemeDescriptor, ThemeId, ThemeSet, TokenRule};
