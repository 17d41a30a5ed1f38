//! Protected-region key guard.
//!
//! The host widget calls [`RegionGuard::intercept`] from its pre-dispatch key
//! hook, before its own default handling runs. The guard rebuilds the set of
//! protected spans from the latest [`LineTags`] on every event, so tag
//! updates between keystrokes never leave a stale cache behind.
//!
//! [`LineTags`]: bulwark_primitives::LineTags

mod decision;
mod guard;
mod host;
mod key_class;
mod spans;

pub use decision::{AllowReason, BlockReason, Decision};
pub use guard::RegionGuard;
pub use host::{DocumentView, InterceptedKey, KeyDispatch};
pub use key_class::KeyClass;
pub use spans::ImmutableSpanSet;
