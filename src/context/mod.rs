//! Request context: the current store path, editor flag and clock.
//!
//! Selection never looks at a browser or router directly. Callers either
//! build a [`RequestContext`] from a path they already resolved, or derive
//! one from the full page URL with [`RequestContext::from_url`].

mod types;
mod url;

pub use types::RequestContext;
pub use url::{store_path_from_url, STORE_SEGMENT};
