//! Deriving the store path from a full storefront URL.

use super::types::RequestContext;
use crate::error::ContextError;
use tracing::debug;

/// Marker preceding the store path in storefront URLs.
pub const STORE_SEGMENT: &str = ".com/store/";

/// Query fragment present when the page runs inside the site editor.
const EDITOR_MARKER: &str = "siteEditor=true";

/// Extracts the lower-cased store path from `href`.
///
/// The path runs from the first store marker up to the next one, if any.
/// In editor mode the query string is dropped, since the editor frame
/// appends its own parameters. Outside the editor the query is kept.
pub fn store_path_from_url(href: &str, editor_mode: bool) -> Result<String, ContextError> {
    let mut segments = href.split(STORE_SEGMENT).skip(1);
    let rest = segments
        .next()
        .ok_or_else(|| ContextError::MissingStoreSegment(href.to_string()))?;

    let path = if editor_mode {
        rest.split('?').next().unwrap_or(rest)
    } else {
        rest
    };
    Ok(path.to_lowercase())
}

impl RequestContext {
    /// Builds a context from the full page URL, detecting editor mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use store_banner::context::RequestContext;
    ///
    /// let ctx = RequestContext::from_url(
    ///     "https://shop.example.com/store/Widgets/blue?siteEditor=true",
    /// ).unwrap();
    ///
    /// assert!(ctx.editor_mode);
    /// assert_eq!(ctx.current_path, "widgets/blue");
    /// ```
    pub fn from_url(href: &str) -> Result<Self, ContextError> {
        let editor_mode = href.contains(EDITOR_MARKER);
        let current_path = store_path_from_url(href, editor_mode)?;
        debug!(%current_path, editor_mode, "derived request context");
        Ok(RequestContext::new(current_path).with_editor_mode(editor_mode))
    }
}
