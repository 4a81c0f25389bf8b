//! Request context type.

use chrono::{DateTime, Utc};

/// Per-request input to banner selection. Never persisted.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use store_banner::context::RequestContext;
///
/// let ctx = RequestContext::new("store/widgets")
///     .with_editor_mode(true)
///     .with_now(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
///
/// assert!(ctx.editor_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The part of the URL identifying the current store page.
    pub current_path: String,

    /// Whether the page is rendered inside the content editor preview.
    pub editor_mode: bool,

    /// Evaluation time. Defaults to the wall clock at construction.
    pub now: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            editor_mode: false,
            now: Utc::now(),
        }
    }

    pub fn with_editor_mode(mut self, editor_mode: bool) -> Self {
        self.editor_mode = editor_mode;
        self
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Returns `true` if `other` targets the same page, ignoring the clock.
    pub fn same_page(&self, other: &RequestContext) -> bool {
        self.editor_mode == other.editor_mode && self.current_path == other.current_path
    }
}
