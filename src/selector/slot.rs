//! Placeholder-then-final banner slot.

use super::engine::BannerSelector;
use super::types::SelectionResult;
use crate::context::RequestContext;
use crate::rule::BannerConfig;
use tracing::trace;

/// Holds the banner currently shown in one page slot.
///
/// A new slot shows [`SelectionResult::Blank`] so the layout keeps its
/// height until the first decision. [`update`](Self::update) decides once
/// per page and UTC day; repeated calls for the same page on the same day
/// return the cached result. End dates only take effect at day boundaries,
/// so a cached decision never outlives a rule's expiry. The slot never goes
/// back to `Blank` after a decision.
///
/// # Examples
///
/// ```
/// use store_banner::context::RequestContext;
/// use store_banner::rule::{BannerConfig, BannerRule};
/// use store_banner::selector::{BannerSlot, SelectionResult};
///
/// let config = BannerConfig::default().with_rule(BannerRule::new("Default").with_text("Hi"));
/// let mut slot = BannerSlot::new();
/// assert_eq!(slot.current(), &SelectionResult::Blank);
///
/// slot.update(&config, &RequestContext::new("store/hats"));
/// assert!(slot.current().is_visible());
/// ```
#[derive(Debug, Clone)]
pub struct BannerSlot {
    current: SelectionResult,
    decided_for: Option<RequestContext>,
}

impl BannerSlot {
    pub fn new() -> Self {
        Self {
            current: SelectionResult::Blank,
            decided_for: None,
        }
    }

    /// What to render right now.
    pub fn current(&self) -> &SelectionResult {
        &self.current
    }

    /// Returns `true` once a decision has been made.
    pub fn is_decided(&self) -> bool {
        self.decided_for.is_some()
    }

    /// Decides for `context` unless the slot already holds a decision
    /// for the same page made on the same UTC day.
    pub fn update(&mut self, config: &BannerConfig, context: &RequestContext) -> &SelectionResult {
        let unchanged = self.decided_for.as_ref().is_some_and(|prev| {
            prev.same_page(context) && prev.now.date_naive() == context.now.date_naive()
        });

        if unchanged {
            trace!(path = %context.current_path, "banner slot unchanged");
        } else {
            self.current = BannerSelector::select(config, context);
            self.decided_for = Some(context.clone());
        }
        &self.current
    }

    /// Discards the cached decision so the next update recomputes,
    /// e.g. after the configuration was edited. Keeps showing the
    /// previous result until then.
    pub fn invalidate(&mut self) {
        self.decided_for = None;
    }
}

impl Default for BannerSlot {
    fn default() -> Self {
        Self::new()
    }
}
