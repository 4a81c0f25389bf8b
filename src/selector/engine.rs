//! Banner selection.
//!
//! Steps, first applicable wins:
//!
//! 1. Override: with the flag on, the first override rule is resolved.
//!    A missing override rule falls through to step 2.
//! 2. Path match: the first non-sentinel rule whose store path is
//!    contained in the request path is resolved.
//! 3. Default: the first default rule is rendered as-is, ignoring its
//!    `active` flag and end date. No default rule means [`SelectionResult::None`].
//!
//! Resolving a rule (steps 1 and 2) yields `None` for an active rule with
//! no content, falls back to step 3 when the rule is expired or inactive,
//! and otherwise renders the rule.

use super::predicates::{is_expired, match_path};
use super::types::{Selection, SelectionResult, SelectionSource};
use crate::context::RequestContext;
use crate::rule::{BannerConfig, BannerRule, RuleKind};
use tracing::debug;

/// Selects the banner to show for `context`.
///
/// Pure and total: identical inputs give identical results and no input
/// causes a panic.
///
/// # Examples
///
/// ```
/// use store_banner::context::RequestContext;
/// use store_banner::rule::BannerRule;
/// use store_banner::selector::{select_banner, SelectionResult};
///
/// let rules = vec![BannerRule::new("Default").with_image("img.png")];
/// let ctx = RequestContext::new("store/unknown");
///
/// assert_eq!(
///     select_banner(&rules, false, &ctx),
///     SelectionResult::Image { source: "img.png".into(), link: String::new() },
/// );
/// ```
pub fn select_banner(
    rules: &[BannerRule],
    override_flag: bool,
    context: &RequestContext,
) -> SelectionResult {
    select_banner_traced(rules, override_flag, context).result
}

/// Like [`select_banner`], also reporting which step and rule decided.
pub fn select_banner_traced(
    rules: &[BannerRule],
    override_flag: bool,
    context: &RequestContext,
) -> Selection {
    let selection = if let Some(index) = override_step(rules, override_flag) {
        resolve_rule(rules, index, SelectionSource::Override, context)
    } else if let Some(index) = path_match_step(rules, &context.current_path) {
        resolve_rule(rules, index, SelectionSource::PathMatch, context)
    } else {
        default_step(rules)
    };

    debug!(
        path = %context.current_path,
        source = ?selection.source,
        rule = ?selection.rule_index,
        "banner selected"
    );
    selection
}

/// Executes banner selection against a loaded configuration.
pub struct BannerSelector;

impl BannerSelector {
    /// Selects the banner for `context` under `config`.
    pub fn select(config: &BannerConfig, context: &RequestContext) -> SelectionResult {
        select_banner(&config.rules, config.override_flag, context)
    }

    /// Selects the banner and reports its provenance.
    pub fn select_traced(config: &BannerConfig, context: &RequestContext) -> Selection {
        select_banner_traced(&config.rules, config.override_flag, context)
    }
}

impl BannerConfig {
    /// Shorthand for [`BannerSelector::select`].
    pub fn select(&self, context: &RequestContext) -> SelectionResult {
        BannerSelector::select(self, context)
    }
}

fn first_of_kind(rules: &[BannerRule], kind: RuleKind) -> Option<usize> {
    rules.iter().position(|r| r.kind == kind)
}

fn override_step(rules: &[BannerRule], override_flag: bool) -> Option<usize> {
    if !override_flag {
        return None;
    }
    let found = first_of_kind(rules, RuleKind::Override);
    if found.is_none() {
        debug!("override flag set but no override rule configured");
    }
    found
}

fn path_match_step(rules: &[BannerRule], current_path: &str) -> Option<usize> {
    rules
        .iter()
        .position(|r| r.kind == RuleKind::PathMatch && match_path(current_path, &r.store_path))
}

fn default_step(rules: &[BannerRule]) -> Selection {
    match first_of_kind(rules, RuleKind::Default) {
        Some(index) => Selection {
            result: SelectionResult::from_rule(&rules[index]),
            source: SelectionSource::Default,
            rule_index: Some(index),
        },
        None => Selection {
            result: SelectionResult::None,
            source: SelectionSource::NoDefault,
            rule_index: None,
        },
    }
}

fn resolve_rule(
    rules: &[BannerRule],
    index: usize,
    source: SelectionSource,
    context: &RequestContext,
) -> Selection {
    let rule = &rules[index];

    // Active with no content: the page explicitly wants no banner.
    if rule.active && rule.is_empty_content() {
        return Selection {
            result: SelectionResult::None,
            source,
            rule_index: Some(index),
        };
    }

    if is_expired(&rule.end_date, context.now) {
        debug!(label = %rule.label, end_date = %rule.end_date, "rule expired");
        return default_step(rules);
    }

    if !rule.active {
        debug!(label = %rule.label, "rule inactive");
        return default_step(rules);
    }

    Selection {
        result: SelectionResult::from_rule(rule),
        source,
        rule_index: Some(index),
    }
}
