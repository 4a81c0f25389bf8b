//! Banner rule data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a rule is reached during selection.
///
/// Assigned once from the rule label when the rule is built or loaded,
/// so selection switches on this tag instead of re-reading label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleKind {
    /// Shown on every page while the global override flag is on.
    Override,

    /// Fallback when nothing else applies.
    Default,

    /// Matched against the request path by substring containment.
    #[default]
    PathMatch,
}

impl RuleKind {
    /// Classifies a label. Comparison is case-insensitive and exact
    /// (no trimming), so `"Default "` is an ordinary path rule.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("override") {
            RuleKind::Override
        } else if label.eq_ignore_ascii_case("default") {
            RuleKind::Default
        } else {
            RuleKind::PathMatch
        }
    }

    /// Returns `true` for the two sentinel kinds.
    pub fn is_sentinel(self) -> bool {
        !matches!(self, RuleKind::PathMatch)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Override => "override",
            RuleKind::Default => "default",
            RuleKind::PathMatch => "path-match",
        };
        f.write_str(name)
    }
}

/// One configured banner candidate.
///
/// Optional text fields are stored as plain strings; an empty string
/// means the field is absent.
///
/// # Examples
///
/// ```
/// use store_banner::rule::{BannerRule, RuleKind};
///
/// let rule = BannerRule::new("Shoes")
///     .with_store_path("shoes")
///     .with_text("Shoe sale")
///     .with_end_date("2030-01-31");
///
/// assert_eq!(rule.kind, RuleKind::PathMatch);
/// assert!(rule.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRecord", rename_all = "camelCase")]
pub struct BannerRule {
    /// Display name; `"override"` and `"default"` mark the sentinel rules.
    pub label: String,

    /// Derived from `label`.
    #[serde(skip)]
    pub kind: RuleKind,

    /// Whether the rule is eligible once matched.
    pub active: bool,

    /// Last calendar day the rule is shown (`YYYY-MM-DD`), or empty.
    pub end_date: String,

    /// Path fragment searched for in the request path.
    pub store_path: String,

    /// Image URL. When set, the rule renders as an image banner.
    pub image_source: String,

    /// Headline for text banners.
    pub text: String,

    /// Secondary line or button caption for text banners.
    pub sub_text: String,

    /// Link target wrapping the banner.
    pub link: String,

    /// Styling tag such as `"standard"` or `"button"`.
    pub style_variant: String,
}

impl BannerRule {
    /// Creates an active rule with the given label and no content.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            kind: RuleKind::from_label(&label),
            label,
            active: true,
            end_date: String::new(),
            store_path: String::new(),
            image_source: String::new(),
            text: String::new(),
            sub_text: String::new(),
            link: String::new(),
            style_variant: String::new(),
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = end_date.into();
        self
    }

    pub fn with_store_path(mut self, store_path: impl Into<String>) -> Self {
        self.store_path = store_path.into();
        self
    }

    pub fn with_image(mut self, source: impl Into<String>) -> Self {
        self.image_source = source.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        self.sub_text = sub_text.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_style_variant(mut self, style_variant: impl Into<String>) -> Self {
        self.style_variant = style_variant.into();
        self
    }

    /// Returns `true` if the rule renders as an image.
    pub fn has_image(&self) -> bool {
        !self.image_source.is_empty()
    }

    /// Returns `true` if neither text nor image is configured.
    pub fn is_empty_content(&self) -> bool {
        self.text.is_empty() && self.image_source.is_empty()
    }
}

/// Wire shape of a rule as delivered by the content-management layer.
///
/// The storefront block's field names are separate fields rather than
/// serde aliases, so a record carrying both spellings still loads; the
/// native name wins. Missing and `null` fields become empty / `false`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RuleRecord {
    label: Option<String>,
    #[serde(rename = "__editorItemTitle")]
    editor_item_title: Option<String>,
    active: Option<bool>,
    end_date: Option<String>,
    store_path: Option<String>,
    image_source: Option<String>,
    img_src: Option<String>,
    text: Option<String>,
    sub_text: Option<String>,
    link: Option<String>,
    style_variant: Option<String>,
    block_class: Option<String>,
}

impl From<RuleRecord> for BannerRule {
    fn from(record: RuleRecord) -> Self {
        let label = record
            .label
            .or(record.editor_item_title)
            .unwrap_or_default();
        Self {
            kind: RuleKind::from_label(&label),
            label,
            active: record.active.unwrap_or(false),
            end_date: record.end_date.unwrap_or_default(),
            store_path: record.store_path.unwrap_or_default(),
            image_source: record.image_source.or(record.img_src).unwrap_or_default(),
            text: record.text.unwrap_or_default(),
            sub_text: record.sub_text.unwrap_or_default(),
            link: record.link.unwrap_or_default(),
            style_variant: record
                .style_variant
                .or(record.block_class)
                .unwrap_or_default(),
        }
    }
}
