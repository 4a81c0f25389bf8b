//! Selection output types.

use crate::rule::BannerRule;
use serde::{Deserialize, Serialize};

/// What the banner slot should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SelectionResult {
    /// Render nothing.
    None,

    /// Layout placeholder shown until a decision is available.
    Blank,

    /// Image banner.
    Image { source: String, link: String },

    /// Text banner.
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        sub_text: String,
        link: String,
        style_variant: String,
    },
}

impl SelectionResult {
    /// Renders a rule as an image if it has an image source, else as text.
    pub fn from_rule(rule: &BannerRule) -> Self {
        if rule.has_image() {
            SelectionResult::Image {
                source: rule.image_source.clone(),
                link: rule.link.clone(),
            }
        } else {
            SelectionResult::Text {
                text: rule.text.clone(),
                sub_text: rule.sub_text.clone(),
                link: rule.link.clone(),
                style_variant: rule.style_variant.clone(),
            }
        }
    }

    /// Link the rendered banner should be wrapped in, if any.
    pub fn link(&self) -> Option<&str> {
        match self {
            SelectionResult::Image { link, .. } | SelectionResult::Text { link, .. }
                if !link.is_empty() =>
            {
                Some(link.as_str())
            }
            _ => None,
        }
    }

    /// Returns `true` for variants that carry banner content.
    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            SelectionResult::Image { .. } | SelectionResult::Text { .. }
        )
    }
}

/// Which step of the selection produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// The override rule, while the override flag was on.
    Override,
    /// A rule whose store path matched the request.
    PathMatch,
    /// The default rule.
    Default,
    /// Fallback was needed but no default rule exists.
    NoDefault,
}

/// A selection result together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// What to display.
    pub result: SelectionResult,

    /// Which step decided.
    pub source: SelectionSource,

    /// Index of the rule that produced `result`, if any.
    pub rule_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rule_image_wins_over_text() {
        let rule = BannerRule::new("x").with_image("a.png").with_text("ignored");
        assert_eq!(
            SelectionResult::from_rule(&rule),
            SelectionResult::Image {
                source: "a.png".into(),
                link: String::new()
            }
        );
    }

    #[test]
    fn test_from_rule_text_fields() {
        let rule = BannerRule::new("x")
            .with_text("Sale")
            .with_sub_text("Shop now")
            .with_link("/sale")
            .with_style_variant("button");
        assert_eq!(
            SelectionResult::from_rule(&rule),
            SelectionResult::Text {
                text: "Sale".into(),
                sub_text: "Shop now".into(),
                link: "/sale".into(),
                style_variant: "button".into(),
            }
        );
    }

    #[test]
    fn test_link() {
        let linked = SelectionResult::from_rule(&BannerRule::new("x").with_image("a").with_link("/a"));
        assert_eq!(linked.link(), Some("/a"));
        let unlinked = SelectionResult::from_rule(&BannerRule::new("x").with_text("t"));
        assert_eq!(unlinked.link(), None);
        assert_eq!(SelectionResult::Blank.link(), None);
    }

    #[test]
    fn test_visibility() {
        assert!(!SelectionResult::None.is_visible());
        assert!(!SelectionResult::Blank.is_visible());
        assert!(SelectionResult::from_rule(&BannerRule::new("x")).is_visible());
    }

    #[test]
    fn test_serialize_tagged() {
        let value = serde_json::to_value(SelectionResult::Text {
            text: "Hi".into(),
            sub_text: "there".into(),
            link: String::new(),
            style_variant: "standard".into(),
        })
        .unwrap();
        assert_eq!(value["kind"], "text");
        assert_eq!(value["subText"], "there");
        assert_eq!(value["styleVariant"], "standard");

        let value = serde_json::to_value(SelectionResult::None).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "none"}));
    }
}
