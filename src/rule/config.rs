//! Banner configuration: the ordered rule list plus the override switch.

use super::types::{BannerRule, RuleKind};
use crate::error::ConfigError;
use crate::selector::predicates::parse_end_date;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Full banner block configuration as authored in the content editor.
///
/// Rule order is significant: the first matching path rule wins, and the
/// first override / default rule shadows any later duplicates.
///
/// # Examples
///
/// ```
/// use store_banner::rule::{BannerConfig, BannerRule};
///
/// let config = BannerConfig::default()
///     .with_rule(BannerRule::new("Shoes").with_store_path("shoes").with_text("Shoe sale"))
///     .with_rule(BannerRule::new("Default").with_text("Welcome"));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigRecord", rename_all = "camelCase")]
pub struct BannerConfig {
    /// Master switch: show the override rule on every page.
    pub override_flag: bool,

    /// Candidate rules in authoring order.
    pub rules: Vec<BannerRule>,
}

/// Wire shape of the block props. Both the native and the storefront
/// spellings are accepted, together or alone; the native one wins.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigRecord {
    override_flag: Option<bool>,
    #[serde(rename = "override")]
    override_switch: Option<bool>,
    rules: Option<Vec<BannerRule>>,
    banners: Option<Vec<BannerRule>>,
}

impl From<ConfigRecord> for BannerConfig {
    fn from(record: ConfigRecord) -> Self {
        Self {
            override_flag: record
                .override_flag
                .or(record.override_switch)
                .unwrap_or(false),
            rules: record.rules.or(record.banners).unwrap_or_default(),
        }
    }
}

impl BannerConfig {
    pub fn new(rules: Vec<BannerRule>, override_flag: bool) -> Self {
        Self {
            override_flag,
            rules,
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// Accepts both `{"overrideFlag", "rules"}` and the storefront block's
    /// `{"override", "banners"}` shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str::<Self>(json)?.loaded())
    }

    /// Builds a configuration from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value::<Self>(value)?.loaded())
    }

    fn loaded(self) -> Self {
        debug!(
            rules = self.rules.len(),
            override_flag = self.override_flag,
            "loaded banner configuration"
        );
        self
    }

    pub fn with_override(mut self, override_flag: bool) -> Self {
        self.override_flag = override_flag;
        self
    }

    pub fn with_rule(mut self, rule: BannerRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Index of the first rule of the given kind.
    pub fn find_first(&self, kind: RuleKind) -> Option<usize> {
        self.rules.iter().position(|r| r.kind == kind)
    }

    /// Validates the configuration, stopping at the first problem.
    ///
    /// Selection never requires a valid configuration; this is for
    /// authoring tools that want to reject inert or shadowed rules.
    /// Nothing is logged; use [`problems`](Self::problems) for that.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.collect_problems().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collects every configuration problem, logging each at `warn`.
    pub fn problems(&self) -> Vec<ConfigError> {
        let problems = self.collect_problems();
        for problem in &problems {
            warn!("{problem}");
        }
        problems
    }

    fn collect_problems(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        let mut first_override = None;
        let mut first_default = None;

        for (index, rule) in self.rules.iter().enumerate() {
            let seen = match rule.kind {
                RuleKind::Override => Some(&mut first_override),
                RuleKind::Default => Some(&mut first_default),
                RuleKind::PathMatch => None,
            };
            match seen {
                Some(Some(first)) => problems.push(ConfigError::DuplicateSentinel {
                    kind: rule.kind,
                    index,
                    first: *first,
                }),
                Some(slot) => *slot = Some(index),
                None if rule.store_path.is_empty() => {
                    problems.push(ConfigError::EmptyStorePath {
                        index,
                        label: rule.label.clone(),
                    });
                }
                None => {}
            }

            if !rule.end_date.is_empty() && parse_end_date(&rule.end_date).is_none() {
                problems.push(ConfigError::InvalidEndDate {
                    index,
                    label: rule.label.clone(),
                    value: rule.end_date.clone(),
                });
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BannerConfig {
        BannerConfig::default()
            .with_rule(BannerRule::new("Override").with_text("Sale!"))
            .with_rule(BannerRule::new("Shoes").with_store_path("shoes").with_text("Shoes"))
            .with_rule(BannerRule::new("Default").with_image("img.png"))
    }

    #[test]
    fn test_default_config() {
        let config = BannerConfig::default();
        assert!(!config.override_flag);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_store_path() {
        let config = sample().with_rule(BannerRule::new("Hats").with_text("Hats"));
        match config.validate() {
            Err(ConfigError::EmptyStorePath { index, label }) => {
                assert_eq!(index, 3);
                assert_eq!(label, "Hats");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_sentinels_need_no_store_path() {
        let config = BannerConfig::default()
            .with_rule(BannerRule::new("override"))
            .with_rule(BannerRule::new("DEFAULT"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_sentinel() {
        let config = sample().with_rule(BannerRule::new("default").with_text("Second"));
        match config.validate() {
            Err(ConfigError::DuplicateSentinel { kind, index, first }) => {
                assert_eq!(kind, RuleKind::Default);
                assert_eq!(index, 3);
                assert_eq!(first, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_bad_end_date() {
        let config = BannerConfig::default().with_rule(
            BannerRule::new("Shoes")
                .with_store_path("shoes")
                .with_end_date("Feb 14"),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndDate { index: 0, .. })
        ));
    }

    #[test]
    fn test_problems_collects_all() {
        let config = BannerConfig::default()
            .with_rule(BannerRule::new("A"))
            .with_rule(BannerRule::new("B").with_store_path("b").with_end_date("soon"))
            .with_rule(BannerRule::new("Override"))
            .with_rule(BannerRule::new("override"));
        assert_eq!(config.problems().len(), 3);
    }

    #[test]
    fn test_find_first() {
        let config = sample().with_rule(BannerRule::new("Default").with_text("later"));
        assert_eq!(config.find_first(RuleKind::Default), Some(2));
        assert_eq!(config.find_first(RuleKind::Override), Some(0));
        assert_eq!(BannerConfig::default().find_first(RuleKind::Default), None);
    }

    #[test]
    fn test_from_json_storefront_shape() {
        let json = r#"{
            "override": true,
            "banners": [
                {"__editorItemTitle": "Override", "active": true, "text": "Sale!"},
                {"__editorItemTitle": "Shoes", "active": true, "storePath": "shoes", "imgSrc": "s.png"}
            ]
        }"#;
        let config = BannerConfig::from_json(json).unwrap();
        assert!(config.override_flag);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].kind, RuleKind::Override);
        assert_eq!(config.rules[1].image_source, "s.png");
    }

    #[test]
    fn test_from_json_native_shape() {
        let json = r#"{"overrideFlag": false, "rules": [{"label": "Default", "active": true, "text": "Hi"}]}"#;
        let config = BannerConfig::from_json(json).unwrap();
        assert!(!config.override_flag);
        assert_eq!(config.find_first(RuleKind::Default), Some(0));
    }

    #[test]
    fn test_from_json_tolerates_missing_and_null() {
        let config = BannerConfig::from_json(r#"{"override": null}"#).unwrap();
        assert!(!config.override_flag);
        assert!(config.rules.is_empty());

        let config = BannerConfig::from_json(r#"{"banners": null}"#).unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            BannerConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_value() {
        let value = serde_json::json!({"banners": [{"__editorItemTitle": "default", "text": "x"}]});
        let config = BannerConfig::from_value(value).unwrap();
        assert_eq!(config.rules[0].kind, RuleKind::Default);
    }

    #[test]
    fn test_from_json_both_spellings() {
        let json = r#"{
            "overrideFlag": false,
            "override": true,
            "rules": [{"label": "Default", "text": "native"}],
            "banners": [{"label": "Default", "text": "storefront"}]
        }"#;
        let config = BannerConfig::from_json(json).unwrap();
        assert!(!config.override_flag);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].text, "native");
    }

    #[test]
    fn test_loaders_agree() {
        let value = serde_json::json!({"override": true, "banners": [{"label": "Override", "text": "x"}]});
        let from_json = BannerConfig::from_json(&value.to_string()).unwrap();
        let from_value = BannerConfig::from_value(value).unwrap();
        assert_eq!(from_json, from_value);
    }
}
