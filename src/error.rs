//! Error types for configuration loading and context derivation.
//!
//! Banner selection itself never fails; these errors surface only at the
//! integration boundary (parsing a CMS payload, validating it, or deriving
//! a request context from a URL).

use crate::rule::RuleKind;
use thiserror::Error;

/// Problems found while loading or validating a [`BannerConfig`](crate::rule::BannerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed banner configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rule {index} ({label:?}) has no store path and can never match")]
    EmptyStorePath { index: usize, label: String },

    #[error("Rule {index} ({label:?}) has an invalid end date {value:?}, expected YYYY-MM-DD")]
    InvalidEndDate {
        index: usize,
        label: String,
        value: String,
    },

    #[error("Rule {index} is a second {kind} rule; rule {first} takes precedence")]
    DuplicateSentinel {
        kind: RuleKind,
        index: usize,
        first: usize,
    },
}

/// Problems deriving a [`RequestContext`](crate::context::RequestContext) from a URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("URL has no store segment: {0}")]
    MissingStoreSegment(String),
}
