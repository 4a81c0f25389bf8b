//! Storefront promotional banner selection.
//!
//! Decides which banner, if any, a store page shows:
//!
//! - **Rules** ([`rule`]): ordered banner candidates loaded from the content
//!   editor, each classified as override, default or path-matching.
//! - **Context** ([`context`]): the current store path, editor flag and
//!   clock, optionally derived from the page URL.
//! - **Selection** ([`selector`]): the override / path match / expiration /
//!   default policy, plus a placeholder-aware slot and batch evaluation.
//!
//! Rendering is left to the caller; selection only reports which variant
//! to draw and with what content.
//!
//! # Features
//!
//! - `parallel`: evaluate [`selector::select_many`] on the rayon pool.
//! - `wasm`: JavaScript bindings (`selectBanner`, `selectBannerForPath`).

pub mod context;
pub mod error;
pub mod rule;
pub mod selector;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use context::RequestContext;
pub use error::{ConfigError, ContextError};
pub use rule::{BannerConfig, BannerRule, RuleKind};
pub use selector::{select_banner, BannerSelector, SelectionResult};
