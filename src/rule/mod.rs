//! Banner rules and their configuration.
//!
//! Each [`BannerRule`] is classified into a [`RuleKind`] when it is built
//! or deserialized. The override and default rules are recognized by
//! label (case-insensitive); every other rule matches by store path.

mod config;
mod types;

pub use config::BannerConfig;
pub use types::{BannerRule, RuleKind};
