//! Evaluating many request contexts at once.

use super::engine::BannerSelector;
use super::types::SelectionResult;
use crate::context::RequestContext;
use crate::rule::BannerConfig;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Selects a banner for each context, preserving input order.
///
/// With the `parallel` feature the contexts are evaluated on the rayon
/// thread pool; selection has no shared state, so results are identical
/// either way.
pub fn select_many(config: &BannerConfig, contexts: &[RequestContext]) -> Vec<SelectionResult> {
    #[cfg(feature = "parallel")]
    {
        contexts
            .par_iter()
            .map(|ctx| BannerSelector::select(config, ctx))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        contexts
            .iter()
            .map(|ctx| BannerSelector::select(config, ctx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::BannerRule;

    #[test]
    fn test_order_preserved() {
        let config = BannerConfig::default()
            .with_rule(BannerRule::new("Shoes").with_store_path("shoes").with_image("s.png"))
            .with_rule(BannerRule::new("Hats").with_store_path("hats").with_image("h.png"))
            .with_rule(BannerRule::new("Default").with_image("d.png"));

        let paths = ["hats", "shoes", "socks", "hats/wool", "running-shoes"];
        let contexts: Vec<_> = paths.iter().map(|p| RequestContext::new(*p)).collect();
        let results = select_many(&config, &contexts);

        let sources: Vec<&str> = results
            .iter()
            .map(|r| match r {
                SelectionResult::Image { source, .. } => source.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(sources, vec!["h.png", "s.png", "d.png", "h.png", "s.png"]);
    }

    #[test]
    fn test_matches_single_selection() {
        let config = BannerConfig::default()
            .with_override(true)
            .with_rule(BannerRule::new("Override").with_text("Sale"));
        let contexts: Vec<_> = (0..64).map(|i| RequestContext::new(format!("p{i}"))).collect();
        let results = select_many(&config, &contexts);
        assert_eq!(results.len(), 64);
        for (ctx, result) in contexts.iter().zip(&results) {
            assert_eq!(result, &BannerSelector::select(&config, ctx));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(select_many(&BannerConfig::default(), &[]).is_empty());
    }
}
