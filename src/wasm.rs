//! JavaScript bindings for storefront blocks.
//!
//! The configuration object is the block's props (`{ override, banners }`)
//! and the result is a tagged object: `{ kind: "image", source, link }`,
//! `{ kind: "text", text, subText, link, styleVariant }`, `{ kind: "none" }`.

use crate::context::RequestContext;
use crate::rule::BannerConfig;
use crate::selector::BannerSelector;
use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

/// Evaluation time from an optional JS timestamp. Missing, NaN, infinite
/// or out-of-range values fall back to the wall clock.
fn clock(now_ms: Option<f64>) -> DateTime<Utc> {
    now_ms
        .filter(|ms| ms.is_finite())
        .and_then(|ms| DateTime::from_timestamp_millis(ms as i64))
        .unwrap_or_else(Utc::now)
}

fn run(config: JsValue, context: RequestContext) -> Result<JsValue, JsError> {
    let config: BannerConfig = serde_wasm_bindgen::from_value(config)?;
    let result = BannerSelector::select(&config, &context);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Selects the banner for a full page URL (`window.location.href`).
#[wasm_bindgen(js_name = selectBanner)]
pub fn select_banner_for_url(
    config: JsValue,
    href: &str,
    now_ms: Option<f64>,
) -> Result<JsValue, JsError> {
    let context = RequestContext::from_url(href)?.with_now(clock(now_ms));
    run(config, context)
}

/// Selects the banner for an already-resolved store path.
#[wasm_bindgen(js_name = selectBannerForPath)]
pub fn select_banner_for_path(
    config: JsValue,
    path: &str,
    now_ms: Option<f64>,
) -> Result<JsValue, JsError> {
    run(config, RequestContext::new(path).with_now(clock(now_ms)))
}
