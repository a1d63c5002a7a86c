// Runtime overrides read from `data-*` attributes on the canvas element.
// Kept free of DOM types so it can be tested on the host.

use galaxy_core::GalaxyConfig;
use std::str::FromStr;

pub const NODE_COUNT_ATTR: &str = "data-node-count";
pub const PERSPECTIVE_ATTR: &str = "data-perspective";
pub const HIT_RADIUS_ATTR: &str = "data-hit-radius";
pub const SEED_ATTR: &str = "data-seed";

/// Apply every override `lookup` can resolve on top of `base`.
///
/// Unparseable values are skipped; if the result fails validation the whole
/// override set is dropped and `base` is returned.
pub fn config_from_attributes<F>(base: GalaxyConfig, lookup: F) -> GalaxyConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = base.clone();
    if let Some(v) = parse_attr(&lookup, NODE_COUNT_ATTR) {
        cfg.node_count = v;
    }
    if let Some(v) = parse_attr(&lookup, PERSPECTIVE_ATTR) {
        cfg.perspective = v;
    }
    if let Some(v) = parse_attr(&lookup, HIT_RADIUS_ATTR) {
        cfg.hit_radius_px = v;
    }
    if let Some(v) = parse_attr(&lookup, SEED_ATTR) {
        cfg.seed = Some(v);
    }
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            base
        }
    }
}

fn parse_attr<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}", name, raw);
            None
        }
    }
}
