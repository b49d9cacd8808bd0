//! Comparison parsing cache

use crate::comparison::ast::Comparison;
use crate::comparison::parser;
use crate::value::FlexibleValue;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Upper bound on cached expressions; further misses are parsed but not stored
pub const MAX_CACHED_EXPRESSIONS: usize = 4096;

/// Global comparison cache keyed by the raw expression text
static COMPARISON_CACHE: Lazy<RwLock<AHashMap<String, Comparison>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(256);
    RwLock::new(map)
});

/// Get or parse a comparison expression, using cache for repeated expressions
#[inline]
pub fn get_or_parse(expr: &str) -> Comparison {
    // Fast path: check read lock first
    {
        let cache = COMPARISON_CACHE.read();
        if let Some(comparison) = cache.get(expr) {
            return comparison.clone();
        }
    }

    tracing::debug!(expression = expr, "comparison cache miss");
    let comparison = parser::parse(expr);

    {
        let mut cache = COMPARISON_CACHE.write();
        insert_bounded(&mut cache, expr, &comparison, MAX_CACHED_EXPRESSIONS);
    }

    comparison
}

/// Insert unless the cache already holds `limit` expressions
fn insert_bounded(
    cache: &mut AHashMap<String, Comparison>,
    expr: &str,
    comparison: &Comparison,
    limit: usize,
) -> bool {
    if cache.len() >= limit && !cache.contains_key(expr) {
        tracing::debug!(expression = expr, limit = limit, "comparison cache full, not caching");
        return false;
    }
    cache.insert(expr.to_string(), comparison.clone());
    true
}

/// Check an expression against a value, using the cached comparison
#[inline]
pub fn check_condition(expr: &str, input: &FlexibleValue) -> bool {
    {
        let cache = COMPARISON_CACHE.read();
        if let Some(comparison) = cache.get(expr) {
            return comparison.check(input);
        }
    }

    get_or_parse(expr).check(input)
}

/// Whether an expression has already been parsed and cached
pub fn is_cached(expr: &str) -> bool {
    COMPARISON_CACHE.read().contains_key(expr)
}

/// Clear the comparison cache
pub fn clear_cache() {
    let mut cache = COMPARISON_CACHE.write();
    cache.clear();
}

/// Get cache statistics
pub fn cache_size() -> usize {
    let cache = COMPARISON_CACHE.read();
    cache.len()
}
