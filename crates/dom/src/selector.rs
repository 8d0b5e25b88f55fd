// ABOUTME: Process-wide cache of compiled CSS selectors for the HTML backend.
// ABOUTME: Parses each distinct selector string once, remembering parse failures too.

//! Selector caching for repeated element matching.
//!
//! Both matchers call `matches` on many nodes with the same selector string,
//! so parsing once per string and sharing the compiled form keeps matching
//! cheap. Invalid selectors are cached as errors.
//!
//! Entries are never evicted on their own: every distinct selector string,
//! valid or not, stays cached for the life of the process. Callers that pass
//! untrusted or generated selectors can drop everything with
//! [`clear_selector_cache`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::error::SelectorError;

type CachedSelector = Result<Selector, SelectorError>;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, CachedSelector>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn compile(css: &str) -> CachedSelector {
    Selector::parse(css).map_err(|err| SelectorError::new(css, err.to_string()))
}

/// Gets or compiles a CSS selector, caching the result.
///
/// The entry is kept until [`clear_selector_cache`] is called.
/// Subsequent calls with the same selector string return the cached value,
/// whether that is a compiled selector or the parse error.
pub fn get_or_compile(css: &str) -> CachedSelector {
    {
        let cache = SELECTOR_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = compile(css);
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    // another thread may have inserted while we were compiling
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    log::trace!("compiled selector {:?} (ok: {})", css, compiled.is_ok());
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Precompiles a batch of selectors into the cache.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            cache.insert(css.to_string(), compile(css));
        }
    }
}

/// Drops every cached selector, including cached parse failures.
pub fn clear_selector_cache() {
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    log::debug!("clearing {} cached selectors", cache.len());
    cache.clear();
}

/// Number of selector strings currently cached.
pub fn cached_selector_count() -> usize {
    SELECTOR_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}
