// ABOUTME: String helpers for page paths and HTML-escaping user text.
// ABOUTME: Provides not_base_page (slash counting) and sanitize (character reference escaping).

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Characters actually escaped by [`sanitize`].
static SANITIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)[&<>"'/]"#).unwrap());

/// Replacement table. Backtick, `=` and space have entries but are not part of
/// `SANITIZE_RE`, so they are never replaced.
const ENTITY_TABLE: &[(&str, &str)] = &[
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&#x27;"),
    ("/", "&#x2F;"),
    ("`", "&#x60;"),
    ("=", "&#x3D;"),
    (" ", "&nbsp;"),
];

fn entity_for(s: &str) -> Option<&'static str> {
    ENTITY_TABLE
        .iter()
        .find(|(raw, _)| *raw == s)
        .map(|(_, entity)| *entity)
}

/// Escapes `& < > " ' /` as HTML character references.
///
/// Backtick, `=` and space pass through unchanged.
pub fn sanitize(input: &str) -> String {
    let escaped: Cow<'_, str> = SANITIZE_RE.replace_all(input, |caps: &Captures<'_>| {
        let raw = &caps[0];
        entity_for(raw).unwrap_or(raw).to_string()
    });
    escaped.into_owned()
}

/// Returns false for a path with exactly one slash (`/`, `/about`), true otherwise.
///
/// Paths without any slash are treated as not being the base page as well.
pub fn not_base_page(url: &str) -> bool {
    url.matches('/').count() != 1
}
