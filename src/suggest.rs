// src/suggest.rs
//! Type-ahead matching of course ids against a partial query.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::CatalogIndex;
use crate::ids::normalize;

/// Two letters followed by a non-letter (or nothing): `CS172`, `CS`.
static SHORT_DEPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2})([^A-Z].*)?$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Ranks visible course ids against `query`, best first, at most `max_results`.
///
/// A course matches if its canonical id contains the canonical query, or the
/// query with a two-letter department shorthand expanded (`CS172` ->
/// `CSC172`). Prefix matches rank before infix matches; ties break on raw id.
#[must_use]
pub fn suggest(
    catalog: &CatalogIndex,
    query: &str,
    max_results: usize,
    aliases: &BTreeMap<String, String>,
) -> Vec<String> {
    let needle = normalize(query);
    if needle.is_empty() || max_results == 0 {
        return Vec::new();
    }
    let expanded = expand_department(catalog, &needle, aliases);

    let mut hits: Vec<(bool, &str)> = catalog
        .visible()
        .filter_map(|rec| {
            let canonical = normalize(&rec.id);
            let forms = std::iter::once(needle.as_str()).chain(expanded.as_deref());
            let mut matched = false;
            let mut prefix = false;
            for form in forms {
                if canonical.starts_with(form) {
                    prefix = true;
                    matched = true;
                } else if canonical.contains(form) {
                    matched = true;
                }
            }
            matched.then_some((prefix, rec.id.as_str()))
        })
        .collect();

    hits.sort_by(|a, b| rank(*a, *b));
    hits.truncate(max_results);
    log::trace!("suggest {query:?}: {} hit(s)", hits.len());
    hits.into_iter().map(|(_, id)| id.to_string()).collect()
}

fn rank(a: (bool, &str), b: (bool, &str)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1))
}

/// Rewrites a two-letter department shorthand into the catalog's prefix.
///
/// Explicit aliases win. Otherwise the shorthand expands only when it is not
/// itself a catalog prefix and exactly one three-letter catalog prefix
/// extends it.
#[must_use]
pub fn expand_department(
    catalog: &CatalogIndex,
    canonical_query: &str,
    aliases: &BTreeMap<String, String>,
) -> Option<String> {
    let caps = SHORT_DEPT_RE.captures(canonical_query)?;
    let short = caps.get(1)?.as_str();
    let rest = caps.get(2).map_or("", |m| m.as_str());

    let prefixes = catalog.department_prefixes();
    if prefixes.contains(short) {
        return None;
    }

    let full = aliases
        .iter()
        .find(|(k, _)| normalize(k) == short)
        .map(|(_, v)| normalize(v))
        .or_else(|| {
            let mut extending = prefixes
                .iter()
                .filter(|p| p.len() == 3 && p.starts_with(short));
            match (extending.next(), extending.next()) {
                (Some(only), None) => Some(only.clone()),
                _ => None,
            }
        })?;

    Some(format!("{full}{rest}"))
}
