// src/ids.rs
//! Course identifier canonicalization.
//!
//! Raw ids are display strings (`"CSC 172"`, `"csc172"`). Every comparison in
//! the engine goes through [`normalize`]; raw ids are only ever shown.

/// Default prefix marking a virtual (equivalence group) node.
pub const VIRTUAL_PREFIX: &str = "EQUIV-";

/// Uppercases and strips all whitespace.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// [`normalize`] for ids that may be missing; absent yields the empty string.
#[must_use]
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

/// True if the id names a virtual node under `prefix`.
#[must_use]
pub fn is_virtual(raw: &str, prefix: &str) -> bool {
    let marker = normalize(prefix);
    !marker.is_empty() && normalize(raw).starts_with(&marker)
}

/// Strips the virtual prefix for display (`EQUIV-MATH14X` -> `MATH14X`).
///
/// Ids without the prefix come back unchanged.
#[must_use]
pub fn display_label<'a>(raw: &'a str, prefix: &str) -> &'a str {
    let trimmed = raw.trim_start();
    match trimmed.get(..prefix.len()) {
        Some(head) if !prefix.is_empty() && head.eq_ignore_ascii_case(prefix) => {
            trimmed.get(prefix.len()..).unwrap_or(trimmed).trim_start()
        }
        _ => raw,
    }
}
