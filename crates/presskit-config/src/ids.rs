//! Derived identifiers for sections without explicit mappings.
//!
//! # Design
//! - Mirrors the ids the existing page markup was authored against, so a
//!   leading or trailing space in a title still becomes a hyphen.
//! - Explicit `container`/`key` fields on the document take precedence; these
//!   helpers are only the fallback.

/// Suffix appended to gallery slugs to form their container id.
pub const GALLERY_SUFFIX: &str = "-gallery";

/// Lowercase `title` and replace every whitespace run with a single `-`.
#[must_use]
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

/// Container id for a gallery section titled `title`.
#[must_use]
pub fn gallery_container_id(title: &str) -> String {
    let mut id = slug(title);
    id.push_str(GALLERY_SUFFIX);
    id
}

/// Lowercase `text` and drop all whitespace; used for translation-key fragments.
#[must_use]
pub fn compact_key(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `id` can be used with `getElementById` as authored in markup.
#[must_use]
pub fn is_valid_dom_id(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(char::is_whitespace)
}

/// Whether `fragment` can sit inside a dotted translation key.
#[must_use]
pub fn is_valid_key_fragment(fragment: &str) -> bool {
    !fragment.is_empty() && !fragment.contains('.')
}
