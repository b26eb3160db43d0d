//! URL-safe slugs for listing pages.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Anything outside ASCII alphanumerics and CJK ideographs collapses into
// a single dash.
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z\u{4e00}-\u{9fff}]+").expect("slug pattern is valid")
});

/// Reduce a display name to a URL-safe slug.
///
/// ASCII alphanumerics and CJK ideographs survive with their case intact;
/// every other run of characters becomes one `-`, and leading/trailing
/// dashes are trimmed. Returns `None` when nothing usable survives.
pub fn slugify(name: &str) -> Option<String> {
    let slug = NON_SLUG.replace_all(name, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Hands out slugs that are unique within one build.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    taken: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `name`, with `listing-{position}` as the fallback for
    /// names with no usable characters and a `-2`, `-3`, ... suffix on
    /// collision.
    pub fn assign(&mut self, name: &str, position: usize) -> String {
        let base = slugify(name).unwrap_or_else(|| format!("listing-{position}"));
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !self.taken.insert(candidate.clone()) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        candidate
    }
}
