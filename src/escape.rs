//! Escaping rules for language names.
//!
//! Linguist names are plain ASCII apart from spaces and apostrophes, so only
//! those two characters are rewritten. Everything else passes through.

/// HTML entity written in place of an apostrophe.
pub const APOS_ENTITY: &str = "&apos;";

/// Base of the GitHub trending page each badge links to.
pub const TRENDING_URL: &str = "https://github.com/trending?l=";

/// File stem for a language's badge: spaces and apostrophes become `-`.
///
/// `"C O'BOL"` becomes `"C-O-BOL"`.
pub fn file_stem(name: &str) -> String {
    name.replace([' ', '\''], "-")
}

/// Escapes a name for use inside a URL: `%20` for spaces, `&apos;` for
/// apostrophes.
pub fn url(name: &str) -> String {
    name.replace(' ', "%20").replace('\'', APOS_ENTITY)
}

/// Escapes a name for display text. Spaces are kept.
pub fn text(name: &str) -> String {
    name.replace('\'', APOS_ENTITY)
}

/// Trending page URL for `name`, already URL-escaped.
pub fn trending_url(name: &str) -> String {
    format!("{}{}", TRENDING_URL, url(name))
}
