use crate::domain::Page;
use unicode_normalization::UnicodeNormalization;

/// Turns a page title into a URL-safe identifier.
///
/// Accented letters lose their diacritics ("Článek" -> "clanek"), anything
/// outside `[a-z0-9]` and whitespace is dropped, and each whitespace run
/// becomes a single hyphen.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

// U+0300..=U+036F, the "Combining Diacritical Marks" block
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Maps an incoming route identifier to a page id.
///
/// The identifier may be a raw page id or a slug. When a known page's slug
/// matches, that page's id is returned; otherwise the identifier is returned
/// unchanged and the later content lookup decides whether it exists.
/// Titles that collide on the same slug resolve to the first page in list order.
pub fn resolve<'a>(identifier: &'a str, pages: &'a [Page]) -> &'a str {
    if identifier.is_empty() {
        return identifier;
    }

    pages
        .iter()
        .find(|page| page.slug() == identifier)
        .map(|page| page.id.as_str())
        .unwrap_or(identifier)
}

/// Every route a static build should produce: all page ids, then all slugs.
pub fn static_paths(pages: &[Page]) -> Vec<String> {
    let ids = pages.iter().map(|page| page.id.clone());
    let slugs = pages
        .iter()
        .map(|page| page.slug())
        .filter(|slug| !slug.is_empty());

    ids.chain(slugs).collect()
}
