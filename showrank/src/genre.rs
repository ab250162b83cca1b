//! Genre query normalization and matching
//!
//! Catalog records carry their genres as one raw comma-separated string
//! (e.g. `"Crime, Drama, Thriller"`). Matching is exact per token and
//! case-insensitive; substrings never match.

/// A normalized genre query: trimmed, lower-cased, guaranteed non-empty.
///
/// [`GenreQuery::parse`] is the only constructor, so holding a `GenreQuery`
/// proves the caller supplied a usable query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreQuery(String);

impl GenreQuery {
    /// Normalize a caller-supplied genre string.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Test whether a record's raw comma-separated genre string contains
    /// this genre as an exact token, ignoring case and surrounding
    /// whitespace. Empty tokens (stray commas) are discarded.
    pub fn matches(&self, raw_genres: &str) -> bool {
        raw_genres
            .split(',')
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .any(|token| token.to_lowercase() == self.0)
    }

    /// The normalized query string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
