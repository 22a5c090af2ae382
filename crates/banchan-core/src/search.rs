//! Keyword search types: tokens, pages, and store-agnostic query specs.
//!
//! A search runs in three pure steps before anything touches the store:
//!
//! 1. [`normalize_keywords`] turns the decoded keyword string into ordered
//!    [`SearchToken`]s.
//! 2. [`PageRequest::new`] validates the 1-based page index.
//! 3. [`build_query`] combines both into a [`QuerySpec`], an ordered list of
//!    [`QueryMod`] descriptors that a store adapter renders and executes.
//!
//! # Example
//!
//! ```
//! use banchan_core::{build_query, normalize_keywords, PageRequest, QueryMod};
//!
//! let tokens = normalize_keywords("red  blue");
//! let page = PageRequest::new(2).unwrap();
//! let spec = build_query(&tokens, page);
//!
//! assert_eq!(spec.match_terms().collect::<Vec<_>>(), vec!["red", "blue"]);
//! assert_eq!(spec.limit(), 20);
//! assert_eq!(spec.offset(), 20);
//! assert!(matches!(spec.mods()[0], QueryMod::OrderBy { .. }));
//! ```

use std::fmt;

use crate::defaults::{FIRST_PAGE, PAGE_SIZE};
use crate::error::{Error, Result};

// =============================================================================
// TOKENS
// =============================================================================

/// A single non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchToken(String);

impl SearchToken {
    /// Wrap a term, rejecting the empty string.
    pub fn new(term: impl Into<String>) -> Option<Self> {
        let term = term.into();
        if term.is_empty() {
            None
        } else {
            Some(Self(term))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The term wrapped in `%` for substring LIKE matching.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.0)
    }
}

impl AsRef<str> for SearchToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a decoded keyword string into search tokens.
///
/// Splits on the single space character only and drops empty segments, so
/// runs of spaces never yield empty terms. Order follows the input.
pub fn normalize_keywords(keywords: &str) -> Vec<SearchToken> {
    keywords.split(' ').filter_map(SearchToken::new).collect()
}

// =============================================================================
// PAGINATION
// =============================================================================

/// A validated 1-based page index with the fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl PageRequest {
    /// Validate a page index.
    ///
    /// Fails with [`Error::Parameter`] when the index is below 1 or when the
    /// resulting offset would overflow.
    pub fn new(page: i64) -> Result<Self> {
        if page < FIRST_PAGE {
            return Err(Error::Parameter(format!(
                "page index must be >= {}, got {}",
                FIRST_PAGE, page
            )));
        }
        if (page - 1).checked_mul(PAGE_SIZE).is_none() {
            return Err(Error::Parameter(format!(
                "page index {} is out of range",
                page
            )));
        }
        Ok(Self { page })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    /// Rows skipped before this page: `(page - 1) * PAGE_SIZE`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: FIRST_PAGE }
    }
}

// =============================================================================
// QUERY SPEC
// =============================================================================

/// Columns of the tag relation that queries may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Id,
    Name,
}

impl TagField {
    pub fn column(&self) -> &'static str {
        match self {
            TagField::Id => "id",
            TagField::Name => "name",
        }
    }
}

/// Sort direction for [`QueryMod::OrderBy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One query descriptor.
///
/// All `MatchAny` entries of a spec are OR-combined: a row matches when its
/// field contains any of the substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMod {
    OrderBy {
        field: TagField,
        direction: SortDirection,
    },
    MatchAny {
        field: TagField,
        substring: SearchToken,
    },
    Limit(i64),
    Offset(i64),
}

/// Ordered, store-agnostic description of a tag query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySpec {
    mods: Vec<QueryMod>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor, keeping insertion order.
    pub fn push(mut self, query_mod: QueryMod) -> Self {
        self.mods.push(query_mod);
        self
    }

    pub fn mods(&self) -> &[QueryMod] {
        &self.mods
    }

    /// Substring terms in clause order.
    pub fn match_terms(&self) -> impl Iterator<Item = &str> {
        self.mods.iter().filter_map(|m| match m {
            QueryMod::MatchAny { substring, .. } => Some(substring.as_str()),
            _ => None,
        })
    }

    /// True when no filter applies and every row is eligible.
    pub fn matches_all(&self) -> bool {
        self.match_terms().next().is_none()
    }

    /// Last `Limit` descriptor, or 0 when none was set.
    pub fn limit(&self) -> i64 {
        self.mods
            .iter()
            .rev()
            .find_map(|m| match m {
                QueryMod::Limit(n) => Some(*n),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Last `Offset` descriptor, or 0 when none was set.
    pub fn offset(&self) -> i64 {
        self.mods
            .iter()
            .rev()
            .find_map(|m| match m {
                QueryMod::Offset(n) => Some(*n),
                _ => None,
            })
            .unwrap_or(0)
    }
}

/// Build the tag search query for `tokens` on `page`.
///
/// Produces `OrderBy(id, Asc)`, one `MatchAny(name, token)` per token in
/// input order, then `Limit` and `Offset`. An empty token list adds no
/// filter, so the query pages through every tag.
pub fn build_query(tokens: &[SearchToken], page: PageRequest) -> QuerySpec {
    let mut spec = QuerySpec::new().push(QueryMod::OrderBy {
        field: TagField::Id,
        direction: SortDirection::Asc,
    });

    for token in tokens {
        tracing::trace!(token = %token, "Adding name match clause");
        spec = spec.push(QueryMod::MatchAny {
            field: TagField::Name,
            substring: token.clone(),
        });
    }

    spec.push(QueryMod::Limit(page.limit()))
        .push(QueryMod::Offset(page.offset()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(terms: &[&str]) -> Vec<SearchToken> {
        terms.iter().filter_map(|t| SearchToken::new(*t)).collect()
    }

    // -------------------------------------------------------------------------
    // normalize_keywords
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_single_word() {
        assert_eq!(normalize_keywords("kimchi"), tokens(&["kimchi"]));
    }

    #[test]
    fn test_normalize_drops_empty_segments() {
        assert_eq!(normalize_keywords("a b  c"), tokens(&["a", "b", "c"]));
    }

    #[test]
    fn test_normalize_leading_and_trailing_spaces() {
        assert_eq!(normalize_keywords("  red blue  "), tokens(&["red", "blue"]));
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_keywords("").is_empty());
        assert!(normalize_keywords("     ").is_empty());
    }

    #[test]
    fn test_normalize_splits_only_on_space() {
        let result = normalize_keywords("a\tb c");
        assert_eq!(result, tokens(&["a\tb", "c"]));
    }

    #[test]
    fn test_normalize_preserves_order_and_duplicates() {
        assert_eq!(
            normalize_keywords("z a z"),
            tokens(&["z", "a", "z"])
        );
    }

    #[test]
    fn test_search_token_rejects_empty() {
        assert!(SearchToken::new("").is_none());
        assert_eq!(SearchToken::new("x").unwrap().as_str(), "x");
    }

    #[test]
    fn test_like_pattern_wraps_term() {
        let token = SearchToken::new("red").unwrap();
        assert_eq!(token.like_pattern(), "%red%");
    }

    // -------------------------------------------------------------------------
    // PageRequest
    // -------------------------------------------------------------------------

    #[test]
    fn test_page_offsets() {
        for p in 1..=50 {
            let page = PageRequest::new(p).unwrap();
            assert_eq!(page.offset(), (p - 1) * 20);
            assert_eq!(page.limit(), 20);
        }
    }

    #[test]
    fn test_page_zero_rejected() {
        let err = PageRequest::new(0).unwrap_err();
        assert!(matches!(err, Error::Parameter(_)));
    }

    #[test]
    fn test_negative_page_rejected() {
        assert!(matches!(
            PageRequest::new(-3),
            Err(Error::Parameter(_))
        ));
    }

    #[test]
    fn test_page_overflow_rejected() {
        assert!(matches!(
            PageRequest::new(i64::MAX),
            Err(Error::Parameter(_))
        ));
    }

    #[test]
    fn test_default_page_is_first() {
        assert_eq!(PageRequest::default().page(), 1);
        assert_eq!(PageRequest::default().offset(), 0);
    }

    // -------------------------------------------------------------------------
    // build_query
    // -------------------------------------------------------------------------

    #[test]
    fn test_build_query_two_tokens_first_page() {
        let spec = build_query(&tokens(&["red", "blue"]), PageRequest::new(1).unwrap());

        assert_eq!(
            spec.mods(),
            &[
                QueryMod::OrderBy {
                    field: TagField::Id,
                    direction: SortDirection::Asc,
                },
                QueryMod::MatchAny {
                    field: TagField::Name,
                    substring: SearchToken::new("red").unwrap(),
                },
                QueryMod::MatchAny {
                    field: TagField::Name,
                    substring: SearchToken::new("blue").unwrap(),
                },
                QueryMod::Limit(20),
                QueryMod::Offset(0),
            ]
        );
    }

    #[test]
    fn test_build_query_without_tokens_matches_all() {
        let spec = build_query(&[], PageRequest::new(2).unwrap());

        assert!(spec.matches_all());
        assert_eq!(spec.mods().len(), 3);
        assert_eq!(spec.limit(), 20);
        assert_eq!(spec.offset(), 20);
    }

    #[test]
    fn test_build_query_one_match_per_token() {
        let input = tokens(&["a", "b", "c", "d"]);
        let spec = build_query(&input, PageRequest::default());

        assert_eq!(
            spec.match_terms().collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        assert!(!spec.matches_all());
    }

    #[test]
    fn test_build_query_orders_by_id_first() {
        let spec = build_query(&tokens(&["x"]), PageRequest::default());
        assert_eq!(
            spec.mods().first(),
            Some(&QueryMod::OrderBy {
                field: TagField::Id,
                direction: SortDirection::Asc,
            })
        );
    }

    #[test]
    fn test_query_spec_defaults_without_paging() {
        let spec = QuerySpec::new();
        assert_eq!(spec.limit(), 0);
        assert_eq!(spec.offset(), 0);
        assert!(spec.matches_all());
    }
}
