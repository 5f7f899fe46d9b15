// src/queries.rs
//
// Translates filter/pagination inputs into the ordered predicate lists the
// Appwrite document store understands. All builders are deterministic: the
// same inputs always produce the same predicates in the same order, so the
// store's native sort stays the single source of truth for tie-breaking.

use crate::services::appwrite::DocumentQuery;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const SEARCH_LIMIT: u64 = 50;
pub const FACET_LIMIT: u64 = 100;
pub const FOOTBALL_LIMIT: u64 = 10;

pub const CREATED_AT_FIELD: &str = "$createdAt";
pub const EXPLANATION_FIELD: &str = "full_explanation";

/// Optional article filter dimensions. Each dimension is additive
/// (AND-combined); an empty list means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct ArticleFilters {
    pub category: Vec<String>,
    pub source: Vec<String>,
    pub tags: Vec<String>,
}

impl ArticleFilters {
    /// Drops values that are blank after trimming, keeping the rest verbatim.
    pub fn cleaned(category: Vec<String>, source: Vec<String>, tags: Vec<String>) -> Self {
        ArticleFilters {
            category: discard_blank(category),
            source: discard_blank(source),
            tags: discard_blank(tags),
        }
    }

    fn predicates(&self) -> Vec<DocumentQuery> {
        let mut queries = Vec::new();
        if !self.category.is_empty() {
            queries.push(DocumentQuery::equal("category", self.category.clone()));
        }
        if !self.source.is_empty() {
            queries.push(DocumentQuery::equal("source", self.source.clone()));
        }
        // Every requested tag must be present: one contains() per tag.
        for tag in &self.tags {
            queries.push(DocumentQuery::contains("tags", tag));
        }
        queries
    }
}

fn discard_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Parses a raw numeric query parameter, failing closed to `default` on
/// anything that is not an integer >= 1.
pub fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

/// Trims a raw search term. `None` means the store must not be queried at
/// all; the caller answers with an empty result set.
pub fn search_term(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Predicates for the paginated article feed, newest first. Offset math
/// saturates so an absurd page number cannot overflow.
pub fn article_listing(page: u64, page_size: u64, filters: &ArticleFilters) -> Vec<DocumentQuery> {
    let mut queries = vec![
        DocumentQuery::limit(page_size),
        DocumentQuery::offset(page.saturating_sub(1).saturating_mul(page_size)),
        DocumentQuery::order_desc(CREATED_AT_FIELD),
    ];
    queries.extend(filters.predicates());
    queries
}

/// Predicates for full-text search over the long-form explanation. Single
/// page, capped at 50; callers are expected to short-circuit empty terms
/// before getting here.
pub fn article_search(term: &str, filters: &ArticleFilters) -> Vec<DocumentQuery> {
    let mut queries = vec![
        DocumentQuery::search(EXPLANATION_FIELD, term),
        DocumentQuery::limit(SEARCH_LIMIT),
        DocumentQuery::order_desc(CREATED_AT_FIELD),
    ];
    queries.extend(filters.predicates());
    queries
}

/// Projection query for one facet dimension (category, source or tags).
pub fn facet_projection(field: &str) -> Vec<DocumentQuery> {
    vec![
        DocumentQuery::select([field]),
        DocumentQuery::limit(FACET_LIMIT),
    ]
}

/// Exact-match competition lookup; at most one document expected per code.
pub fn competition_lookup(code: &str) -> Vec<DocumentQuery> {
    vec![
        DocumentQuery::equal("code", [code]),
        DocumentQuery::limit(1),
    ]
}

/// Standings table for one competition. The store returns rows already
/// ordered by position; no local re-sort.
pub fn standings_for(code: &str) -> Vec<DocumentQuery> {
    vec![
        DocumentQuery::equal("competition_code", [code]),
        DocumentQuery::limit(FOOTBALL_LIMIT),
    ]
}

/// Finished matches for one competition, newest kickoff first.
pub fn finished_matches_for(code: &str) -> Vec<DocumentQuery> {
    vec![
        DocumentQuery::equal("competition_code", [code]),
        DocumentQuery::equal("status", ["FINISHED"]),
        DocumentQuery::order_desc("utc_date"),
        DocumentQuery::limit(FOOTBALL_LIMIT),
    ]
}
