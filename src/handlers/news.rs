// src/handlers/news.rs
use axum::{extract::State, response::Json};
use axum_extra::extract::Query;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{AppError, Result};
use crate::models::article::{
    has_more, shape_articles, FiltersResponse, NewsFeedResponse, SearchResponse,
};
use crate::queries::{
    self, ArticleFilters, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
use crate::state::AppState;

// page/pageSize stay raw strings so a non-numeric value falls back to the
// defaults instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct NewsListParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsSearchParams {
    pub query: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> Result<Json<NewsFeedResponse>> {
    tracing::debug!("GET /api/news called with {:?}", params);
    let client = state.appwrite()?;

    let page = queries::parse_positive(params.page.as_deref(), DEFAULT_PAGE);
    let page_size = queries::parse_positive(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);
    let filters = ArticleFilters::cleaned(params.category, params.source, params.tags);

    let predicates = queries::article_listing(page, page_size, &filters);
    let response = client
        .list_documents(&client.collections().news, &predicates)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching articles: {}", e);
            AppError::NewsFetchFailed
        })?;

    let articles = shape_articles(&response.documents);
    tracing::debug!(
        "Returning {} of {} articles (page {})",
        articles.len(),
        response.total,
        page
    );

    Ok(Json(NewsFeedResponse {
        articles,
        has_more: has_more(page, page_size, response.total),
    }))
}

pub async fn search_news(
    State(state): State<AppState>,
    Query(params): Query<NewsSearchParams>,
) -> Result<Json<SearchResponse>> {
    tracing::debug!("GET /api/news/search called with {:?}", params);
    let client = state.appwrite()?;

    let term = match queries::search_term(params.query.as_deref()) {
        Some(term) => term,
        // Nothing to search for; skip the store round-trip entirely.
        None => return Ok(Json(SearchResponse { articles: vec![] })),
    };

    let filters = ArticleFilters::cleaned(params.category, params.source, params.tags);
    let predicates = queries::article_search(&term, &filters);
    let response = client
        .list_documents(&client.collections().news, &predicates)
        .await
        .map_err(|e| {
            tracing::error!("Error searching articles: {}", e);
            AppError::NewsSearchFailed
        })?;

    Ok(Json(SearchResponse {
        articles: shape_articles(&response.documents),
    }))
}

pub async fn get_filters(State(state): State<AppState>) -> Result<Json<FiltersResponse>> {
    tracing::debug!("GET /api/news/filters called");
    let client = state.appwrite()?;
    let news = &client.collections().news;

    // Predicate lists must outlive the joined futures borrowing them.
    let category_query = queries::facet_projection("category");
    let source_query = queries::facet_projection("source");
    let tags_query = queries::facet_projection("tags");

    // Three independent projections; any single failure fails the request.
    let (categories, sources, tags) = tokio::try_join!(
        client.list_documents(news, &category_query),
        client.list_documents(news, &source_query),
        client.list_documents(news, &tags_query),
    )
    .map_err(|e| {
        tracing::error!("Error fetching filters: {}", e);
        AppError::FiltersFetchFailed
    })?;

    Ok(Json(FiltersResponse {
        categories: distinct_strings(&categories.documents, "category"),
        sources: distinct_strings(&sources.documents, "source"),
        tags: distinct_string_lists(&tags.documents, "tags"),
    }))
}

/// Distinct non-empty values of a scalar string field, first-seen order.
fn distinct_strings(documents: &[Value], field: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    documents
        .iter()
        .filter_map(|doc| doc.get(field).and_then(Value::as_str))
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_string()))
        .map(str::to_string)
        .collect()
}

/// Same, but flattening a string-array field across documents.
fn distinct_string_lists(documents: &[Value], field: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    documents
        .iter()
        .filter_map(|doc| doc.get(field).and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn distinct_strings_dedupes_and_drops_falsy() {
        let docs = vec![
            json!({"category": "sports"}),
            json!({"category": "sports"}),
            json!({"category": ""}),
            json!({"category": null}),
            json!({"other": "x"}),
            json!({"category": "politics"}),
        ];
        assert_eq!(
            distinct_strings(&docs, "category"),
            vec!["sports".to_string(), "politics".to_string()]
        );
    }

    #[test]
    fn distinct_string_lists_flattens_tag_arrays() {
        let docs = vec![
            json!({"tags": ["a", "b"]}),
            json!({"tags": ["b", "", "c"]}),
            json!({"tags": "not-an-array"}),
        ];
        assert_eq!(
            distinct_string_lists(&docs, "tags"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
