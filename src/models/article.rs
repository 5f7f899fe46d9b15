// src/models/article.rs
use serde::Serialize;
use serde_json::Value;

/// Public article shape. Field names (including the `$`-prefixed store
/// fields) are a contract with the front end.
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    #[serde(rename = "$id")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub citations: Vec<String>,
    pub full_explanation: String,
    pub date: String,
    pub source: String,
    pub tags: Vec<String>,
    pub category: String,
    #[serde(rename = "$createdAt")]
    pub created_at: String,
}

impl NewsArticle {
    /// Shape-validates one raw store document. Returns `None` when any
    /// required field is missing or mistyped; the caller drops that document
    /// and keeps the rest of the page.
    pub fn from_document(doc: &Value) -> Option<Self> {
        Some(NewsArticle {
            id: string_field(doc, "$id")?,
            title: string_field(doc, "title")?,
            summary: string_field(doc, "summary")?,
            citations: string_array_field(doc, "citations")?,
            full_explanation: string_field(doc, "full_explanation")?,
            date: string_field(doc, "date")?,
            source: string_field(doc, "source")?,
            tags: string_array_field(doc, "tags")?,
            category: string_field(doc, "category")?,
            created_at: string_field(doc, "$createdAt")?,
        })
    }
}

fn string_field(doc: &Value, name: &str) -> Option<String> {
    doc.get(name)?.as_str().map(str::to_string)
}

fn string_array_field(doc: &Value, name: &str) -> Option<Vec<String>> {
    doc.get(name)?
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Validate-then-filter over a raw page: non-conforming documents are logged
/// and dropped, never surfaced as request errors.
pub fn shape_articles(documents: &[Value]) -> Vec<NewsArticle> {
    documents
        .iter()
        .filter_map(|doc| {
            let article = NewsArticle::from_document(doc);
            if article.is_none() {
                tracing::warn!(
                    "Dropping malformed article document: {}",
                    doc.get("$id").and_then(|v| v.as_str()).unwrap_or("<no id>")
                );
            }
            article
        })
        .collect()
}

/// Point-in-time pagination estimate: more pages exist iff the rows consumed
/// so far fall short of the total match count. Saturates instead of
/// overflowing on absurd page numbers.
pub fn has_more(page: u64, page_size: u64, total: u64) -> bool {
    page.saturating_mul(page_size) < total
}

#[derive(Debug, Serialize)]
pub struct NewsFeedResponse {
    pub articles: Vec<NewsArticle>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub categories: Vec<String>,
    pub sources: Vec<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed() -> Value {
        json!({
            "$id": "abc123",
            "$createdAt": "2024-05-01T10:00:00.000+00:00",
            "$updatedAt": "2024-05-01T10:00:00.000+00:00",
            "$permissions": [],
            "title": "عنوان",
            "summary": "خلاصه",
            "citations": ["https://example.com"],
            "full_explanation": "متن کامل",
            "date": "2024-05-01",
            "source": "irna",
            "tags": ["فوتبال"],
            "category": "sports",
        })
    }

    #[test]
    fn well_formed_document_maps_to_public_shape() {
        let article = NewsArticle::from_document(&well_formed()).unwrap();
        assert_eq!(article.id, "abc123");
        assert_eq!(article.tags, vec!["فوتبال"]);

        // Internal bookkeeping fields are dropped from the serialized shape.
        let serialized = serde_json::to_value(&article).unwrap();
        assert!(serialized.get("$permissions").is_none());
        assert!(serialized.get("$updatedAt").is_none());
        assert_eq!(serialized["$id"], "abc123");
        assert_eq!(serialized["$createdAt"], "2024-05-01T10:00:00.000+00:00");
    }

    #[test]
    fn missing_summary_drops_only_that_document() {
        let mut broken = well_formed();
        broken.as_object_mut().unwrap().remove("summary");
        let page = vec![well_formed(), broken, well_formed()];

        let shaped = shape_articles(&page);
        assert_eq!(shaped.len(), 2);
    }

    #[test]
    fn mistyped_tags_entry_fails_validation() {
        let mut broken = well_formed();
        broken["tags"] = json!(["ok", 42]);
        assert!(NewsArticle::from_document(&broken).is_none());
    }

    #[test]
    fn numeric_date_fails_validation() {
        let mut broken = well_formed();
        broken["date"] = json!(20240501);
        assert!(NewsArticle::from_document(&broken).is_none());
    }

    #[test]
    fn empty_citations_list_is_valid() {
        let mut doc = well_formed();
        doc["citations"] = json!([]);
        assert!(NewsArticle::from_document(&doc).is_some());
    }

    #[test]
    fn has_more_matches_total_count_boundary() {
        assert!(has_more(2, 10, 25));
        assert!(!has_more(3, 10, 25));
        assert!(!has_more(1, 10, 10));
        assert!(has_more(1, 10, 11));
    }

    #[test]
    fn has_more_saturates_on_huge_page_numbers() {
        assert!(!has_more(u64::MAX, 10, 25));
        assert!(!has_more(u64::MAX, u64::MAX, u64::MAX));
    }
}
