// src/services/appwrite.rs
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::{AppwriteConfig, CollectionIds};
use crate::errors::{AppError, Result};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// A single predicate submitted to the document store, serialized to
/// Appwrite's JSON query encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentQuery {
    Limit(u64),
    Offset(u64),
    OrderDesc(String),
    Equal { attribute: String, values: Vec<String> },
    Contains { attribute: String, value: String },
    Search { attribute: String, term: String },
    Select(Vec<String>),
}

impl DocumentQuery {
    pub fn limit(count: u64) -> Self {
        DocumentQuery::Limit(count)
    }

    pub fn offset(count: u64) -> Self {
        DocumentQuery::Offset(count)
    }

    pub fn order_desc(attribute: impl Into<String>) -> Self {
        DocumentQuery::OrderDesc(attribute.into())
    }

    pub fn equal<I, S>(attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DocumentQuery::Equal {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        DocumentQuery::Contains {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn search(attribute: impl Into<String>, term: impl Into<String>) -> Self {
        DocumentQuery::Search {
            attribute: attribute.into(),
            term: term.into(),
        }
    }

    pub fn select<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DocumentQuery::Select(fields.into_iter().map(Into::into).collect())
    }

    /// Wire encoding expected by the `queries[]` URL parameter.
    pub fn to_json(&self) -> String {
        let value = match self {
            DocumentQuery::Limit(count) => json!({
                "method": "limit",
                "values": [count],
            }),
            DocumentQuery::Offset(count) => json!({
                "method": "offset",
                "values": [count],
            }),
            DocumentQuery::OrderDesc(attribute) => json!({
                "method": "orderDesc",
                "attribute": attribute,
            }),
            DocumentQuery::Equal { attribute, values } => json!({
                "method": "equal",
                "attribute": attribute,
                "values": values,
            }),
            DocumentQuery::Contains { attribute, value } => json!({
                "method": "contains",
                "attribute": attribute,
                "values": [value],
            }),
            DocumentQuery::Search { attribute, term } => json!({
                "method": "search",
                "attribute": attribute,
                "values": [term],
            }),
            DocumentQuery::Select(fields) => json!({
                "method": "select",
                "values": fields,
            }),
        };
        value.to_string()
    }
}

/// One page of raw documents plus the total match count at query time.
#[derive(Debug, Deserialize)]
pub struct DocumentList {
    pub total: u64,
    pub documents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct AppwriteErrorBody {
    message: String,
}

/// Read-only client for the Appwrite REST API. One instance is shared across
/// all requests; per-call state is limited to the query list.
pub struct AppwriteClient {
    http: Client,
    config: AppwriteConfig,
}

impl AppwriteClient {
    pub fn new(config: AppwriteConfig) -> Result<Self> {
        let http = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        Ok(AppwriteClient { http, config })
    }

    pub fn collections(&self) -> &CollectionIds {
        &self.config.collections
    }

    pub async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[DocumentQuery],
    ) -> Result<DocumentList> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            collection_id,
        );

        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|query| ("queries[]", query.to_json()))
            .collect();

        let response = self
            .http
            .get(&url)
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<AppwriteErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "An unexpected error occurred".to_string());
            tracing::error!("Appwrite error {}: {}", status, message);
            return Err(AppError::Appwrite {
                code: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<DocumentList>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_and_offset_encode_numeric_values() {
        assert_eq!(
            DocumentQuery::limit(10).to_json(),
            r#"{"method":"limit","values":[10]}"#
        );
        assert_eq!(
            DocumentQuery::offset(20).to_json(),
            r#"{"method":"offset","values":[20]}"#
        );
    }

    #[test]
    fn equal_carries_the_whole_value_list() {
        let query = DocumentQuery::equal("category", ["a", "b"]);
        let parsed: Value = serde_json::from_str(&query.to_json()).unwrap();
        assert_eq!(parsed["method"], "equal");
        assert_eq!(parsed["attribute"], "category");
        assert_eq!(parsed["values"], json!(["a", "b"]));
    }

    #[test]
    fn contains_wraps_its_single_value() {
        let parsed: Value =
            serde_json::from_str(&DocumentQuery::contains("tags", "derby").to_json()).unwrap();
        assert_eq!(parsed["values"], json!(["derby"]));
    }

    #[test]
    fn order_desc_has_no_values() {
        let parsed: Value =
            serde_json::from_str(&DocumentQuery::order_desc("$createdAt").to_json()).unwrap();
        assert_eq!(parsed["method"], "orderDesc");
        assert_eq!(parsed["attribute"], "$createdAt");
        assert!(parsed.get("values").is_none());
    }

    #[test]
    fn select_lists_projection_fields() {
        let parsed: Value =
            serde_json::from_str(&DocumentQuery::select(["category"]).to_json()).unwrap();
        assert_eq!(parsed["method"], "select");
        assert_eq!(parsed["values"], json!(["category"]));
    }
}
