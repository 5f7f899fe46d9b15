// config.rs
use std::env;

use crate::errors::{AppError, Result};

/// Collection ids inside the Appwrite database, one per resource family.
#[derive(Debug, Clone)]
pub struct CollectionIds {
    pub news: String,
    pub competitions: String,
    pub standings: String,
    pub matches: String,
}

/// Connection settings for the Appwrite document store. Built once at startup
/// through `from_env`; handlers never read process environment themselves.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub collections: CollectionIds,
}

impl AppwriteConfig {
    pub fn from_env() -> Result<Self> {
        Ok(AppwriteConfig {
            endpoint: required("APPWRITE_ENDPOINT")?,
            project_id: required("APPWRITE_PROJECT_ID")?,
            api_key: required("APPWRITE_API_KEY")?,
            database_id: required("APPWRITE_DATABASE_ID")?,
            collections: CollectionIds {
                news: required("APPWRITE_COLLECTION_ID")?,
                competitions: required("COMPETITIONS_COLLECTION_ID")?,
                standings: required("STANDINGS_COLLECTION_ID")?,
                matches: required("MATCHES_COLLECTION_ID")?,
            },
        })
    }
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            tracing::error!("Missing environment variable: {}", key);
            Err(AppError::IncompleteConfig)
        }
    }
}

#[derive(Debug, Clone)]
pub struct TtsConfig {
    pub api_key: String,
}

impl TtsConfig {
    // The upstream rejects a missing key on its own; an empty default keeps
    // the rest of the API usable without TTS credentials.
    pub fn from_env() -> Self {
        TtsConfig {
            api_key: env::var("AVALAI_API_KEY").unwrap_or_default(),
        }
    }
}
