use std::sync::Arc;

use crate::errors::{AppError, Result};
use crate::services::appwrite::AppwriteClient;
use crate::services::tts_service::TtsService;

#[derive(Clone)]
pub struct AppState {
    pub appwrite: Option<Arc<AppwriteClient>>,
    pub tts_service: Arc<TtsService>,
}

impl AppState {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        AppState {
            appwrite: None,
            tts_service,
        }
    }

    pub fn with_appwrite(mut self, appwrite: Arc<AppwriteClient>) -> Self {
        self.appwrite = Some(appwrite);
        self
    }

    /// Store access gate: configuration is checked before any query runs.
    pub fn appwrite(&self) -> Result<&AppwriteClient> {
        self.appwrite
            .as_deref()
            .ok_or(AppError::IncompleteConfig)
    }
}
