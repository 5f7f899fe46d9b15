// src/services/tts_service.rs
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use serde_json::json;

use crate::config::TtsConfig;
use crate::errors::{AppError, Result};

const TTS_URL: &str = "https://api.avalai.ir/v1/audio/speech";
const TTS_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin proxy around the AvalAI speech-synthesis API.
pub struct TtsService {
    api_key: String,
    client: Client,
}

impl TtsService {
    pub fn new(config: TtsConfig) -> Result<Self> {
        let client = Client::builder().timeout(TTS_TIMEOUT).build()?;
        Ok(TtsService {
            api_key: config.api_key,
            client,
        })
    }

    /// Synthesizes `text` to mp3 audio bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Bytes> {
        let response = self
            .client
            .post(TTS_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": "gemini-2.5-flash-preview-tts",
                "input": text,
                "voice": {
                    "name": "Kore",
                    // fa-IR is unsupported upstream; en-US is the fallback
                    "languageCode": "en-US",
                },
                "response_format": "mp3",
                "speed": 1.0,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("TTS request failed: {}", e);
                AppError::TtsFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("TTS API returned {}: {}", status, body);
            return Err(AppError::TtsFailed);
        }

        response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read TTS audio body: {}", e);
            AppError::TtsFailed
        })
    }
}
