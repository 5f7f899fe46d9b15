// src/handlers/tts.rs
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::{AppError, Result};
use crate::state::AppState;

// Gemini TTS input cap.
const MAX_TEXT_LENGTH: usize = 32_000;

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
}

pub async fn synthesize(
    State(state): State<AppState>,
    Json(payload): Json<TtsRequest>,
) -> Result<Response> {
    let text = match payload.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            tracing::warn!("TTS request without text");
            return Err(AppError::TtsTextMissing);
        }
    };

    if text.chars().count() > MAX_TEXT_LENGTH {
        tracing::warn!("TTS request text too long: {} chars", text.chars().count());
        return Err(AppError::TtsTextTooLong);
    }

    tracing::debug!("Synthesizing audio for {} chars", text.chars().count());
    let audio = state.tts_service.synthesize(&text).await?;
    tracing::debug!("Audio generated: {} bytes", audio.len());

    Ok(([(header::CONTENT_TYPE, "audio/mp3")], audio).into_response())
}
