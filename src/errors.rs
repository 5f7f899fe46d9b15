// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Required Appwrite environment values are missing; the localized message
    // is a fixed contract with the front end.
    #[error("تنظیمات سرور ناقص است")]
    IncompleteConfig,

    #[error("خطا در دریافت اخبار")]
    NewsFetchFailed,

    #[error("خطا در جستجوی اخبار")]
    NewsSearchFailed,

    #[error("خطا در دریافت فیلترها")]
    FiltersFetchFailed,

    #[error("Competition {0} not found")]
    CompetitionNotFound(String),

    #[error("Unsupported endpoint")]
    UnsupportedEndpoint,

    // Structured error returned by the Appwrite REST API; carries the
    // upstream status code so it can be propagated to the caller.
    #[error("{message}")]
    Appwrite { code: u16, message: String },

    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Text is required")]
    TtsTextMissing,

    #[error("Text exceeds maximum length")]
    TtsTextTooLong,

    #[error("Failed to generate audio")]
    TtsFailed,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::IncompleteConfig => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NewsFetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NewsSearchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FiltersFetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CompetitionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedEndpoint => StatusCode::BAD_REQUEST,
            AppError::Appwrite { code, .. } => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TtsTextMissing => StatusCode::BAD_REQUEST,
            AppError::TtsTextTooLong => StatusCode::BAD_REQUEST,
            AppError::TtsFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_missing_code() {
        let err = AppError::CompetitionNotFound("ZZ".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Competition ZZ not found");
    }

    #[test]
    fn unsupported_endpoint_is_bad_request() {
        let err = AppError::UnsupportedEndpoint;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Unsupported endpoint");
    }

    #[test]
    fn appwrite_errors_propagate_their_own_status() {
        let err = AppError::Appwrite {
            code: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn bogus_upstream_status_falls_back_to_500() {
        let err = AppError::Appwrite {
            code: 0,
            message: "broken".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
