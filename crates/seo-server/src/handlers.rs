//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use seo_core::{SeoError, Suggestion};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider_reachable: bool,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

/// Map engine errors onto HTTP statuses and stable error codes
fn map_seo_error(err: &SeoError) -> ApiError {
    match err {
        SeoError::RateLimited => {
            api_error(StatusCode::TOO_MANY_REQUESTS, err.to_string(), "RATE_LIMITED")
        }
        SeoError::EmptyResponse => {
            api_error(StatusCode::BAD_GATEWAY, err.user_message(), "EMPTY_RESPONSE")
        }
        SeoError::Config(_) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err.user_message(),
            "CONFIG_ERROR",
        ),
        _ => api_error(StatusCode::BAD_GATEWAY, err.user_message(), "PROVIDER_ERROR"),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_reachable = state.generator.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider_reachable,
    })
}

/// SEO suggestion endpoint
pub async fn suggest_handler(
    State(state): State<AppState>,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<Suggestion>, ApiError> {
    let content = payload.content.trim();
    if content.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Content must not be empty",
            "EMPTY_CONTENT",
        ));
    }

    let suggestion = state.generator.generate(content).await.map_err(|e| {
        tracing::error!("Suggestion error: {}", e);
        map_seo_error(&e)
    })?;

    Ok(Json(suggestion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_maps_to_429() {
        let (status, body) = map_seo_error(&SeoError::RateLimited);
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body.code, "RATE_LIMITED");
        assert_eq!(body.error, "Rate limit exceeded. Please try again later.");
    }

    #[test]
    fn test_error_body_serializes_flat() {
        let (_, body) = map_seo_error(&SeoError::RateLimited);
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["code"], "RATE_LIMITED");
        assert!(json["error"].is_string());
    }

    #[test]
    fn test_empty_response_maps_to_502() {
        let (status, body) = map_seo_error(&SeoError::EmptyResponse);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "EMPTY_RESPONSE");
    }

    #[test]
    fn test_other_provider_errors_keep_original_detail() {
        let err = SeoError::Provider {
            message: "connection reset".into(),
            status: None,
        };
        let (status, body) = map_seo_error(&err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "PROVIDER_ERROR");
        assert!(body.error.contains("connection reset"));
    }
}
