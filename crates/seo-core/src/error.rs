//! Error Types

use thiserror::Error;

/// Result type alias for SEO engine operations
pub type Result<T> = std::result::Result<T, SeoError>;

/// SEO engine error types
#[derive(Error, Debug)]
pub enum SeoError {
    /// Missing or invalid configuration (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider reported HTTP 429; Display is the user-facing message
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Provider responded but the completion carried no text content
    #[error("No suggestions received from AI")]
    EmptyResponse,

    /// Any other provider failure, with the numeric status when one exists
    #[error("Provider error: {message}")]
    Provider {
        message: String,
        status: Option<u16>,
    },

    /// Retry loop completed without a result or a terminal error
    #[error("All retries failed after {0} attempts")]
    RetriesExhausted(usize),
}

impl SeoError {
    /// Check if error should trigger a retry. Only rate limiting is
    /// transient here; empty responses and transport failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SeoError::RateLimited)
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            SeoError::Config(_) => "The service is not configured correctly.".into(),
            SeoError::RateLimited => self.to_string(),
            SeoError::EmptyResponse => "No suggestions received from AI".into(),
            SeoError::Provider { message, .. } => {
                format!("The AI service encountered an error: {message}")
            }
            SeoError::RetriesExhausted(_) => {
                "The request could not be completed. Please try again.".into()
            }
        }
    }
}

impl From<anyhow::Error> for SeoError {
    fn from(err: anyhow::Error) -> Self {
        SeoError::Provider {
            message: err.to_string(),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rate_limit_is_retryable() {
        assert!(SeoError::RateLimited.is_retryable());
        assert!(!SeoError::EmptyResponse.is_retryable());
        assert!(!SeoError::Provider {
            message: "boom".into(),
            status: Some(500)
        }
        .is_retryable());
        assert!(!SeoError::Config("missing key".into()).is_retryable());
    }

    #[test]
    fn test_rate_limit_display_is_user_facing() {
        let err = SeoError::RateLimited;
        assert_eq!(err.to_string(), "Rate limit exceeded. Please try again later.");
        assert_eq!(err.user_message(), err.to_string());
    }
}
