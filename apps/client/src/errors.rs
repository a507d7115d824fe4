use serde::Deserialize;
use thiserror::Error;

/// Failure of a backend call, classified at the transport boundary.
///
/// Every variant maps to exactly one user-facing message via
/// [`ApiError::user_message`]; stages push that message to the notice
/// channel and never propagate the error further.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("connection error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("rate limited (HTTP 429)")]
    RateLimited,

    #[error("server rejected request (status {status})")]
    Rejected { status: u16, detail: Option<String> },

    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Classifies a non-2xx status plus its raw body.
    ///
    /// 429 is always rate limiting, regardless of what the body says; any
    /// other status surfaces the server-supplied detail when one parses out.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 429 {
            return ApiError::RateLimited;
        }
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        ApiError::Rejected { status, detail }
    }

    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => {
                "Unable to connect to server. Please check your connection.".to_string()
            }
            ApiError::RateLimited => {
                "Rate limit exceeded. Please wait a minute before trying again.".to_string()
            }
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected { detail: None, .. } => "An error occurred".to_string(),
            ApiError::Decode(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a real `reqwest::Error` without touching the network.
    fn builder_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("http://")
            .build()
            .expect_err("empty host must not build")
    }

    #[test]
    fn test_429_classifies_as_rate_limited() {
        let err = ApiError::from_status(429, r#"{"detail": "Too many requests"}"#);
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[test]
    fn test_rejected_surfaces_server_detail_verbatim() {
        let err = ApiError::from_status(400, r#"{"detail": "Only PDF files are allowed"}"#);
        assert_eq!(err.user_message(), "Only PDF files are allowed");
    }

    #[test]
    fn test_rejected_without_detail_uses_fallback() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.user_message(), "An error occurred");
    }

    #[test]
    fn test_rate_limit_message_is_distinct_from_generic() {
        let rate = ApiError::from_status(429, "");
        let generic = ApiError::from_status(500, "");
        assert_ne!(rate.user_message(), generic.user_message());
        assert!(rate.user_message().contains("Rate limit"));
    }

    #[test]
    fn test_transport_message_is_connectivity_notice() {
        let err = ApiError::Transport(builder_error());
        assert!(err.user_message().contains("Unable to connect"));
    }

    #[test]
    fn test_decode_message_is_generic_unexpected() {
        let err = ApiError::Decode(builder_error());
        assert!(err.user_message().contains("unexpected"));
    }
}
