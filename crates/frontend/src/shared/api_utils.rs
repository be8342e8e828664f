//! API utilities for talking to the fights service
//!
//! Provides helper functions for constructing API URLs and the error type
//! returned by every request.

use super::config::app_config;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// Uses `API_BASE_URL` from the page config, or derives the service host
/// from the current window location when `CALCULATE_API_BASE_URL` is set.
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/fights", api_base());
/// ```
pub fn api_base() -> String {
    let config = app_config();
    let (protocol, host) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location.host().unwrap_or_default(),
            )
        }
        None => ("http:".to_string(), String::new()),
    };
    config.resolve_api_base(&protocol, &host)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8082", "/api/fights"),
            "http://localhost:8082/api/fights"
        );
        assert_eq!(
            join_url("http://localhost:8082/", "api/fights"),
            "http://localhost:8082/api/fights"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ApiError::Request("offline".into()).to_string(),
            "Request failed: offline"
        );
    }
}
