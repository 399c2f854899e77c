//! HTTP plumbing shared by the provider clients.
//!
//! Both providers map transport and status failures the same way:
//! - `reqwest` timeout -> `LlmError::Timeout`
//! - HTTP 401/403 -> `LlmError::AuthenticationFailed`
//! - any other non-2xx -> `LlmError::Provider` with the status code

use std::time::Duration;

use reqwest::StatusCode;

use pumpforge_types::llm::LlmError;

/// Build a reqwest client whose total request time is bounded by `timeout`.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::InvalidRequest(format!("failed to create HTTP client: {e}")))
}

/// Map an error raised while sending or reading a request.
pub fn map_transport_error(err: reqwest::Error, timeout: Duration) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout(timeout)
    } else {
        LlmError::Provider {
            status: None,
            message: format!("HTTP request failed: {err}"),
        }
    }
}

/// Map a non-success status. `message` is the provider's error text when it
/// could be extracted, else the raw body.
pub fn map_status_error(status: StatusCode, message: String) -> LlmError {
    let message = if message.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no error body")
            .to_string()
    } else {
        message
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::AuthenticationFailed(format!("HTTP {}: {message}", status.as_u16()))
        }
        _ => LlmError::Provider {
            status: Some(status.as_u16()),
            message,
        },
    }
}
