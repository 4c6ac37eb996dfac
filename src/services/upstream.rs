use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Errors that can occur when talking to the completion or search API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{service} API returned {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Unexpected response format: {0}")]
    Response(String),
}

/// Turn a non-2xx response into [`UpstreamError::Status`], keeping the body for logs
pub(crate) async fn ensure_success(
    service: &'static str,
    response: Response,
) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("{} API returned {}: {}", service, status, body);

    Err(UpstreamError::Status {
        service,
        status,
        body,
    })
}
