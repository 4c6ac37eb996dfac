use serde::{Deserialize, Serialize};

/// One organic search result as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBlock {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// Everything shown after a submission: the model's text and the top search hits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub recommendations: String,
    pub results: Vec<ResultBlock>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
