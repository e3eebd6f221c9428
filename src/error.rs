// Error types for the GitHub client.
// Covers transport failures, asserted status mismatches and malformed payloads.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("GitHub API error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired credentials")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid repository coordinates '{0}', expected 'user/repo'")]
    InvalidCoordinates(String),

    #[error("HTTP {actual} from {uri} (expected {expected}): {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        uri: String,
        body: String,
    },

    #[error("Unexpected JSON: {0}")]
    UnexpectedJson(String),

    #[error("{0}")]
    Other(String),
}

impl From<url::ParseError> for GithubError {
    fn from(e: url::ParseError) -> Self {
        GithubError::InvalidUri(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GithubError>;
