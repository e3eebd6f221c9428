// Buffered HTTP response.
// Status assertions translate GitHub failures into GithubError variants.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{GithubError, Result};
use crate::github::types::RateLimit;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    uri: Url,
}

impl Response {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>, uri: Url) -> Self {
        Self {
            status,
            headers,
            body,
            uri,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as UTF-8.
    pub fn text(&self) -> Result<String> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| GithubError::Other(format!("Response body is not UTF-8: {}", e)))
    }

    /// Body parsed as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Rate limit reported by the `x-ratelimit-*` headers, if present.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        let limit = header_u64(&self.headers, "x-ratelimit-limit")?;
        let remaining = header_u64(&self.headers, "x-ratelimit-remaining")?;
        Some(RateLimit {
            limit,
            remaining,
            reset: header_u64(&self.headers, "x-ratelimit-reset").unwrap_or_default(),
            used: header_u64(&self.headers, "x-ratelimit-used").unwrap_or_default(),
        })
    }

    /// Pass the response through if it carries `expected`, otherwise fail.
    pub fn assert_status(self, expected: StatusCode) -> Result<Self> {
        if self.status == expected {
            return Ok(self);
        }
        match self.status {
            StatusCode::UNAUTHORIZED => Err(GithubError::Unauthorized),
            StatusCode::NOT_FOUND => Err(GithubError::NotFound(self.uri.to_string())),
            StatusCode::FORBIDDEN if self.rate_limit().is_some_and(|rl| rl.remaining == 0) => {
                let reset_at = self
                    .rate_limit()
                    .and_then(|rl| rl.reset_at())
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(GithubError::RateLimited { reset_at })
            }
            actual => Err(GithubError::UnexpectedStatus {
                expected,
                actual,
                uri: self.uri.to_string(),
                body: String::from_utf8_lossy(&self.body).into_owned(),
            }),
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
