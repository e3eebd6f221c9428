// Rate limit wrappers.
// Reads /rate_limit and picks out one resource bucket (core, search, graphql, ...).

use serde_json::Value;

use crate::error::{GithubError, Result};
use crate::http::Request;

use super::client::Github;
use super::rest;
use super::types::RateLimit;

/// Rate limits of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    github: Github,
}

impl Limits {
    pub(crate) fn new(github: Github) -> Self {
        Self { github }
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn get(&self, resource: &str) -> Limit {
        Limit {
            github: self.github.clone(),
            resource: resource.to_string(),
            request: self.github.entry().path("rate_limit"),
        }
    }
}

/// Limit of one resource bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    github: Github,
    resource: String,
    request: Request,
}

impl Limit {
    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub async fn json(&self) -> Result<Value> {
        let mut all = rest::fetch(&self.request).await?;
        all.get_mut("resources")
            .and_then(|resources| resources.get_mut(&self.resource))
            .map(Value::take)
            .ok_or_else(|| {
                GithubError::UnexpectedJson(format!("no rate limit for '{}'", self.resource))
            })
    }

    pub async fn info(&self) -> Result<RateLimit> {
        Ok(serde_json::from_value(self.json().await?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeWire;

    const RATE_LIMIT: &str = r#"{
        "resources": {
            "core": {"limit": 5000, "used": 1, "remaining": 4999, "reset": 1691591363},
            "search": {"limit": 30, "used": 12, "remaining": 18, "reset": 1691591091}
        },
        "rate": {"limit": 5000, "used": 1, "remaining": 4999, "reset": 1372700873}
    }"#;

    #[tokio::test]
    async fn test_core_limit() {
        let wire = FakeWire::new().reply(200, RATE_LIMIT);
        let limit = wire.github().limits().get("core").info().await.unwrap();

        assert_eq!(limit.limit, 5000);
        assert_eq!(limit.remaining, 4999);
        assert_eq!(limit.used, 1);
        assert_eq!(wire.last().path(), "/rate_limit");
    }

    #[tokio::test]
    async fn test_search_limit_json() {
        let wire = FakeWire::new().reply(200, RATE_LIMIT);
        let json = wire.github().limits().get("search").json().await.unwrap();
        assert_eq!(json["remaining"], 18);
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let wire = FakeWire::new().reply(200, RATE_LIMIT);
        let result = wire.github().limits().get("graphql").json().await;
        assert!(matches!(result, Err(GithubError::UnexpectedJson(_))));
    }
}
