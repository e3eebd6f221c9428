// Repository wrappers.
// Repos hangs off the root client; Repo addresses /repos/{user}/{repo}.

use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::http::Request;

use super::client::Github;
use super::coordinates::Coordinates;
use super::issues::Issues;
use super::labels::Labels;
use super::releases::Releases;
use super::rest;
use super::types::RepoInfo;

/// Repositories of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Repos {
    github: Github,
}

impl Repos {
    pub(crate) fn new(github: Github) -> Self {
        Self { github }
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn get(&self, coords: Coordinates) -> Repo {
        Repo::new(self.github.clone(), coords)
    }

    /// Create a repository for the authenticated user from a JSON description
    /// (at least `name`).
    pub async fn create(&self, json: &Value) -> Result<Repo> {
        let created = rest::post(&self.github.entry().path("user/repos"), json).await?;
        let coords: Coordinates = rest::str_field(&created, "full_name")?.parse()?;
        Ok(self.get(coords))
    }

    pub async fn remove(&self, coords: &Coordinates) -> Result<()> {
        rest::remove(self.get(coords.clone()).request()).await
    }
}

/// A single repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Repo {
    github: Github,
    coords: Coordinates,
    request: Request,
}

impl Repo {
    pub(crate) fn new(github: Github, coords: Coordinates) -> Self {
        let request = github
            .entry()
            .path("repos")
            .path(coords.user())
            .path(coords.repo());
        Self {
            github,
            coords,
            request,
        }
    }

    /// Request scoped to this repository; children extend it.
    pub(crate) fn request(&self) -> &Request {
        &self.request
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coords
    }

    pub fn issues(&self) -> Issues {
        Issues::new(self.clone())
    }

    pub fn releases(&self) -> Releases {
        Releases::new(self.clone())
    }

    pub fn labels(&self) -> Labels {
        Labels::new(self.clone())
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<RepoInfo> {
        rest::fetch_as(&self.request).await
    }

    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GithubError;
    use crate::http::testing::FakeWire;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_repo_uri() {
        let wire = FakeWire::new();
        let repo = wire.github().repos().get(Coordinates::new("jcabi", "jcabi-github"));
        assert_eq!(repo.to_string(), "https://api.github.com/repos/jcabi/jcabi-github");
        assert_eq!(repo.coordinates().to_string(), "jcabi/jcabi-github");
    }

    #[tokio::test]
    async fn test_create_repo() {
        let wire = FakeWire::new().reply(201, r#"{"id":1,"full_name":"octocat/hello"}"#);
        let repo = wire
            .github()
            .repos()
            .create(&json!({"name": "hello"}))
            .await
            .unwrap();

        assert_eq!(repo.coordinates(), &Coordinates::new("octocat", "hello"));
        let sent = wire.last();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path(), "/user/repos");
        assert_eq!(sent.json(), json!({"name": "hello"}));
    }

    #[tokio::test]
    async fn test_create_repo_without_full_name() {
        let wire = FakeWire::new().reply(201, r#"{"id":1}"#);
        let result = wire.github().repos().create(&json!({"name": "x"})).await;
        assert!(matches!(result, Err(GithubError::UnexpectedJson(_))));
    }

    #[tokio::test]
    async fn test_remove_repo() {
        let wire = FakeWire::new().reply(204, "");
        wire.github()
            .repos()
            .remove(&Coordinates::new("octocat", "hello"))
            .await
            .unwrap();

        let sent = wire.last();
        assert_eq!(sent.method, Method::DELETE);
        assert_eq!(sent.path(), "/repos/octocat/hello");
    }

    #[tokio::test]
    async fn test_repo_info_and_patch() {
        let wire = FakeWire::new()
            .reply(
                200,
                r#"{"id":1296269,"name":"Hello-World","full_name":"octocat/Hello-World",
                    "owner":{"id":1,"login":"octocat","type":"User"},"private":false,
                    "default_branch":"main","updated_at":"2011-01-26T19:14:43Z"}"#,
            )
            .reply(200, "{}");
        let repo = wire.github().repos().get(Coordinates::new("octocat", "Hello-World"));

        let info = repo.info().await.unwrap();
        assert_eq!(info.full_name, "octocat/Hello-World");
        assert_eq!(info.owner.login, "octocat");
        assert_eq!(info.default_branch.as_deref(), Some("main"));

        repo.patch(&json!({"description": "updated"})).await.unwrap();
        let sent = wire.last();
        assert_eq!(sent.method, Method::PATCH);
        assert_eq!(sent.path(), "/repos/octocat/Hello-World");
    }
}
