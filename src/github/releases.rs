// Release wrappers.
// Releases of a repo, addressed by their numeric id.

use std::fmt;

use serde_json::{Value, json};

use crate::error::Result;
use crate::http::Request;

use super::assets::ReleaseAssets;
use super::repos::Repo;
use super::rest;
use super::types::ReleaseInfo;

/// Releases of a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Releases {
    repo: Repo,
    request: Request,
}

impl Releases {
    pub(crate) fn new(repo: Repo) -> Self {
        let request = repo.request().path("releases");
        Self { repo, request }
    }

    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    pub fn get(&self, number: u64) -> Release {
        Release::new(self.repo.clone(), number)
    }

    /// Create a release from an existing or new tag.
    pub async fn create(&self, tag: &str) -> Result<Release> {
        let created = rest::post(&self.request, &json!({"tag_name": tag})).await?;
        Ok(self.get(rest::u64_field(&created, "id")?))
    }

    pub async fn list(&self) -> Result<Vec<Release>> {
        rest::list(&self.request)
            .await?
            .iter()
            .map(|item| rest::u64_field(item, "id").map(|id| self.get(id)))
            .collect()
    }

    pub async fn remove(&self, number: u64) -> Result<()> {
        self.get(number).remove().await
    }
}

/// A single release.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    repo: Repo,
    number: u64,
    request: Request,
}

impl Release {
    pub(crate) fn new(repo: Repo, number: u64) -> Self {
        let request = repo.request().path("releases").path(&number.to_string());
        Self {
            repo,
            number,
            request,
        }
    }

    pub(crate) fn request(&self) -> &Request {
        &self.request
    }

    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn assets(&self) -> ReleaseAssets {
        ReleaseAssets::new(self.clone())
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<ReleaseInfo> {
        rest::fetch_as(&self.request).await
    }

    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }

    pub async fn remove(&self) -> Result<()> {
        rest::remove(&self.request).await
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}
