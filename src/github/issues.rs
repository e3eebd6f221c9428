// Issue wrappers.
// Issues lists and opens issues of a repo; Issue addresses one by number.

use std::fmt;

use serde_json::{Value, json};

use crate::error::Result;
use crate::http::Request;

use super::comments::Comments;
use super::labels::IssueLabels;
use super::repos::Repo;
use super::rest;
use super::types::IssueInfo;

/// Issues of a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Issues {
    repo: Repo,
    request: Request,
}

impl Issues {
    pub(crate) fn new(repo: Repo) -> Self {
        let request = repo.request().path("issues");
        Self { repo, request }
    }

    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    pub fn get(&self, number: u64) -> Issue {
        Issue::new(self.repo.clone(), number)
    }

    /// Open a new issue.
    pub async fn create(&self, title: &str, body: &str) -> Result<Issue> {
        let created = rest::post(&self.request, &json!({"title": title, "body": body})).await?;
        Ok(self.get(rest::u64_field(&created, "number")?))
    }

    /// One page of issues; `params` go to the query string (`state`, `labels`, `page`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Vec<Issue>> {
        let request = params
            .iter()
            .fold(self.request.clone(), |request, (key, value)| request.query(key, value));
        rest::list(&request)
            .await?
            .iter()
            .map(|item| rest::u64_field(item, "number").map(|number| self.get(number)))
            .collect()
    }
}

/// A single issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    repo: Repo,
    number: u64,
    request: Request,
}

impl Issue {
    pub(crate) fn new(repo: Repo, number: u64) -> Self {
        let request = repo.request().path("issues").path(&number.to_string());
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

    pub fn comments(&self) -> Comments {
        Comments::new(self.clone())
    }

    pub fn labels(&self) -> IssueLabels {
        IssueLabels::new(self.clone())
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<IssueInfo> {
        rest::fetch_as(&self.request).await
    }

    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }

    /// Whether the issue exists (404 means it doesn't).
    pub async fn exists(&self) -> Result<bool> {
        rest::probe(&self.request, reqwest::StatusCode::OK).await
    }

    pub async fn close(&self) -> Result<()> {
        self.patch(&json!({"state": "closed"})).await
    }

    pub async fn reopen(&self) -> Result<()> {
        self.patch(&json!({"state": "open"})).await
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}
