// Label wrappers.
// Labels are defined per repository and attached to issues by name.

use std::fmt;

use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use crate::error::Result;
use crate::http::Request;

use super::issues::Issue;
use super::repos::Repo;
use super::rest;
use super::types::LabelInfo;

/// Labels defined in a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    repo: Repo,
    request: Request,
}

impl Labels {
    pub(crate) fn new(repo: Repo) -> Self {
        let request = repo.request().path("labels");
        Self { repo, request }
    }

    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    pub fn get(&self, name: &str) -> Result<Label> {
        Label::new(self.repo.clone(), name)
    }

    /// Define a label; `color` is a hex code without the leading `#`.
    pub async fn create(&self, name: &str, color: &str) -> Result<Label> {
        let created = rest::post(&self.request, &json!({"name": name, "color": color})).await?;
        self.get(rest::str_field(&created, "name")?)
    }

    pub async fn list(&self) -> Result<Vec<Label>> {
        labels_of(&self.repo, rest::list(&self.request).await?)
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        rest::remove(&self.request.segment(name)?).await
    }
}

/// A single repository label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    repo: Repo,
    name: String,
    request: Request,
}

impl Label {
    pub(crate) fn new(repo: Repo, name: &str) -> Result<Self> {
        let request = repo.request().path("labels").segment(name)?;
        Ok(Self {
            repo,
            name: name.to_string(),
            request,
        })
    }

    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<LabelInfo> {
        rest::fetch_as(&self.request).await
    }

    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}

/// Labels attached to an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueLabels {
    issue: Issue,
    request: Request,
}

impl IssueLabels {
    pub(crate) fn new(issue: Issue) -> Self {
        let request = issue.request().path("labels");
        Self { issue, request }
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    /// Attach labels, keeping the ones already there. Returns the resulting set.
    pub async fn add(&self, names: &[&str]) -> Result<Vec<Label>> {
        self.send(Method::POST, names).await
    }

    /// Replace every label of the issue. Returns the resulting set.
    pub async fn replace(&self, names: &[&str]) -> Result<Vec<Label>> {
        self.send(Method::PUT, names).await
    }

    /// Detach one label. Returns the labels left.
    pub async fn remove(&self, name: &str) -> Result<Vec<Label>> {
        let left = rest::exchange(
            &self.request.segment(name)?,
            Method::DELETE,
            None,
            StatusCode::OK,
        )
        .await?
        .json()?;
        labels_of(self.issue.repo(), left)
    }

    /// Detach every label.
    pub async fn clear(&self) -> Result<()> {
        rest::remove(&self.request).await
    }

    pub async fn list(&self) -> Result<Vec<Label>> {
        labels_of(self.issue.repo(), rest::list(&self.request).await?)
    }

    async fn send(&self, method: Method, names: &[&str]) -> Result<Vec<Label>> {
        let body = json!({"labels": names});
        let items = rest::exchange(&self.request, method, Some(&body), StatusCode::OK)
            .await?
            .json()?;
        labels_of(self.issue.repo(), items)
    }
}

fn labels_of(repo: &Repo, items: Vec<Value>) -> Result<Vec<Label>> {
    items
        .iter()
        .map(|item| rest::str_field(item, "name").and_then(|name| Label::new(repo.clone(), name)))
        .collect()
}
