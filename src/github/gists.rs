// Gist wrappers.
// Gists live at the API root; file contents are read through each file's raw_url.

use std::fmt;

use reqwest::{Method, StatusCode};
use serde_json::{Map, Value, json};
use url::Url;

use crate::error::{GithubError, Result};
use crate::http::Request;

use super::client::Github;
use super::rest;
use super::types::GistInfo;

/// Gists of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Gists {
    github: Github,
    request: Request,
}

impl Gists {
    pub(crate) fn new(github: Github) -> Self {
        let request = github.entry().path("gists");
        Self { github, request }
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn get(&self, id: &str) -> Result<Gist> {
        Gist::new(self.github.clone(), id)
    }

    /// Create a gist from `(file name, content)` pairs.
    pub async fn create(&self, files: &[(&str, &str)], public: bool) -> Result<Gist> {
        let created = rest::post(
            &self.request,
            &json!({"public": public, "files": files_json(files)}),
        )
        .await?;
        self.get(rest::str_field(&created, "id")?)
    }

    /// Gists of the authenticated user (public ones when anonymous).
    pub async fn list(&self) -> Result<Vec<Gist>> {
        rest::list(&self.request)
            .await?
            .iter()
            .map(|item| rest::str_field(item, "id").and_then(|id| self.get(id)))
            .collect()
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        rest::remove(&self.request.segment(id)?).await
    }
}

/// A single gist.
#[derive(Debug, Clone, PartialEq)]
pub struct Gist {
    github: Github,
    id: String,
    request: Request,
}

impl Gist {
    pub(crate) fn new(github: Github, id: &str) -> Result<Self> {
        let request = github.entry().path("gists").segment(id)?;
        Ok(Self {
            github,
            id: id.to_string(),
            request,
        })
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn identifier(&self) -> &str {
        &self.id
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<GistInfo> {
        rest::fetch_as(&self.request).await
    }

    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }

    /// Content of one file, fetched from its raw URL.
    pub async fn read(&self, file: &str) -> Result<String> {
        let json = self.json().await?;
        let raw_url = json
            .get("files")
            .and_then(|files| files.get(file))
            .and_then(|entry| entry.get("raw_url"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                GithubError::UnexpectedJson(format!("gist {} has no file '{}'", self.id, file))
            })?;
        self.github
            .entry()
            .with_uri(Url::parse(raw_url)?)?
            .with_method(Method::GET)
            .fetch()
            .await?
            .assert_status(StatusCode::OK)?
            .text()
    }

    /// Overwrite (or add) one file.
    pub async fn write(&self, file: &str, content: &str) -> Result<()> {
        self.patch(&json!({"files": files_json(&[(file, content)])}))
            .await
    }

    pub async fn star(&self) -> Result<()> {
        rest::exchange(
            &self.request.path("star"),
            Method::PUT,
            None,
            StatusCode::NO_CONTENT,
        )
        .await?;
        Ok(())
    }

    pub async fn unstar(&self) -> Result<()> {
        rest::remove(&self.request.path("star")).await
    }

    pub async fn starred(&self) -> Result<bool> {
        rest::probe(&self.request.path("star"), StatusCode::NO_CONTENT).await
    }

    /// Fork into the authenticated user's account.
    pub async fn fork(&self) -> Result<Gist> {
        let created = rest::post(&self.request.path("forks"), &json!({})).await?;
        Gist::new(self.github.clone(), rest::str_field(&created, "id")?)
    }
}

impl fmt::Display for Gist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}

fn files_json(files: &[(&str, &str)]) -> Value {
    let files: Map<String, Value> = files
        .iter()
        .map(|(name, content)| (name.to_string(), json!({"content": content})))
        .collect();
    Value::Object(files)
}
