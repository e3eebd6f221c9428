// Issue comment wrappers.
// Comments are posted under an issue but addressed repo-wide by id.

use std::fmt;

use serde_json::{Value, json};

use crate::error::Result;
use crate::http::Request;

use super::issues::Issue;
use super::rest;
use super::types::CommentInfo;

/// Comments of an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Comments {
    issue: Issue,
    request: Request,
}

impl Comments {
    pub(crate) fn new(issue: Issue) -> Self {
        let request = issue.request().path("comments");
        Self { issue, request }
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    pub fn get(&self, id: u64) -> Comment {
        Comment::new(self.issue.clone(), id)
    }

    pub async fn post(&self, body: &str) -> Result<Comment> {
        let created = rest::post(&self.request, &json!({"body": body})).await?;
        Ok(self.get(rest::u64_field(&created, "id")?))
    }

    pub async fn list(&self) -> Result<Vec<Comment>> {
        rest::list(&self.request)
            .await?
            .iter()
            .map(|item| rest::u64_field(item, "id").map(|id| self.get(id)))
            .collect()
    }
}

/// A single comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    issue: Issue,
    id: u64,
    request: Request,
}

impl Comment {
    pub(crate) fn new(issue: Issue, id: u64) -> Self {
        let request = issue
            .repo()
            .request()
            .path("issues/comments")
            .path(&id.to_string());
        Self { issue, id, request }
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    pub fn number(&self) -> u64 {
        self.id
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<CommentInfo> {
        rest::fetch_as(&self.request).await
    }

    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }

    pub async fn remove(&self) -> Result<()> {
        rest::remove(&self.request).await
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}
