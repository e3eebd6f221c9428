// GitHub API response types.
// Typed snapshots of the JSON behind each resource wrapper.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner type discriminator (user or organization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OwnerType {
    #[default]
    User,
    Organization,
    Bot,
    #[serde(other)]
    Unknown,
}

/// GitHub user or organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub login: String,
    #[serde(rename = "type", default)]
    pub owner_type: OwnerType,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

/// GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoInfo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: UserInfo,
    pub private: bool,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub default_branch: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Issue state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

/// GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueInfo {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub state: IssueState,
    pub user: Option<UserInfo>,
    pub assignee: Option<UserInfo>,
    #[serde(default)]
    pub labels: Vec<LabelInfo>,
    #[serde(default)]
    pub comments: u64,
    pub html_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl IssueInfo {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}

/// Comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentInfo {
    pub id: u64,
    pub body: String,
    pub user: Option<UserInfo>,
    pub html_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Repository label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelInfo {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    #[serde(default)]
    pub default: bool,
}

/// One file of a gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: String,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub language: Option<String>,
    pub raw_url: String,
    #[serde(default)]
    pub size: u64,
    pub content: Option<String>,
    #[serde(default)]
    pub truncated: bool,
}

/// GitHub gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistInfo {
    pub id: String,
    pub description: Option<String>,
    pub public: bool,
    pub owner: Option<UserInfo>,
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    pub html_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// GitHub release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub id: u64,
    pub tag_name: String,
    pub target_commitish: Option<String>,
    pub name: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub author: Option<UserInfo>,
    #[serde(default)]
    pub assets: Vec<AssetInfo>,
    pub html_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

/// File attached to a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetInfo {
    pub id: u64,
    pub name: String,
    pub label: Option<String>,
    pub content_type: String,
    pub state: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_count: u64,
    pub browser_download_url: Option<String>,
    pub uploader: Option<UserInfo>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Rate limit of one API resource, from `/rate_limit` or response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
    #[serde(default)]
    pub used: u64,
}

impl RateLimit {
    /// Moment the window resets.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.reset)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
