// GitHub resource model.
// Root client, repository coordinates, typed snapshots and one wrapper per API resource.

pub mod assets;
pub mod client;
pub mod comments;
pub mod coordinates;
pub mod gists;
pub mod issues;
pub mod labels;
pub mod limits;
pub mod releases;
pub mod repos;
pub mod types;
pub mod users;

mod rest;

pub use assets::{ReleaseAsset, ReleaseAssets};
pub use client::{Credentials, GITHUB_API_BASE, GITHUB_UPLOADS_BASE, Github, GithubBuilder};
pub use comments::{Comment, Comments};
pub use coordinates::Coordinates;
pub use gists::{Gist, Gists};
pub use issues::{Issue, Issues};
pub use labels::{IssueLabels, Label, Labels};
pub use limits::{Limit, Limits};
pub use releases::{Release, Releases};
pub use repos::{Repo, Repos};
pub use types::*;
pub use users::{User, Users};
