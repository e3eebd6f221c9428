//! Object model over the GitHub REST API.
//!
//! Every GitHub resource (repository, issue, comment, label, gist, release,
//! release asset, user, rate limit) is a small value type holding an
//! immutable [`Request`] template scoped to that resource's URI. Methods
//! translate directly into one HTTP call: `json()` / `info()` GET the
//! resource, `patch()` PATCHes it, `remove()` DELETEs it.
//!
//! ```no_run
//! use ghrest::{Coordinates, Github};
//!
//! # async fn example() -> ghrest::Result<()> {
//! let github = Github::token("ghp_your_token_here")?;
//! let repo = github.repos().get(Coordinates::new("jcabi", "jcabi-github"));
//! let issue = repo.issues().create("issue title", "issue body").await?;
//! issue.comments().post("first!").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Requests go out through a [`Wire`]. The default one wraps a reqwest
//! client; callers can swap it via [`GithubBuilder::wire`] or decorate the
//! entry request (for retries, logging, metrics) with [`Request::through`]:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use ghrest::{Github, Request, Response, Wire};
//!
//! struct Retry(Arc<dyn Wire>);
//!
//! #[async_trait]
//! impl Wire for Retry {
//!     async fn send(&self, request: &Request) -> ghrest::Result<Response> {
//!         match self.0.send(request).await {
//!             Ok(response) => Ok(response),
//!             Err(_) => self.0.send(request).await,
//!         }
//!     }
//! }
//!
//! # fn example() -> ghrest::Result<()> {
//! let plain = Github::token("ghp_your_token_here")?;
//! let github = Github::new(plain.entry().through(Retry));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod github;
pub mod http;

pub use error::{GithubError, Result};
pub use github::*;
pub use http::{ReqwestWire, Request, Response, Wire};
