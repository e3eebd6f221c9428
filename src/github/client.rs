// GitHub root client.
// Builds the authenticated entry request and hands out resource factories.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use url::Url;

use crate::error::{GithubError, Result};
use crate::http::{Request, ReqwestWire, Wire};

use super::gists::Gists;
use super::limits::Limits;
use super::repos::Repos;
use super::users::Users;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_UPLOADS_BASE: &str = "https://uploads.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("ghrest/", env!("CARGO_PKG_VERSION"));

/// How the entry request authenticates.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    Anonymous,
    /// HTTP Basic authentication.
    Basic { user: String, password: String },
    /// OAuth token, sent as `Authorization: token <token>`.
    Token(String),
}

impl Credentials {
    /// Token from the GITHUB_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| GithubError::MissingToken)?;
        Ok(Credentials::Token(token))
    }

    fn authorization(&self) -> Result<Option<HeaderValue>> {
        let value = match self {
            Credentials::Anonymous => return Ok(None),
            Credentials::Basic { user, password } => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
            }
            Credentials::Token(token) => format!("token {}", token),
        };
        let mut header = HeaderValue::from_str(&value)?;
        header.set_sensitive(true);
        Ok(Some(header))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Anonymous => f.write_str("Anonymous"),
            Credentials::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("password", &"***")
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&"***").finish(),
        }
    }
}

/// Configuration for a [`Github`] client.
pub struct GithubBuilder {
    base_url: String,
    credentials: Credentials,
    wire: Option<Arc<dyn Wire>>,
}

impl Default for GithubBuilder {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            credentials: Credentials::Anonymous,
            wire: None,
        }
    }
}

impl GithubBuilder {
    /// API root, e.g. `https://ghe.example.com/api/v3` for GitHub Enterprise.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::Token(token.into()))
    }

    pub fn basic(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials(Credentials::Basic {
            user: user.into(),
            password: password.into(),
        })
    }

    /// Send requests through a custom wire instead of a fresh reqwest client.
    pub fn wire(mut self, wire: impl Wire + 'static) -> Self {
        self.wire = Some(Arc::new(wire));
        self
    }

    pub fn build(self) -> Result<Github> {
        let wire: Arc<dyn Wire> = match self.wire {
            Some(wire) => wire,
            None => Arc::new(ReqwestWire::new()?),
        };

        let mut entry = Request::with_wire(Url::parse(&self.base_url)?, wire)?
            .header(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(
                HeaderName::from_static("x-github-api-version"),
                HeaderValue::from_static(GITHUB_API_VERSION),
            );
        if let Some(auth) = self.credentials.authorization()? {
            entry = entry.header(AUTHORIZATION, auth);
        }

        Ok(Github::new(entry))
    }
}

/// Entry point to the API: owns the root request every resource derives from.
///
/// ```no_run
/// # async fn example() -> ghrest::Result<()> {
/// let github = ghrest::Github::token("ghp_xxx")?;
/// let repo = github.repos().get("jcabi/jcabi-github".parse()?);
/// let issue = repo.issues().create("issue title", "issue body").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Github {
    entry: Request,
}

impl Github {
    /// Client starting from a custom entry request.
    pub fn new(entry: Request) -> Self {
        Self { entry }
    }

    pub fn builder() -> GithubBuilder {
        GithubBuilder::default()
    }

    /// Unauthenticated client.
    pub fn anonymous() -> Result<Self> {
        Self::builder().build()
    }

    /// Client using HTTP Basic authentication.
    pub fn basic(user: &str, password: &str) -> Result<Self> {
        Self::builder().basic(user, password).build()
    }

    /// Client using an OAuth token.
    pub fn token(token: &str) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Client from GITHUB_TOKEN, and GITHUB_API_URL when set.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder().credentials(Credentials::from_env()?);
        if let Ok(base_url) = std::env::var("GITHUB_API_URL") {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// The root request; decorate it with [`Request::through`] and pass it back to [`Github::new`].
    pub fn entry(&self) -> &Request {
        &self.entry
    }

    pub fn repos(&self) -> Repos {
        Repos::new(self.clone())
    }

    pub fn gists(&self) -> Gists {
        Gists::new(self.clone())
    }

    pub fn users(&self) -> Users {
        Users::new(self.clone())
    }

    pub fn limits(&self) -> Limits {
        Limits::new(self.clone())
    }
}
