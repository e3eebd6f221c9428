// User wrappers.
// The authenticated user lives at /user, everybody else at /users/{login}.

use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::http::Request;

use super::client::Github;
use super::rest;
use super::types::UserInfo;

/// Users of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Users {
    github: Github,
}

impl Users {
    pub(crate) fn new(github: Github) -> Self {
        Self { github }
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    /// The user the client is authenticated as.
    pub fn me(&self) -> User {
        let request = self.github.entry().path("user");
        User {
            github: self.github.clone(),
            login: None,
            request,
        }
    }

    pub fn get(&self, login: &str) -> Result<User> {
        let request = self.github.entry().path("users").segment(login)?;
        Ok(User {
            github: self.github.clone(),
            login: Some(login.to_string()),
            request,
        })
    }
}

/// A single user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    github: Github,
    login: Option<String>,
    request: Request,
}

impl User {
    pub fn github(&self) -> &Github {
        &self.github
    }

    /// Login name; for [`Users::me`] it is fetched from the API.
    pub async fn login(&self) -> Result<String> {
        match &self.login {
            Some(login) => Ok(login.clone()),
            None => Ok(rest::str_field(&self.json().await?, "login")?.to_string()),
        }
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<UserInfo> {
        rest::fetch_as(&self.request).await
    }

    /// Update the profile; GitHub only accepts this on the authenticated user.
    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeWire;
    use crate::github::types::OwnerType;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_named_user_login_needs_no_request() {
        let wire = FakeWire::new();
        let user = wire.github().users().get("octocat").unwrap();

        assert_eq!(user.login().await.unwrap(), "octocat");
        assert!(wire.requests().is_empty());
        assert_eq!(user.to_string(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_login_is_one_segment() {
        let users = FakeWire::new().github().users();
        assert_eq!(
            users.get("a/b").unwrap().to_string(),
            "https://api.github.com/users/a%2Fb"
        );
        assert!(matches!(
            users.get(""),
            Err(crate::error::GithubError::InvalidUri(_))
        ));
    }

    #[tokio::test]
    async fn test_me_fetches_login() {
        let wire = FakeWire::new().reply(200, r#"{"id":1,"login":"jeff"}"#);
        let me = wire.github().users().me();

        assert_eq!(me.login().await.unwrap(), "jeff");
        assert_eq!(wire.last().path(), "/user");
    }

    #[tokio::test]
    async fn test_user_info() {
        let wire = FakeWire::new().reply(
            200,
            r#"{"id":9919,"login":"github","type":"Organization","name":"GitHub"}"#,
        );
        let info = wire.github().users().get("github").unwrap().info().await.unwrap();
        assert_eq!(info.owner_type, OwnerType::Organization);
        assert_eq!(info.name.as_deref(), Some("GitHub"));
    }

    #[tokio::test]
    async fn test_patch_me() {
        let wire = FakeWire::new();
        wire.github()
            .users()
            .me()
            .patch(&json!({"bio": "hi"}))
            .await
            .unwrap();

        let sent = wire.last();
        assert_eq!(sent.method, Method::PATCH);
        assert_eq!(sent.path(), "/user");
    }
}
