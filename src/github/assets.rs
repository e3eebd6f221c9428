// Release asset wrappers.
// Assets are listed under their release but addressed as /repos/{user}/{repo}/releases/assets/{id}.

use std::fmt;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::Result;
use crate::http::Request;

use super::client::GITHUB_UPLOADS_BASE;
use super::releases::Release;
use super::rest;
use super::types::AssetInfo;

const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// Assets of a release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAssets {
    release: Release,
    request: Request,
}

impl ReleaseAssets {
    pub(crate) fn new(release: Release) -> Self {
        let request = release.request().path("assets");
        Self { release, request }
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn get(&self, number: u64) -> ReleaseAsset {
        ReleaseAsset::new(self.release.clone(), number)
    }

    pub async fn list(&self) -> Result<Vec<ReleaseAsset>> {
        rest::list(&self.request)
            .await?
            .iter()
            .map(|item| rest::u64_field(item, "id").map(|id| self.get(id)))
            .collect()
    }

    /// Upload a file as a new asset of this release.
    pub async fn upload(
        &self,
        content: &[u8],
        content_type: &str,
        name: &str,
    ) -> Result<ReleaseAsset> {
        let repo = self.release.repo();
        let entry = repo.github().entry();
        let coords = repo.coordinates();
        let created: Value = entry
            .with_uri(upload_origin(entry.uri())?)?
            .path("repos")
            .path(coords.user())
            .path(coords.repo())
            .path("releases")
            .path(&self.release.number().to_string())
            .path("assets")
            .query("name", name)
            .with_method(Method::POST)
            .reset(CONTENT_TYPE)
            .header(CONTENT_TYPE, HeaderValue::from_str(content_type)?)
            .with_body(content.to_vec())
            .fetch()
            .await?
            .assert_status(StatusCode::CREATED)?
            .json()?;
        Ok(self.get(rest::u64_field(&created, "id")?))
    }
}

/// Uploads go to a dedicated host on github.com and to the entry's origin elsewhere.
fn upload_origin(api: &Url) -> Result<Url> {
    if api.host_str() == Some("api.github.com") {
        return Ok(Url::parse(GITHUB_UPLOADS_BASE)?);
    }
    let mut origin = api.clone();
    origin.set_path("");
    origin.set_query(None);
    origin.set_fragment(None);
    Ok(origin)
}

/// A single release asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAsset {
    release: Release,
    number: u64,
    request: Request,
}

impl ReleaseAsset {
    pub(crate) fn new(release: Release, number: u64) -> Self {
        let request = release
            .repo()
            .request()
            .path("releases/assets")
            .path(&number.to_string());
        Self {
            release,
            number,
            request,
        }
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub async fn json(&self) -> Result<Value> {
        rest::fetch(&self.request).await
    }

    pub async fn info(&self) -> Result<AssetInfo> {
        rest::fetch_as(&self.request).await
    }

    /// Edit `name` or `label`.
    pub async fn patch(&self, json: &Value) -> Result<()> {
        rest::patch(&self.request, json).await
    }

    pub async fn remove(&self) -> Result<()> {
        rest::remove(&self.request).await
    }

    /// Raw asset content.
    pub async fn raw(&self) -> Result<Vec<u8>> {
        Ok(self
            .request
            .with_method(Method::GET)
            .reset(ACCEPT)
            .header(ACCEPT, HeaderValue::from_static(RAW_MEDIA_TYPE))
            .fetch()
            .await?
            .assert_status(StatusCode::OK)?
            .into_body())
    }
}

impl fmt::Display for ReleaseAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GithubError;
    use crate::github::Coordinates;
    use crate::http::testing::FakeWire;
    use serde_json::json;

    fn release(wire: &FakeWire) -> Release {
        wire.github()
            .repos()
            .get(Coordinates::new("octocat", "hello"))
            .releases()
            .get(3)
    }

    #[test]
    fn test_asset_uri() {
        let wire = FakeWire::new();
        let asset = release(&wire).assets().get(7);
        assert_eq!(
            asset.to_string(),
            "https://api.github.com/repos/octocat/hello/releases/assets/7"
        );
        assert_eq!(asset.number(), 7);
        assert_eq!(asset.release().number(), 3);
    }

    #[tokio::test]
    async fn test_fetch_and_patch() {
        let wire = FakeWire::new()
            .reply(200, r#"{"id":7,"name":"app.zip","content_type":"application/zip"}"#)
            .reply(200, "{}");
        let asset = release(&wire).assets().get(7);

        let info = asset.info().await.unwrap();
        assert_eq!(info.name, "app.zip");

        asset.patch(&json!({"name": "app-1.0.zip"})).await.unwrap();
        let sent = wire.last();
        assert_eq!(sent.method, Method::PATCH);
        assert_eq!(sent.json(), json!({"name": "app-1.0.zip"}));
    }

    #[tokio::test]
    async fn test_remove_expects_no_content() {
        let wire = FakeWire::new().reply(204, "").reply(200, "{}");
        let asset = release(&wire).assets().get(7);

        asset.remove().await.unwrap();
        assert_eq!(wire.last().method, Method::DELETE);

        let err = asset.remove().await.unwrap_err();
        assert!(matches!(
            err,
            GithubError::UnexpectedStatus {
                expected: StatusCode::NO_CONTENT,
                actual: StatusCode::OK,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_raw_overrides_accept() {
        let wire = FakeWire::new().reply(200, "binary-bytes");
        let body = release(&wire).assets().get(7).raw().await.unwrap();

        assert_eq!(body, b"binary-bytes");
        let sent = wire.last();
        assert_eq!(sent.method, Method::GET);
        let accepts: Vec<_> = sent.headers.get_all(ACCEPT).iter().collect();
        assert_eq!(accepts, [RAW_MEDIA_TYPE]);
    }

    #[tokio::test]
    async fn test_raw_requires_ok() {
        let wire = FakeWire::new().reply(404, "");
        let result = release(&wire).assets().get(7).raw().await;
        assert!(matches!(result, Err(GithubError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upload_goes_to_upload_host() {
        let wire = FakeWire::new().reply(201, r#"{"id":99}"#);
        let asset = release(&wire)
            .assets()
            .upload(b"PK\x03\x04", "application/zip", "app.zip")
            .await
            .unwrap();

        assert_eq!(asset.number(), 99);
        let sent = wire.last();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(
            sent.uri.as_str(),
            "https://uploads.github.com/repos/octocat/hello/releases/3/assets?name=app.zip"
        );
        assert_eq!(sent.headers[CONTENT_TYPE], "application/zip");
        assert_eq!(sent.body, b"PK\x03\x04");
    }

    #[test]
    fn test_upload_origin_for_other_hosts() {
        let api = Url::parse("https://ghe.example.com/api/v3").unwrap();
        assert_eq!(
            upload_origin(&api).unwrap().as_str(),
            "https://ghe.example.com/"
        );

        let local = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(upload_origin(&local).unwrap(), local);
    }

    #[tokio::test]
    async fn test_list_assets() {
        let wire = FakeWire::new().reply(200, r#"[{"id":1},{"id":2}]"#);
        let all = release(&wire).assets().list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(wire.last().path(), "/repos/octocat/hello/releases/3/assets");
    }
}
