// Transport abstraction.
// A Wire turns a request template into a response; decorators can wrap one another.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{GithubError, Result};

use super::request::Request;
use super::response::Response;

/// Sends a request template over the network, or pretends to.
#[async_trait]
pub trait Wire: Send + Sync {
    async fn send(&self, request: &Request) -> Result<Response>;
}

/// Default wire backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestWire {
    client: Client,
}

impl ReqwestWire {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().map_err(GithubError::Http)?;
        Ok(Self { client })
    }

    /// Reuse an existing client (proxies, timeouts, TLS settings).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Wire for ReqwestWire {
    async fn send(&self, request: &Request) -> Result<Response> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.uri().clone())
            .headers(request.headers().clone());
        if !request.body().is_empty() {
            builder = builder.body(request.body().to_vec());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let uri = response.url().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body, uri))
    }
}
