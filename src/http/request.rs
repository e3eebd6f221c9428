// Immutable HTTP request template.
// Every modifier returns a new copy, so a template can be shared and specialized freely.

use std::fmt;
use std::sync::Arc;

use log::debug;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{GithubError, Result};

use super::response::Response;
use super::wire::Wire;

/// HTTP request template: URI, verb, headers and body plus the wire that sends it.
#[derive(Clone)]
pub struct Request {
    uri: Url,
    method: Method,
    headers: HeaderMap,
    body: Vec<u8>,
    wire: Arc<dyn Wire>,
}

impl Request {
    /// Create a GET template for `uri` sent through `wire`.
    pub fn new(uri: &str, wire: impl Wire + 'static) -> Result<Self> {
        Self::with_wire(Url::parse(uri)?, Arc::new(wire))
    }

    /// Create a GET template from an already shared wire.
    pub fn with_wire(uri: Url, wire: Arc<dyn Wire>) -> Result<Self> {
        if uri.cannot_be_a_base() {
            return Err(GithubError::InvalidUri(uri.to_string()));
        }
        Ok(Self {
            uri,
            method: Method::GET,
            headers: HeaderMap::new(),
            body: Vec::new(),
            wire,
        })
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Append path segments. `segment` may hold several `/`-separated parts;
    /// empty parts are skipped and each part is percent-encoded.
    pub fn path(&self, segment: &str) -> Self {
        let mut next = self.clone();
        if let Ok(mut segments) = next.uri.path_segments_mut() {
            segments.pop_if_empty();
            for part in segment.split('/').filter(|part| !part.is_empty()) {
                segments.push(part);
            }
        }
        next
    }

    /// Append exactly one segment, percent-encoding any `/` it holds.
    /// Caller-supplied identifiers go through here; an empty one is rejected.
    pub fn segment(&self, part: &str) -> Result<Self> {
        if part.is_empty() {
            return Err(GithubError::InvalidUri(format!(
                "empty path segment after {}",
                self.uri
            )));
        }
        let mut next = self.clone();
        next.uri
            .path_segments_mut()
            .map_err(|_| GithubError::InvalidUri(self.uri.to_string()))?
            .pop_if_empty()
            .push(part);
        Ok(next)
    }

    /// Append a query pair.
    pub fn query(&self, key: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.uri.query_pairs_mut().append_pair(key, value);
        next
    }

    /// Replace the whole URI, keeping headers and wire.
    pub fn with_uri(&self, uri: Url) -> Result<Self> {
        if uri.cannot_be_a_base() {
            return Err(GithubError::InvalidUri(uri.to_string()));
        }
        let mut next = self.clone();
        next.uri = uri;
        Ok(next)
    }

    pub fn with_method(&self, method: Method) -> Self {
        let mut next = self.clone();
        next.method = method;
        next
    }

    /// Add a header value, keeping any existing values of that header.
    pub fn header(&self, name: HeaderName, value: HeaderValue) -> Self {
        let mut next = self.clone();
        next.headers.append(name, value);
        next
    }

    /// Drop every value of a header.
    pub fn reset(&self, name: HeaderName) -> Self {
        let mut next = self.clone();
        next.headers.remove(name);
        next
    }

    /// Serialize `body` as the JSON payload.
    pub fn with_json<T: Serialize + ?Sized>(&self, body: &T) -> Result<Self> {
        let mut next = self
            .reset(CONTENT_TYPE)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        next.body = serde_json::to_vec(body)?;
        Ok(next)
    }

    pub fn with_body(&self, body: Vec<u8>) -> Self {
        let mut next = self.clone();
        next.body = body;
        next
    }

    /// Wrap the current wire in a decorator, e.g. one that retries.
    pub fn through<W, F>(&self, decorate: F) -> Self
    where
        F: FnOnce(Arc<dyn Wire>) -> W,
        W: Wire + 'static,
    {
        let mut next = self.clone();
        next.wire = Arc::new(decorate(Arc::clone(&self.wire)));
        next
    }

    /// Send the request through its wire.
    pub async fn fetch(&self) -> Result<Response> {
        debug!("{} {}", self.method, self.uri);
        let response = self.wire.send(self).await?;
        debug!("{} {} -> {}", self.method, self.uri, response.status());
        Ok(response)
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
            && self.method == other.method
            && self.headers == other.headers
            && self.body == other.body
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri.as_str())
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri.as_str())
    }
}
