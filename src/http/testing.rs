// Recording wire for unit tests.
// Replays queued responses in order and keeps every request it was handed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::Result;
use crate::github::Github;

use super::{Request, Response, Wire};

/// A request as the wire saw it.
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: Method,
    pub uri: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Default)]
struct State {
    replies: VecDeque<(StatusCode, HeaderMap, Vec<u8>)>,
    requests: Vec<Recorded>,
}

/// Cloneable fake; clones share the same queue and log.
#[derive(Clone, Default)]
pub(crate) struct FakeWire {
    state: Arc<Mutex<State>>,
}

impl FakeWire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply. Once the queue is empty the wire answers `200 {}`.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.reply_with(status, body, &[])
    }

    pub fn reply_with(self, status: u16, body: &str, headers: &[(&'static str, &str)]) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(
                HeaderName::from_static(*name),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        self.state.lock().unwrap().replies.push_back((
            StatusCode::from_u16(status).unwrap(),
            map,
            body.as_bytes().to_vec(),
        ));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("no request was sent")
    }

    /// Root client authenticated with a dummy token, talking to this wire.
    pub fn github(&self) -> Github {
        Github::builder()
            .token("secret")
            .wire(self.clone())
            .build()
            .unwrap()
    }
}

#[async_trait]
impl Wire for FakeWire {
    async fn send(&self, request: &Request) -> Result<Response> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(Recorded {
            method: request.method().clone(),
            uri: request.uri().clone(),
            headers: request.headers().clone(),
            body: request.body().to_vec(),
        });
        let (status, headers, body) = state
            .replies
            .pop_front()
            .unwrap_or_else(|| (StatusCode::OK, HeaderMap::new(), b"{}".to_vec()));
        Ok(Response::new(status, headers, body, request.uri().clone()))
    }
}
