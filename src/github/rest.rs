// JSON verbs shared by the resource wrappers.
// Each helper pins the HTTP method and the status GitHub answers with on success.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GithubError, Result};
use crate::http::{Request, Response};

/// Send `request` with `method` (and an optional JSON body), asserting `expected`.
pub(crate) async fn exchange(
    request: &Request,
    method: Method,
    body: Option<&Value>,
    expected: StatusCode,
) -> Result<Response> {
    let mut request = request.with_method(method);
    if let Some(json) = body {
        request = request.with_json(json)?;
    }
    request.fetch().await?.assert_status(expected)
}

/// GET the resource as JSON.
pub(crate) async fn fetch(request: &Request) -> Result<Value> {
    exchange(request, Method::GET, None, StatusCode::OK)
        .await?
        .json()
}

/// GET the resource and deserialize it.
pub(crate) async fn fetch_as<T: DeserializeOwned>(request: &Request) -> Result<T> {
    Ok(serde_json::from_value(fetch(request).await?)?)
}

/// GET a JSON array.
pub(crate) async fn list(request: &Request) -> Result<Vec<Value>> {
    exchange(request, Method::GET, None, StatusCode::OK)
        .await?
        .json()
}

pub(crate) async fn patch(request: &Request, json: &Value) -> Result<()> {
    exchange(request, Method::PATCH, Some(json), StatusCode::OK).await?;
    Ok(())
}

/// POST a new resource, returning the created JSON.
pub(crate) async fn post(request: &Request, json: &Value) -> Result<Value> {
    exchange(request, Method::POST, Some(json), StatusCode::CREATED)
        .await?
        .json()
}

pub(crate) async fn remove(request: &Request) -> Result<()> {
    exchange(request, Method::DELETE, None, StatusCode::NO_CONTENT).await?;
    Ok(())
}

/// GET that answers `found` when the resource exists and 404 when it doesn't.
pub(crate) async fn probe(request: &Request, found: StatusCode) -> Result<bool> {
    let response = request.with_method(Method::GET).fetch().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(false);
    }
    response.assert_status(found)?;
    Ok(true)
}

pub(crate) fn u64_field(json: &Value, name: &str) -> Result<u64> {
    json.get(name)
        .and_then(Value::as_u64)
        .ok_or_else(|| missing(json, name))
}

pub(crate) fn str_field<'a>(json: &'a Value, name: &str) -> Result<&'a str> {
    json.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(json, name))
}

fn missing(json: &Value, name: &str) -> GithubError {
    GithubError::UnexpectedJson(format!("no '{}' in {}", name, json))
}
