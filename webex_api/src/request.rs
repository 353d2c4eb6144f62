//! Request descriptors handed to a [`Transport`](crate::Transport).

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::params::Params;

/// One HTTP exchange: method, path relative to the session base URL, query
/// parameters, optional JSON body and the status the endpoint answers with on
/// success.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Relative path (`workspaces`), absolute path (`/organization/...`) or
    /// full URL (continuation links).
    pub path: String,
    pub query: Params,
    pub body: Option<Value>,
    pub expected: StatusCode,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let expected = default_status(&method);
        Self {
            method,
            path: path.into(),
            query: Params::new(),
            body: None,
            expected,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Overrides the success status for endpoints that deviate from the
    /// per-method default (e.g. `201 Created`).
    pub fn expect(mut self, status: StatusCode) -> Self {
        self.expected = status;
        self
    }
}

fn default_status(method: &Method) -> StatusCode {
    if *method == Method::DELETE {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::OK
    }
}

/// Where a paginated response keeps its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsKey {
    /// A named field of the response object.
    Field(&'static str),
    /// The response body itself is the array.
    Root,
}

impl Default for ItemsKey {
    fn default() -> Self {
        ItemsKey::Field("items")
    }
}

impl ItemsKey {
    /// Pulls the item array out of a page body.
    pub fn extract(&self, body: Value) -> Result<Vec<Value>, crate::Error> {
        let items = match (self, body) {
            (ItemsKey::Root, Value::Array(items)) => return Ok(items),
            (ItemsKey::Root, _) => {
                return Err(crate::Error::MalformedResponse(
                    "expected a JSON array".to_string(),
                ))
            }
            (ItemsKey::Field(name), Value::Object(mut map)) => map.remove(*name).ok_or_else(|| {
                crate::Error::MalformedResponse(format!("missing `{}` field", name))
            })?,
            (ItemsKey::Field(name), _) => {
                return Err(crate::Error::MalformedResponse(format!(
                    "expected an object holding `{}`",
                    name
                )))
            }
        };
        match items {
            Value::Array(items) => Ok(items),
            _ => Err(crate::Error::MalformedResponse(format!(
                "`{}` is not an array",
                self
            ))),
        }
    }
}

impl std::fmt::Display for ItemsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemsKey::Field(name) => write!(f, "{}", name),
            ItemsKey::Root => write!(f, "<root>"),
        }
    }
}
