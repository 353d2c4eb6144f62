//! Request parameter maps: the unset-value filter, kind checks and
//! query-string encoding shared by every endpoint.

use serde_json::{Map, Value};
use url::Url;

use crate::Error;

/// A filtered set of request parameters, used both as a query string and as a
/// JSON body.
///
/// Only present values are ever stored: building a `Params` drops anything
/// that is unset (`None` for named values, `null` for extras).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges caller-supplied extras with named values, keeping only the
    /// present entries.
    ///
    /// Extras are applied first. A present named value replaces an extra of
    /// the same name; an absent named value leaves the extra alone.
    pub fn from_items<'k>(
        extra: &Map<String, Value>,
        named: impl IntoIterator<Item = (&'k str, Option<Value>)>,
    ) -> Self {
        let mut map = Map::new();
        for (key, value) in extra {
            if !value.is_null() {
                map.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in named {
            if let Some(value) = value {
                if !value.is_null() {
                    map.insert(key.to_string(), value);
                }
            }
        }
        Self(map)
    }

    /// Inserts a single present value, replacing any previous one.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if !value.is_null() {
            self.0.insert(key.to_string(), value);
        }
    }

    /// Returns a copy of `self` where keys missing from `self` are taken from
    /// `defaults`.
    pub fn with_defaults(&self, defaults: &Params) -> Params {
        let mut map = defaults.0.clone();
        for (key, value) in &self.0 {
            map.insert(key.clone(), value.clone());
        }
        Params(map)
    }

    /// Verifies that each declared parameter, when present, has the declared
    /// kind.
    pub fn check(&self, checks: &[(&str, ParamKind)]) -> Result<(), Error> {
        for (name, kind) in checks {
            if let Some(value) = self.0.get(*name) {
                if !kind.matches(value) {
                    return Err(Error::invalid_argument(
                        name,
                        format!("expected {}, got {}", kind, describe(value)),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens the parameters into query pairs. Arrays become repeated
    /// pairs, objects are sent as compact JSON text.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                Value::Array(values) => {
                    for value in values {
                        pairs.push((key.clone(), query_text(value)));
                    }
                }
                other => pairs.push((key.clone(), query_text(other))),
            }
        }
        pairs
    }

    /// Appends these parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.is_empty() {
            return url;
        }
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in self.to_query_pairs() {
                query.append_pair(&key, &value);
            }
        }
        url
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the parameters as a JSON object, for request bodies.
    pub fn into_json(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map.into_iter().filter(|(_, value)| !value.is_null()).collect())
    }
}

/// The JSON kind a parameter is declared to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Integer,
    Boolean,
    List,
}

impl ParamKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamKind::Text => value.is_string(),
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::List => value.is_array(),
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ParamKind::Text => "text",
                ParamKind::Integer => "an integer",
                ParamKind::Boolean => "a boolean",
                ParamKind::List => "a list",
            }
        )
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
