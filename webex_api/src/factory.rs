//! Turning raw JSON into records.
//!
//! Every endpoint either hands raw JSON back to the caller or passes it
//! through an [`ObjectFactory`] together with the endpoint's type tag. The
//! choice is made per endpoint through a [`Decode`] strategy.

use serde::Serialize;
use serde_json::Value;

/// Maps a type tag and a raw JSON object to a record. Must be pure: it is
/// called exactly once per item or response.
pub trait ObjectFactory {
    type Record;

    fn construct(&self, type_tag: &str, raw: Value) -> Self::Record;
}

/// Default record: the raw JSON plus the type tag it was constructed under.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    #[serde(skip)]
    object_type: String,
    json: Value,
}

impl Record {
    pub fn new(object_type: &str, json: Value) -> Self {
        Self {
            object_type: object_type.to_string(),
            json,
        }
    }

    /// The tag the factory was called with (`workspace`, `device`, ...).
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The vendor identifier, if the object carries one.
    pub fn id(&self) -> Option<&str> {
        self.json.get("id").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.json.get(field)
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn into_json(self) -> Value {
        self.json
    }
}

/// Factory producing [`Record`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFactory;

impl ObjectFactory for RecordFactory {
    type Record = Record;

    fn construct(&self, type_tag: &str, raw: Value) -> Record {
        Record::new(type_tag, raw)
    }
}

/// How an endpoint turns a raw JSON value into what the caller receives.
pub trait Decode {
    type Output;

    fn decode(&self, raw: Value) -> Self::Output;
}

/// Hands the JSON back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Decode for Raw {
    type Output = Value;

    fn decode(&self, raw: Value) -> Value {
        raw
    }
}

/// Runs the JSON through an object factory under a fixed type tag.
pub struct Construct<'a, F> {
    factory: &'a F,
    type_tag: &'static str,
}

impl<'a, F> Construct<'a, F> {
    pub fn new(factory: &'a F, type_tag: &'static str) -> Self {
        Self { factory, type_tag }
    }

    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }
}

impl<F> Clone for Construct<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Construct<'_, F> {}

impl<F: ObjectFactory> Decode for Construct<'_, F> {
    type Output = F::Record;

    fn decode(&self, raw: Value) -> F::Record {
        self.factory.construct(self.type_tag, raw)
    }
}
