//! Shared query infrastructure: the [`Query`] and [`Payload`] traits and the
//! [`QueryCommon`] fields.

use serde_json::{Map, Value};

use crate::{
    params::{ParamKind, Params},
    Error,
};

/// Trait implemented by all list/get filters. Provides parameter building and
/// shared builder methods for the organization, page size and extra
/// parameters.
pub trait Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Named filters specific to this query, by wire name.
    fn items(&self) -> Vec<(&'static str, Option<Value>)>;

    /// Filters whose value must be of a particular kind.
    fn checks(&self) -> &'static [(&'static str, ParamKind)] {
        &[("orgId", ParamKind::Text), ("max", ParamKind::Integer)]
    }

    /// Builds the filtered parameter map, rejecting wrongly-kinded values.
    fn to_params(&self) -> Result<Params, Error> {
        let common = self.common();
        let mut named = vec![
            ("orgId", common.org_id.clone().map(Value::from)),
            ("max", common.max.map(Value::from)),
        ];
        named.extend(self.items());
        let params = Params::from_items(&common.extra, named);
        params.check(self.checks())?;
        Ok(params)
    }

    /// Restricts the query to an organization.
    fn with_org_id(mut self, org_id: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().org_id = Some(org_id.to_string());
        self
    }

    /// Sets the number of results per page.
    fn with_max(mut self, max: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().max = Some(max);
        self
    }

    /// Adds a parameter the typed fields don't cover. Named fields win when
    /// both are set.
    fn with_param(mut self, name: &str, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.get_common().extra.insert(name.to_string(), value.into());
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCommon {
    /// Organization to list in. `None` uses the caller's own organization.
    pub org_id: Option<String>,
    /// Results per page. `None` uses the API default.
    pub max: Option<u32>,
    /// Parameters not covered by typed fields, sent as-is.
    pub extra: Map<String, Value>,
}

/// Trait implemented by JSON request bodies.
pub trait Payload {
    /// Named fields by wire name.
    fn items(&self) -> Vec<(&'static str, Option<Value>)>;

    /// Extra body fields sent as-is.
    fn extra(&self) -> &Map<String, Value>;

    fn to_body(&self) -> Value {
        Params::from_items(self.extra(), self.items()).into_json()
    }
}

pub(crate) fn text(value: &Option<String>) -> Option<Value> {
    value.clone().map(Value::from)
}

pub(crate) fn number(value: Option<u32>) -> Option<Value> {
    value.map(Value::from)
}

pub(crate) fn flag(value: Option<bool>) -> Option<Value> {
    value.map(Value::from)
}

pub(crate) fn list(value: &Option<Vec<String>>) -> Option<Value> {
    value.clone().map(Value::from)
}
