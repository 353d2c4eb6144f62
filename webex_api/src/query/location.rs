use serde_json::{Map, Value};

use crate::params::ParamKind;

use super::{text, Payload, Query, QueryCommon};

#[derive(Clone, Debug, Default)]
pub struct LocationQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
    pub id: Option<String>,
}

impl Query for LocationQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![("id", text(&self.id)), ("name", text(&self.name))]
    }
    fn checks(&self) -> &'static [(&'static str, ParamKind)] {
        &[
            ("id", ParamKind::Text),
            ("name", ParamKind::Text),
            ("orgId", ParamKind::Text),
            ("max", ParamKind::Integer),
        ]
    }
}

impl LocationQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
}

/// Body for creating or updating a location. All named fields are required
/// by the API.
#[derive(Clone, Debug)]
pub struct LocationPayload {
    pub name: String,
    /// IANA zone, e.g. `America/Chicago`.
    pub time_zone: String,
    pub preferred_language: String,
    pub announcement_language: String,
    /// Postal address object (`address1`, `city`, `state`, `postalCode`,
    /// `country`).
    pub address: Value,
    pub extra: Map<String, Value>,
}

impl Payload for LocationPayload {
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("name", Some(Value::from(self.name.clone()))),
            ("timeZone", Some(Value::from(self.time_zone.clone()))),
            (
                "preferredLanguage",
                Some(Value::from(self.preferred_language.clone())),
            ),
            (
                "announcementLanguage",
                Some(Value::from(self.announcement_language.clone())),
            ),
            ("address", Some(self.address.clone())),
        ]
    }
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl LocationPayload {
    pub fn new(
        name: &str,
        time_zone: &str,
        preferred_language: &str,
        announcement_language: &str,
        address: Value,
    ) -> Self {
        Self {
            name: name.to_string(),
            time_zone: time_zone.to_string(),
            preferred_language: preferred_language.to_string(),
            announcement_language: announcement_language.to_string(),
            address,
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }
}
