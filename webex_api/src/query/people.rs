use serde_json::{Map, Value};

use crate::params::ParamKind;

use super::{flag, list, text, Payload, Query, QueryCommon};

/// Filters for listing people. Non-admin callers must set `email` or
/// `display_name`.
#[derive(Clone, Debug, Default)]
pub struct PeopleQuery {
    pub common: QueryCommon,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Comma-separated person IDs.
    pub id: Option<String>,
    pub location_id: Option<String>,
    pub calling_data: Option<bool>,
}

impl Query for PeopleQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("email", text(&self.email)),
            ("displayName", text(&self.display_name)),
            ("id", text(&self.id)),
            ("locationId", text(&self.location_id)),
            ("callingData", flag(self.calling_data)),
        ]
    }
    fn checks(&self) -> &'static [(&'static str, ParamKind)] {
        &[
            ("email", ParamKind::Text),
            ("displayName", ParamKind::Text),
            ("id", ParamKind::Text),
            ("orgId", ParamKind::Text),
            ("locationId", ParamKind::Text),
            ("max", ParamKind::Integer),
            ("callingData", ParamKind::Boolean),
        ]
    }
}

impl PeopleQuery {
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.id = Some(ids.join(","));
        self
    }

    pub fn with_location_id(mut self, location_id: &str) -> Self {
        self.location_id = Some(location_id.to_string());
        self
    }

    pub fn with_calling_data(mut self, calling_data: bool) -> Self {
        self.calling_data = Some(calling_data);
        self
    }
}

/// Body for creating or replacing a person. Updates expect every field to be
/// present, so the usual flow is get, modify, then update.
#[derive(Clone, Debug, Default)]
pub struct PersonPayload {
    pub emails: Vec<String>,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// URL of a PNG avatar.
    pub avatar: Option<String>,
    pub org_id: Option<String>,
    pub location_id: Option<String>,
    /// Role IDs.
    pub roles: Option<Vec<String>>,
    /// License IDs.
    pub licenses: Option<Vec<String>>,
    pub extra: Map<String, Value>,
}

impl Payload for PersonPayload {
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("emails", Some(Value::from(self.emails.clone()))),
            ("displayName", text(&self.display_name)),
            ("firstName", text(&self.first_name)),
            ("lastName", text(&self.last_name)),
            ("avatar", text(&self.avatar)),
            ("orgId", text(&self.org_id)),
            ("locationId", text(&self.location_id)),
            ("roles", list(&self.roles)),
            ("licenses", list(&self.licenses)),
        ]
    }
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl PersonPayload {
    pub fn new(emails: &[&str]) -> Self {
        Self {
            emails: emails.iter().map(|e| e.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    pub fn with_org_id(mut self, org_id: &str) -> Self {
        self.org_id = Some(org_id.to_string());
        self
    }

    pub fn with_location_id(mut self, location_id: &str) -> Self {
        self.location_id = Some(location_id.to_string());
        self
    }

    pub fn with_roles(mut self, roles: &[String]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }

    pub fn with_licenses(mut self, licenses: &[String]) -> Self {
        self.licenses = Some(licenses.to_vec());
        self
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }
}
