use serde_json::{Map, Value};

use crate::params::ParamKind;

use super::{number, text, Payload, Query, QueryCommon};

#[derive(Clone, Debug, Default)]
pub struct WorkspaceQuery {
    pub common: QueryCommon,
    pub workspace_location_id: Option<String>,
    pub floor_id: Option<String>,
    pub display_name: Option<String>,
    pub capacity: Option<u32>,
    /// Sent as `type` (`meetingRoom`, `desk`, ...).
    pub workspace_type: Option<String>,
    /// Zero-based offset into the matching workspaces.
    pub start: Option<u32>,
    pub calling: Option<String>,
    pub calendar: Option<String>,
}

impl Query for WorkspaceQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("workspaceLocationId", text(&self.workspace_location_id)),
            ("floorId", text(&self.floor_id)),
            ("displayName", text(&self.display_name)),
            ("capacity", number(self.capacity)),
            ("type", text(&self.workspace_type)),
            ("start", number(self.start)),
            ("calling", text(&self.calling)),
            ("calendar", text(&self.calendar)),
        ]
    }
    fn checks(&self) -> &'static [(&'static str, ParamKind)] {
        &[
            ("orgId", ParamKind::Text),
            ("workspaceLocationId", ParamKind::Text),
            ("floorId", ParamKind::Text),
            ("displayName", ParamKind::Text),
            ("type", ParamKind::Text),
            ("capacity", ParamKind::Integer),
            ("start", ParamKind::Integer),
            ("max", ParamKind::Integer),
        ]
    }
}

impl WorkspaceQuery {
    pub fn with_workspace_location_id(mut self, workspace_location_id: &str) -> Self {
        self.workspace_location_id = Some(workspace_location_id.to_string());
        self
    }

    pub fn with_floor_id(mut self, floor_id: &str) -> Self {
        self.floor_id = Some(floor_id.to_string());
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_type(mut self, workspace_type: &str) -> Self {
        self.workspace_type = Some(workspace_type.to_string());
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_calling(mut self, calling: &str) -> Self {
        self.calling = Some(calling.to_string());
        self
    }

    pub fn with_calendar(mut self, calendar: &str) -> Self {
        self.calendar = Some(calendar.to_string());
        self
    }
}

/// Body for creating or updating a workspace.
#[derive(Clone, Debug, Default)]
pub struct WorkspacePayload {
    pub org_id: Option<String>,
    pub workspace_location_id: Option<String>,
    pub floor_id: Option<String>,
    pub display_name: Option<String>,
    pub capacity: Option<u32>,
    pub workspace_type: Option<String>,
    /// Calling configuration object, e.g. `{"type": "freeCalling"}`.
    pub calling: Option<Value>,
    /// Calendar configuration object.
    pub calendar: Option<Value>,
    pub extra: Map<String, Value>,
}

impl Payload for WorkspacePayload {
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("orgId", text(&self.org_id)),
            ("workspaceLocationId", text(&self.workspace_location_id)),
            ("floorId", text(&self.floor_id)),
            ("displayName", text(&self.display_name)),
            ("capacity", number(self.capacity)),
            ("type", text(&self.workspace_type)),
            ("calling", self.calling.clone()),
            ("calendar", self.calendar.clone()),
        ]
    }
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl WorkspacePayload {
    pub fn new(display_name: &str) -> Self {
        Self {
            display_name: Some(display_name.to_string()),
            ..Default::default()
        }
    }

    pub fn with_org_id(mut self, org_id: &str) -> Self {
        self.org_id = Some(org_id.to_string());
        self
    }

    pub fn with_workspace_location_id(mut self, workspace_location_id: &str) -> Self {
        self.workspace_location_id = Some(workspace_location_id.to_string());
        self
    }

    pub fn with_floor_id(mut self, floor_id: &str) -> Self {
        self.floor_id = Some(floor_id.to_string());
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_type(mut self, workspace_type: &str) -> Self {
        self.workspace_type = Some(workspace_type.to_string());
        self
    }

    pub fn with_calling(mut self, calling: Value) -> Self {
        self.calling = Some(calling);
        self
    }

    pub fn with_calendar(mut self, calendar: Value) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }
}
