use serde_json::Value;

use crate::params::ParamKind;

use super::{number, text, Query, QueryCommon};

/// Filters shared by the telephony feature listings (auto attendants, hunt
/// groups, numbers).
#[derive(Clone, Debug, Default)]
pub struct TelephonyQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
    pub location_id: Option<String>,
    /// Zero-based offset into the matching objects.
    pub start: Option<u32>,
    pub phone_number: Option<String>,
}

impl Query for TelephonyQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("name", text(&self.name)),
            ("locationId", text(&self.location_id)),
            ("start", number(self.start)),
            ("phoneNumber", text(&self.phone_number)),
        ]
    }
    fn checks(&self) -> &'static [(&'static str, ParamKind)] {
        &[
            ("name", ParamKind::Text),
            ("phoneNumber", ParamKind::Text),
            ("locationId", ParamKind::Text),
            ("orgId", ParamKind::Text),
            ("max", ParamKind::Integer),
            ("start", ParamKind::Integer),
        ]
    }
}

impl TelephonyQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_location_id(mut self, location_id: &str) -> Self {
        self.location_id = Some(location_id.to_string());
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_phone_number(mut self, phone_number: &str) -> Self {
        self.phone_number = Some(phone_number.to_string());
        self
    }
}
