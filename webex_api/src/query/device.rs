use serde_json::Value;

use super::{text, Query, QueryCommon};

#[derive(Clone, Debug, Default)]
pub struct DeviceQuery {
    pub common: QueryCommon,
    pub person_id: Option<String>,
    /// Workspace the device belongs to.
    pub place_id: Option<String>,
    pub display_name: Option<String>,
    pub product: Option<String>,
    pub capability: Option<String>,
}

impl Query for DeviceQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("personId", text(&self.person_id)),
            ("placeId", text(&self.place_id)),
            ("displayName", text(&self.display_name)),
            ("product", text(&self.product)),
            ("capability", text(&self.capability)),
        ]
    }
}

impl DeviceQuery {
    pub fn with_person_id(mut self, person_id: &str) -> Self {
        self.person_id = Some(person_id.to_string());
        self
    }

    pub fn with_place_id(mut self, place_id: &str) -> Self {
        self.place_id = Some(place_id.to_string());
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_product(mut self, product: &str) -> Self {
        self.product = Some(product.to_string());
        self
    }

    pub fn with_capability(mut self, capability: &str) -> Self {
        self.capability = Some(capability.to_string());
        self
    }
}
