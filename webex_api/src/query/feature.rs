use serde_json::Value;

use crate::params::ParamKind;

use super::{text, Query, QueryCommon};

/// Filters for the organization-scoped generic feature collections
/// (contact-center configuration, skills).
#[derive(Clone, Debug, Default)]
pub struct FeatureQuery {
    pub common: QueryCommon,
    /// Sent as `type`.
    pub feature_type: Option<String>,
}

impl Query for FeatureQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn items(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![("type", text(&self.feature_type))]
    }
    fn checks(&self) -> &'static [(&'static str, ParamKind)] {
        &[("orgId", ParamKind::Text)]
    }
}

impl FeatureQuery {
    pub fn with_type(mut self, feature_type: &str) -> Self {
        self.feature_type = Some(feature_type.to_string());
        self
    }
}
