use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    factory::{Construct, ObjectFactory, Raw},
    params::Params,
    query::{FeatureQuery, Query},
    request::ItemsKey,
    resource::{expand, Resource},
    transport::Transport,
    Error,
};

use super::RawItems;

// Tag for created skills.
const CREATED_OBJECT_TYPE: &str = "OBJECT_TYPE";

/// Contact-center skills.
pub struct SkillsApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> SkillsApi<'a, T, F>
where
    T: Transport,
    F: ObjectFactory,
{
    pub fn new(transport: &'a T, factory: &'a F) -> Self {
        Self { transport, factory }
    }

    /// Lists skills as raw JSON.
    pub fn list(&self, org_id: &str, query: &FeatureQuery) -> Result<RawItems<'a, T>, Error> {
        let mut query = query.clone();
        query.common.org_id = Some(org_id.to_string());
        let params = query.to_params()?;
        let path = expand("/organization/{orgId}/v2/skill", &[("orgId", org_id)], &[])?;
        Ok(Resource::new(self.transport, path, Raw)
            .with_items_key(ItemsKey::Field("data"))
            .list(params))
    }

    pub async fn create(&self, org_id: &str, payload: Value) -> Result<F::Record, Error> {
        let path = expand("/organization/{orgId}/skill", &[("orgId", org_id)], &[])?;
        Resource::new(
            self.transport,
            path,
            Construct::new(self.factory, CREATED_OBJECT_TYPE),
        )
        .create(payload, Params::new(), StatusCode::CREATED)
        .await
    }

    pub async fn delete(&self, org_id: &str, skill_id: &str) -> Result<(), Error> {
        let path = expand("/organization/{orgId}/skill", &[("orgId", org_id)], &[])?;
        Resource::new(self.transport, path, Raw)
            .delete(skill_id, Params::new())
            .await
    }
}
