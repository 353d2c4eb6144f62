use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    factory::Raw,
    params::Params,
    query::{FeatureQuery, Query},
    request::ItemsKey,
    resource::{expand, Resource},
    transport::Transport,
    Error,
};

use super::RawItems;

const FEATURE_TEMPLATE: &str = "/organization/{orgId}/{feature}";

/// Contact-center configuration, addressed by feature name
/// (`team`, `entry-point`, `queue`, `site`, ...) under one organization.
///
/// Everything is returned as raw JSON.
pub struct ContactCenterApi<'a, T> {
    transport: &'a T,
}

impl<'a, T> ContactCenterApi<'a, T>
where
    T: Transport,
{
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    fn feature(&self, org_id: &str, feature: &str) -> Result<Resource<'a, T, Raw>, Error> {
        let path = expand(
            FEATURE_TEMPLATE,
            &[("orgId", org_id), ("feature", feature)],
            &["feature"],
        )?;
        Ok(Resource::new(self.transport, path, Raw))
    }

    fn list_with(
        &self,
        org_id: &str,
        feature: &str,
        query: &FeatureQuery,
        items_key: ItemsKey,
    ) -> Result<RawItems<'a, T>, Error> {
        let mut query = query.clone();
        query.common.org_id = Some(org_id.to_string());
        let params = query.to_params()?;
        Ok(self
            .feature(org_id, feature)?
            .with_items_key(items_key)
            .list(params))
    }

    /// Lists a feature whose pages keep items under `data`.
    pub fn list_feature(
        &self,
        org_id: &str,
        feature: &str,
        query: &FeatureQuery,
    ) -> Result<RawItems<'a, T>, Error> {
        self.list_with(org_id, feature, query, ItemsKey::Field("data"))
    }

    /// Lists a feature whose response body is the item array itself.
    pub fn list_feature_list(
        &self,
        org_id: &str,
        feature: &str,
        query: &FeatureQuery,
    ) -> Result<RawItems<'a, T>, Error> {
        self.list_with(org_id, feature, query, ItemsKey::Root)
    }

    /// Lists a feature whose pages keep items under `resources` (queues).
    pub fn list_queues(
        &self,
        org_id: &str,
        feature: &str,
        query: &FeatureQuery,
    ) -> Result<RawItems<'a, T>, Error> {
        self.list_with(org_id, feature, query, ItemsKey::Field("resources"))
    }

    pub async fn get_feature(&self, org_id: &str, feature: &str, id: &str) -> Result<Value, Error> {
        self.feature(org_id, feature)?.get(id, Params::new()).await
    }

    pub async fn create_feature(
        &self,
        org_id: &str,
        feature: &str,
        payload: Value,
    ) -> Result<Value, Error> {
        self.feature(org_id, feature)?
            .create(payload, Params::new(), StatusCode::CREATED)
            .await
    }

    pub async fn update_feature(
        &self,
        org_id: &str,
        feature: &str,
        id: &str,
        payload: Value,
    ) -> Result<Value, Error> {
        self.feature(org_id, feature)?
            .update(id, payload, Params::new(), StatusCode::OK)
            .await
    }

    pub async fn delete_feature(&self, org_id: &str, feature: &str, id: &str) -> Result<(), Error> {
        self.feature(org_id, feature)?.delete(id, Params::new()).await
    }
}
