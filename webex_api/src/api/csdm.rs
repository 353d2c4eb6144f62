use serde_json::{json, Value};

use crate::{
    factory::{Construct, ObjectFactory},
    params::Params,
    query::FeatureQuery,
    request::ItemsKey,
    resource::{expand, Resource},
    transport::Transport,
    Error,
};

use super::{ContactCenterApi, RawItems, Records};

const OBJECT_TYPE: &str = "";
const FEATURE_TEMPLATE: &str = "/csdm/api/v1/organization/{orgId}/{feature}";

/// Search body sent by [`CsdmApi::list`]: the first 100 hits sorted by
/// category, with connection/category/calling aggregates.
pub fn csdm_search() -> Value {
    json!({
        "query": null,
        "aggregates": ["connectionStatus", "category", "callingType"],
        "size": 100,
        "from": 0,
        "sortField": "category",
        "sortOrder": "asc",
        "initial": true,
        "translatedQueryString": ""
    })
}

/// Cloud device management: device search plus the organization-scoped
/// feature operations shared with the contact-center API.
pub struct CsdmApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> CsdmApi<'a, T, F>
where
    T: Transport,
    F: ObjectFactory,
{
    pub fn new(transport: &'a T, factory: &'a F) -> Self {
        Self { transport, factory }
    }

    fn features(&self) -> ContactCenterApi<'a, T> {
        ContactCenterApi::new(self.transport)
    }

    fn resource(&self, org_id: &str, feature: &str) -> Result<Resource<'a, T, Construct<'a, F>>, Error> {
        let path = expand(
            FEATURE_TEMPLATE,
            &[("orgId", org_id), ("feature", feature)],
            &["feature"],
        )?;
        Ok(Resource::new(
            self.transport,
            path,
            Construct::new(self.factory, OBJECT_TYPE),
        ))
    }

    pub async fn get(&self, org_id: &str, feature: &str, device_id: &str) -> Result<F::Record, Error> {
        self.resource(org_id, feature)?
            .get(device_id, Params::new())
            .await
    }

    /// Searches devices. Unlike every other listing this is a POST carrying
    /// the fixed [`csdm_search`] body.
    pub fn list(&self, org_id: &str, feature: &str) -> Result<Records<'a, T, F>, Error> {
        Ok(self
            .resource(org_id, feature)?
            .with_items_key(ItemsKey::Field("hits"))
            .search(csdm_search()))
    }

    pub fn list_feature_list(
        &self,
        org_id: &str,
        feature: &str,
        query: &FeatureQuery,
    ) -> Result<RawItems<'a, T>, Error> {
        self.features().list_feature_list(org_id, feature, query)
    }

    pub async fn create_feature(
        &self,
        org_id: &str,
        feature: &str,
        payload: Value,
    ) -> Result<Value, Error> {
        self.features().create_feature(org_id, feature, payload).await
    }

    pub async fn update_feature(
        &self,
        org_id: &str,
        feature: &str,
        id: &str,
        payload: Value,
    ) -> Result<Value, Error> {
        self.features()
            .update_feature(org_id, feature, id, payload)
            .await
    }

    pub async fn delete_feature(&self, org_id: &str, feature: &str, id: &str) -> Result<(), Error> {
        self.features().delete_feature(org_id, feature, id).await
    }
}
