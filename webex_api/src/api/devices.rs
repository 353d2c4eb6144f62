use serde_json::{Map, Value};

use crate::{
    factory::{Construct, ObjectFactory},
    params::Params,
    query::{DeviceQuery, Query},
    resource::Resource,
    transport::Transport,
    Error,
};

use super::Records;

const API_ENDPOINT: &str = "devices";
const OBJECT_TYPE: &str = "device";

pub struct DevicesApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> DevicesApi<'a, T, F>
where
    T: Transport,
    F: ObjectFactory,
{
    pub fn new(transport: &'a T, factory: &'a F) -> Self {
        Self { transport, factory }
    }

    fn resource(&self) -> Resource<'a, T, Construct<'a, F>> {
        Resource::new(
            self.transport,
            API_ENDPOINT,
            Construct::new(self.factory, OBJECT_TYPE),
        )
    }

    pub fn list(&self, query: &DeviceQuery) -> Result<Records<'a, T, F>, Error> {
        Ok(self.resource().list(query.to_params()?))
    }

    pub async fn get(&self, device_id: &str, org_id: Option<&str>) -> Result<F::Record, Error> {
        self.in_org(org_id).get(device_id, Params::new()).await
    }

    pub async fn delete(&self, device_id: &str, org_id: Option<&str>) -> Result<(), Error> {
        self.in_org(org_id).delete(device_id, Params::new()).await
    }

    /// The collection scoped to `org_id` (the token's own organization when
    /// `None`).
    fn in_org(&self, org_id: Option<&str>) -> Resource<'a, T, Construct<'a, F>> {
        self.resource().with_defaults(org_param(org_id))
    }
}

fn org_param(org_id: Option<&str>) -> Params {
    Params::from_items(&Map::new(), [("orgId", org_id.map(Value::from))])
}
