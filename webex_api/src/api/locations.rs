use reqwest::StatusCode;

use crate::{
    factory::{Construct, ObjectFactory},
    params::Params,
    query::{LocationPayload, LocationQuery, Payload, Query},
    resource::Resource,
    transport::Transport,
    Error,
};

use super::Records;

const API_ENDPOINT: &str = "locations";
const OBJECT_TYPE: &str = "locations";

pub struct LocationsApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> LocationsApi<'a, T, F>
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

    pub fn list(&self, query: &LocationQuery) -> Result<Records<'a, T, F>, Error> {
        Ok(self.resource().list(query.to_params()?))
    }

    pub async fn create(&self, payload: &LocationPayload) -> Result<F::Record, Error> {
        self.resource()
            .create(payload.to_body(), Params::new(), StatusCode::CREATED)
            .await
    }

    /// Updates a location. The API acknowledges with `204 No Content`, so
    /// there is nothing to return on success.
    pub async fn update(&self, location_id: &str, payload: &LocationPayload) -> Result<(), Error> {
        self.resource()
            .replace(
                location_id,
                payload.to_body(),
                Params::new(),
                StatusCode::NO_CONTENT,
            )
            .await
    }
}
