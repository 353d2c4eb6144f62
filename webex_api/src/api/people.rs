use reqwest::StatusCode;

use crate::{
    factory::{Construct, ObjectFactory},
    params::Params,
    query::{Payload, PeopleQuery, PersonPayload, Query},
    resource::{check_id, Resource},
    transport::Transport,
    Error,
};

use super::Records;

const API_ENDPOINT: &str = "people";
const OBJECT_TYPE: &str = "person";

/// People in the organization.
pub struct PeopleApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> PeopleApi<'a, T, F>
where
    T: Transport,
    F: ObjectFactory,
{
    pub fn new(transport: &'a T, factory: &'a F) -> Self {
        Self { transport, factory }
    }

    fn resource(&self, path: &str) -> Resource<'a, T, Construct<'a, F>> {
        Resource::new(self.transport, path, Construct::new(self.factory, OBJECT_TYPE))
    }

    pub fn list(&self, query: &PeopleQuery) -> Result<Records<'a, T, F>, Error> {
        Ok(self.resource(API_ENDPOINT).list(query.to_params()?))
    }

    pub async fn get(&self, person_id: &str, calling_data: bool) -> Result<F::Record, Error> {
        self.resource(API_ENDPOINT)
            .get(person_id, calling_data_param(calling_data))
            .await
    }

    /// The person the access token belongs to.
    pub async fn me(&self) -> Result<F::Record, Error> {
        self.resource("people/me").fetch(Params::new()).await
    }

    pub async fn get_voicemail(&self, person_id: &str) -> Result<F::Record, Error> {
        check_id("personId", person_id)?;
        self.resource(&format!("{}/{}/features/voicemail", API_ENDPOINT, person_id))
            .fetch(Params::new())
            .await
    }

    pub async fn get_forwarding(&self, person_id: &str) -> Result<F::Record, Error> {
        check_id("personId", person_id)?;
        self.resource(&format!("{}/{}/features/callForwarding", API_ENDPOINT, person_id))
            .fetch(Params::new())
            .await
    }

    /// Creates a person. Admin only.
    pub async fn create(
        &self,
        payload: &PersonPayload,
        calling_data: bool,
    ) -> Result<F::Record, Error> {
        self.resource(API_ENDPOINT)
            .create(
                payload.to_body(),
                calling_data_param(calling_data),
                StatusCode::OK,
            )
            .await
    }

    /// Replaces a person's details. Email addresses cannot be changed.
    pub async fn update(
        &self,
        person_id: &str,
        payload: &PersonPayload,
        calling_data: bool,
    ) -> Result<F::Record, Error> {
        self.resource(API_ENDPOINT)
            .update(
                person_id,
                payload.to_body(),
                calling_data_param(calling_data),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, person_id: &str) -> Result<(), Error> {
        self.resource(API_ENDPOINT)
            .delete(person_id, Params::new())
            .await
    }
}

fn calling_data_param(calling_data: bool) -> Params {
    let mut params = Params::new();
    params.insert("callingData", calling_data);
    params
}
