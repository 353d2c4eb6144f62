use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    factory::{Construct, ObjectFactory, Raw},
    params::Params,
    query::{Payload, Query, WorkspacePayload, WorkspaceQuery},
    resource::Resource,
    transport::Transport,
    Error,
};

use super::Records;

const API_ENDPOINT: &str = "workspaces";
const OBJECT_TYPE: &str = "workspace";

pub struct WorkspacesApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> WorkspacesApi<'a, T, F>
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

    pub fn list(&self, query: &WorkspaceQuery) -> Result<Records<'a, T, F>, Error> {
        Ok(self.resource().list(query.to_params()?))
    }

    pub async fn create(&self, payload: &WorkspacePayload) -> Result<F::Record, Error> {
        self.resource()
            .create(payload.to_body(), Params::new(), StatusCode::CREATED)
            .await
    }

    /// Returns the workspace JSON as sent by the API, without going through
    /// the object factory.
    pub async fn get(&self, workspace_id: &str) -> Result<Value, Error> {
        Resource::new(self.transport, API_ENDPOINT, Raw)
            .get(workspace_id, Params::new())
            .await
    }

    pub async fn update(
        &self,
        workspace_id: &str,
        payload: &WorkspacePayload,
    ) -> Result<F::Record, Error> {
        self.resource()
            .update(workspace_id, payload.to_body(), Params::new(), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, workspace_id: &str) -> Result<(), Error> {
        self.resource().delete(workspace_id, Params::new()).await
    }
}
