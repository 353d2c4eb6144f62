//! Entry point tying a transport and an object factory to the endpoint
//! wrappers.

use crate::{
    api::{
        ContactCenterApi, CsdmApi, DevicesApi, LocationsApi, PeopleApi, SkillsApi, TelephonyApi,
        WorkspacesApi,
    },
    config::SessionConfig,
    factory::{ObjectFactory, RecordFactory},
    session::RestSession,
    transport::Transport,
    Error,
};

/// API client.
///
/// Owns the transport and the object factory; each accessor returns a
/// lightweight wrapper borrowing both. Nothing is cached between calls.
pub struct Client<T = RestSession, F = RecordFactory> {
    transport: T,
    factory: F,
}

impl Client {
    /// Creates a client backed by a [`RestSession`] and the default
    /// [`RecordFactory`].
    pub fn new(config: &SessionConfig) -> Result<Self, Error> {
        Ok(Self {
            transport: RestSession::new(config)?,
            factory: RecordFactory,
        })
    }

    /// Creates a client against a non-default API root (regional
    /// contact-center hosts, test servers).
    pub fn with_base_url(base_url: &str, access_token: &str) -> Result<Self, Error> {
        Self::new(&SessionConfig::new(access_token).with_base_url(base_url))
    }

    /// Creates a client from `WEBEX_TEAMS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(&SessionConfig::from_env()?)
    }
}

impl<T, F> Client<T, F>
where
    T: Transport,
    F: ObjectFactory,
{
    /// Creates a client around any transport and factory.
    pub fn with_parts(transport: T, factory: F) -> Self {
        Self { transport, factory }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn people(&self) -> PeopleApi<'_, T, F> {
        PeopleApi::new(&self.transport, &self.factory)
    }

    pub fn devices(&self) -> DevicesApi<'_, T, F> {
        DevicesApi::new(&self.transport, &self.factory)
    }

    pub fn workspaces(&self) -> WorkspacesApi<'_, T, F> {
        WorkspacesApi::new(&self.transport, &self.factory)
    }

    pub fn locations(&self) -> LocationsApi<'_, T, F> {
        LocationsApi::new(&self.transport, &self.factory)
    }

    pub fn telephony(&self) -> TelephonyApi<'_, T, F> {
        TelephonyApi::new(&self.transport, &self.factory)
    }

    pub fn skills(&self) -> SkillsApi<'_, T, F> {
        SkillsApi::new(&self.transport, &self.factory)
    }

    pub fn contact_center(&self) -> ContactCenterApi<'_, T> {
        ContactCenterApi::new(&self.transport)
    }

    pub fn csdm(&self) -> CsdmApi<'_, T, F> {
        CsdmApi::new(&self.transport, &self.factory)
    }
}
