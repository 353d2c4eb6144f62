pub mod api;
mod client;
pub mod config;
mod errors;
pub mod factory;
mod pagination;
mod params;
mod query;
mod request;
mod resource;
mod session;
mod transport;
pub use self::client::Client;
pub use self::config::SessionConfig;
pub use self::errors::Error;
pub use self::factory::{Construct, Decode, ObjectFactory, Raw, Record, RecordFactory};
pub use self::pagination::{ItemList, Items};
pub use self::params::{ParamKind, Params};
pub use self::query::{
    DeviceQuery, FeatureQuery, LocationPayload, LocationQuery, Payload, PeopleQuery,
    PersonPayload, Query, QueryCommon, TelephonyQuery, WorkspacePayload, WorkspaceQuery,
};
pub use self::request::{ItemsKey, Request};
pub use self::resource::{expand, Resource};
pub use self::session::RestSession;
pub use self::transport::{Page, Transport};
pub use reqwest::{Method, StatusCode};
